//! A multiset built on [`BinarySearchTree`].
//!
//! Each distinct value is stored once, in a [`Pair`] with the number of
//! times it was added. The pairs are ordered on the value alone (see
//! [`ByFirst`]) so the count never affects where a pair lives in the tree.
//!
//! That's what makes the one piece of mutation in this crate sound: adding a
//! value that's already present bumps its count in place instead of
//! rebuilding the path to it. The count isn't part of the ordering so the
//! tree's shape and invariants are untouched. It also means a `Multiset`
//! can't be cheaply cloned, since the clone would share those counts.
//!
//! # Examples
//!
//! ```
//! use ordset::Multiset;
//!
//! let mut bag = Multiset::new();
//! for x in [6, 2, 9, 3, 8, 8] {
//!     bag.add(x);
//! }
//!
//! assert_eq!(bag.item_count(&8), 2);
//! assert_eq!(bag.item_count(&5), 0);
//! assert_eq!(bag.size(), 5);
//!
//! // Equality doesn't care about insertion order.
//! let mut other: Multiset<_> = vec![8, 3, 2, 8, 9].into_iter().collect();
//! assert_ne!(bag, other);
//! other.add(6);
//! assert_eq!(bag, other);
//! assert_eq!(bag.hash_code(), other.hash_code());
//! ```

use std::cell::Cell;
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};

use crate::bst::{self, BinarySearchTree};
use crate::error::Result;
use crate::order::{Comparator, Natural};

/// Two values stuck together.
pub struct Pair<A, B> {
    first: A,
    second: B,
}

impl<A, B> Pair<A, B> {
    /// Sticks `first` and `second` together.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// The first value.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// The second value.
    pub fn second(&self) -> &B {
        &self.second
    }
}

/// Orders [`Pair`]s by their first value using the wrapped comparator. The
/// second value is ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ByFirst<C>(pub C);

impl<A, B, C> Comparator<Pair<A, B>> for ByFirst<C>
where
    C: Comparator<A>,
{
    fn compare(&self, left: &Pair<A, B>, right: &Pair<A, B>) -> Ordering {
        self.0.compare(left.first(), right.first())
    }
}

type Counted<T> = Pair<T, Cell<usize>>;

/// A set that remembers how many times each value was added.
///
/// Two multisets are equal when each contains the other, i.e. they hold the
/// same values with the same counts. How they were built doesn't matter.
pub struct Multiset<T, C = Natural> {
    tree: BinarySearchTree<Counted<T>, ByFirst<C>>,
}

impl<T: Ord> Multiset<T> {
    /// Generates a new, empty `Multiset` ordered by `T`'s [`Ord`]
    /// implementation.
    pub fn new() -> Self {
        Self::with_order(Natural)
    }
}

impl<T: Ord> Default for Multiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> fmt::Debug for Multiset<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T, C> Multiset<T, C> {
    /// Generates a new, empty `Multiset` ordered by `order`.
    pub fn with_order(order: C) -> Self {
        Self {
            tree: BinarySearchTree::with_order(ByFirst(order)),
        }
    }

    /// The number of distinct values.
    pub fn size(&self) -> usize {
        self.tree.size()
    }

    /// The total number of values, counting repeats.
    pub fn len(&self) -> usize {
        self.iter().map(|(_, count)| count).sum()
    }

    /// Whether nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Gets the `index`th smallest distinct value along with its count.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`][crate::Error::IndexOutOfBounds] if
    /// `index` isn't less than [`size`][Self::size].
    pub fn get(&self, index: usize) -> Result<(&T, usize)> {
        self.tree.get(index).map(unpack)
    }

    /// Walks each distinct value and its count in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.tree.iter(),
        }
    }

    /// The comparator this multiset was built with.
    pub fn order(&self) -> &C {
        &self.tree.order().0
    }

    /// A hash of the contents: the sum of each value's hash times its count.
    /// Addition doesn't care about order so equal multisets hash the same as
    /// long as `T`'s `Hash` agrees with the comparator.
    pub fn hash_code(&self) -> u64
    where
        T: Hash,
    {
        self.iter().fold(0u64, |hash, (value, count)| {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hash.wrapping_add(hasher.finish().wrapping_mul(count as u64))
        })
    }
}

impl<T, C> Multiset<T, C>
where
    C: Comparator<T>,
{
    fn find_pair(&self, item: &T) -> Option<&Counted<T>> {
        let order = self.order();
        self.tree
            .find(|pair: &Counted<T>| order.compare(pair.first(), item))
    }

    /// How many times `item` has been added.
    pub fn item_count(&self, item: &T) -> usize {
        self.find_pair(item).map_or(0, |pair| pair.second.get())
    }

    /// Adds one occurrence of `item`.
    pub fn add(&mut self, item: T) {
        if let Some(pair) = self.find_pair(&item) {
            let count = pair.second.get() + 1;
            pair.second.set(count);
            log::trace!("multiset count bumped to {}", count);
            return;
        }

        log::trace!("adding new value to multiset");
        self.tree.insert(Pair::new(item, Cell::new(1)));
    }

    /// Whether every value in `other` appears in `self` at least as many
    /// times. Everything has the empty multiset as a subset.
    pub fn has_subset<D>(&self, other: &Multiset<T, D>) -> bool {
        other
            .iter()
            .all(|(value, count)| self.item_count(value) >= count)
    }
}

impl<T, C, D> PartialEq<Multiset<T, D>> for Multiset<T, C>
where
    C: Comparator<T>,
    D: Comparator<T>,
{
    fn eq(&self, other: &Multiset<T, D>) -> bool {
        self.has_subset(other) && other.has_subset(self)
    }
}

impl<T, C> Eq for Multiset<T, C> where C: Comparator<T> {}

impl<T, C> Hash for Multiset<T, C>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<T, C> Extend<T> for Multiset<T, C>
where
    C: Comparator<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for Multiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, T, C> IntoIterator for &'a Multiset<T, C> {
    type Item = (&'a T, usize);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn unpack<T>(pair: &Counted<T>) -> (&T, usize) {
    (pair.first(), pair.second.get())
}

/// Walks each distinct value of a [`Multiset`] with its count.
pub struct Iter<'a, T> {
    inner: bst::Iter<'a, Counted<T>>,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(unpack)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(unpack)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}
