//! A binary search tree that owns its ordering.
//!
//! [`BinarySearchTree`] holds the root of a persistent [`Tree`] and the
//! [`Comparator`] used to build it. Inserting replaces the stored root with a
//! new version; any clone taken beforehand keeps seeing the old version.
//!
//! There is no balancing so operations take `O(height)` and a tree built from
//! sorted input degrades to a list.
//!
//! # Examples
//!
//! ```
//! use ordset::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find_item(&6), None);
//!
//! for x in [6, 2, 9, 3] {
//!     tree.insert(x);
//! }
//! let snapshot = tree.clone();
//! tree.insert(1);
//!
//! assert_eq!(tree.find_item(&6), Some(&6));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 6, 9]);
//!
//! // The snapshot doesn't see the new value.
//! assert_eq!(snapshot.size(), 4);
//! assert_eq!(snapshot.get(0), Ok(&2));
//! assert!(snapshot.get(4).is_err());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::{FromIterator, FusedIterator};

use crate::error::{Error, Result};
use crate::order::{compare_to, Comparator, Natural};
use crate::tree::{CountNodes, Find, GetByIndex, Insert, Tree};
use crate::visit::Visitor;

/// A Binary Search Tree. This can be used for inserting and finding values
/// and for walking them in sorted order. Values that compare equal under the
/// tree's comparator are only stored once.
pub struct BinarySearchTree<T, C = Natural> {
    root: Tree<T>,
    order: C,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Generates a new, empty `BinarySearchTree` ordered by `T`'s [`Ord`]
    /// implementation.
    pub fn new() -> Self {
        Self::with_order(Natural)
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloning is cheap: the new tree shares every node with the old one.
impl<T, C: Clone> Clone for BinarySearchTree<T, C> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            order: self.order.clone(),
        }
    }
}

impl<T, C> fmt::Debug for BinarySearchTree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C> BinarySearchTree<T, C> {
    /// Generates a new, empty `BinarySearchTree` ordered by `order`. The
    /// order can't be changed afterwards.
    pub fn with_order(order: C) -> Self {
        Self {
            root: Tree::new(),
            order,
        }
    }

    /// Finds a value using a search function. See [`Find`] for what the
    /// search function should return.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordset::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = vec![6, 2, 9, 3].into_iter().collect();
    ///
    /// // The first value in 7..=10 the search comes across.
    /// let found = tree.find(|x: &i32| {
    ///     if *x < 7 {
    ///         std::cmp::Ordering::Less
    ///     } else if *x > 10 {
    ///         std::cmp::Ordering::Greater
    ///     } else {
    ///         std::cmp::Ordering::Equal
    ///     }
    /// });
    /// assert_eq!(found, Some(&9));
    /// ```
    pub fn find<F>(&self, search: F) -> Option<&T>
    where
        F: Fn(&T) -> Ordering,
    {
        Find::new(search).apply(&self.root)
    }

    /// The number of values in the tree. This walks the whole tree.
    pub fn size(&self) -> usize {
        CountNodes.apply(&self.root)
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// Gets the `index`th smallest value.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if `index` isn't less than
    /// [`size`][Self::size].
    pub fn get(&self, index: usize) -> Result<&T> {
        GetByIndex::new(index).apply(&self.root).ok_or_else(|| {
            let size = self.size();
            log::debug!("index {} requested from a tree of size {}", index, size);
            Error::IndexOutOfBounds { index, size }
        })
    }

    /// Walks the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root)
    }

    /// The current version of the underlying tree. Useful for applying custom
    /// [`Visitor`]s.
    pub fn root(&self) -> &Tree<T> {
        &self.root
    }

    /// The comparator this tree was built with.
    pub fn order(&self) -> &C {
        &self.order
    }
}

impl<T, C> BinarySearchTree<T, C>
where
    C: Comparator<T>,
{
    /// Adds `item` to the tree. If a value that compares equal to `item` is
    /// already present nothing changes.
    pub fn insert(&mut self, item: T) {
        log::trace!("inserting into binary search tree");
        self.root = Insert::new(item, &self.order).apply(&self.root);
    }

    /// Finds the stored value that compares equal to `item`.
    pub fn find_item(&self, item: &T) -> Option<&T> {
        self.find(compare_to(&self.order, item))
    }

    /// Whether a value that compares equal to `item` is stored.
    pub fn contains(&self, item: &T) -> bool {
        self.find_item(item).is_some()
    }
}

impl<T, C> Extend<T> for BinarySearchTree<T, C>
where
    C: Comparator<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T, C> IntoIterator for &'a BinarySearchTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An in-order walk over one version of a tree.
///
/// Each step is a rank selection by index so the iterator holds no pointers
/// into the tree besides the root. The size is counted once up front. Any
/// number of these can walk the same tree independently.
pub struct Iter<'a, T> {
    root: &'a Tree<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T> Iter<'a, T> {
    fn new(root: &'a Tree<T>) -> Self {
        Self {
            root,
            front: 0,
            back: CountNodes.apply(root),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let value = GetByIndex::new(self.front).apply(self.root);
        self.front += 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        GetByIndex::new(self.back).apply(self.root)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Reversed;

    fn small() -> BinarySearchTree<i32> {
        let mut tree = BinarySearchTree::new();
        tree.insert(6);
        tree.insert(2);
        tree.insert(9);
        tree.insert(3);
        tree
    }

    #[test]
    fn test_iterate_in_order() {
        let tree = small();
        let values: Vec<_> = tree.iter().copied().collect();

        assert_eq!(values, [2, 3, 6, 9]);
    }

    #[test]
    fn test_get() {
        let tree = small();

        assert_eq!(tree.get(0), Ok(&2));
        assert_eq!(tree.get(1), Ok(&3));
        assert_eq!(tree.get(2), Ok(&6));
        assert_eq!(tree.get(3), Ok(&9));
        assert_eq!(
            tree.get(4),
            Err(Error::IndexOutOfBounds { index: 4, size: 4 })
        );
        assert_eq!(
            tree.get(77),
            Err(Error::IndexOutOfBounds { index: 77, size: 4 })
        );
        assert!(tree.get(usize::MAX).is_err());
    }

    #[test]
    fn test_get_error_message() {
        let err = BinarySearchTree::<i32>::new().get(0).unwrap_err();

        assert_eq!(
            err.to_string(),
            "index 0 is out of bounds for a tree of size 0"
        );
    }

    #[test]
    fn test_size_and_duplicates() {
        let mut tree = BinarySearchTree::new();
        assert_eq!(tree.size(), 0);
        assert!(tree.is_empty());

        for x in [7, 11, 9, 10, 3, 5, 4, 1, 2, 0, 4, 6, 8, 77] {
            tree.insert(x);
        }

        // 4 was inserted twice.
        assert_eq!(tree.size(), 13);
        assert!(!tree.is_empty());

        tree.insert(77);
        assert_eq!(tree.size(), 13);
    }

    #[test]
    fn test_find() {
        let mut tree = small();

        assert_eq!(tree.find_item(&9), Some(&9));
        assert_eq!(tree.find_item(&420), None);
        assert!(!tree.contains(&420));

        tree.insert(420);
        assert!(tree.contains(&420));
    }

    #[test]
    fn test_clones_are_snapshots() {
        let mut tree = small();
        let before = tree.clone();

        tree.insert(1);
        tree.insert(10);

        assert_eq!(before.iter().copied().collect::<Vec<_>>(), [2, 3, 6, 9]);
        assert_eq!(
            tree.iter().copied().collect::<Vec<_>>(),
            [1, 2, 3, 6, 9, 10]
        );
    }

    #[test]
    fn test_independent_iterators() {
        let tree = small();
        let mut a = tree.iter();
        let mut b = tree.iter();

        assert_eq!(a.next(), Some(&2));
        assert_eq!(a.next(), Some(&3));
        assert_eq!(b.next(), Some(&2));
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 3);

        // Iterators restart from the beginning every time.
        assert_eq!((&tree).into_iter().count(), 4);
        assert_eq!((&tree).into_iter().count(), 4);
    }

    #[test]
    fn test_double_ended() {
        let tree = small();
        let mut iter = tree.iter();

        assert_eq!(iter.next_back(), Some(&9));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&6));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);

        let reversed: Vec<_> = tree.iter().rev().copied().collect();
        assert_eq!(reversed, [9, 6, 3, 2]);
    }

    #[test]
    fn test_custom_order() {
        let mut tree = BinarySearchTree::with_order(Reversed(Natural));
        tree.extend(vec![6, 2, 9, 3]);

        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [9, 6, 3, 2]);
        assert_eq!(tree.find_item(&3), Some(&3));
    }

    #[test]
    fn test_closure_order() {
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        let mut tree = BinarySearchTree::with_order(by_len);
        tree.extend(vec!["ccc", "a", "bb", "dd"]);

        // "dd" is the same length as "bb" so it never made it in.
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), ["a", "bb", "ccc"]);
        assert_eq!(tree.find_item(&"zz"), Some(&"bb"));
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", small()), "{2, 3, 6, 9}");
    }
}
