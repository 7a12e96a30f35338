//! The ordering capability every tree is built around.
//!
//! Trees in this crate never call [`Ord`] directly. Instead they hold a
//! [`Comparator`] that is supplied once, when the tree is constructed, and
//! reused for the tree's whole lifetime. This lets the same element type be
//! stored under different orders (or lets types without an `Ord` impl be
//! stored at all).
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//! use ordset::order::{Comparator, Natural, Reversed};
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//! assert_eq!(Reversed(Natural).compare(&1, &2), Ordering::Greater);
//!
//! // Any `Fn(&T, &T) -> Ordering` is a comparator too.
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"abc", &"de"), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A three-way comparison over `T`.
///
/// Implementations must be deterministic and describe a consistent strict
/// weak ordering (antisymmetric and transitive). A comparator that breaks
/// these rules won't cause memory unsafety but the tree will silently stop
/// finding things.
pub trait Comparator<T: ?Sized> {
    /// Compares `left` to `right`.
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

/// Orders values by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// Flips the order of the wrapped comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.0.compare(right, left)
    }
}

/// Builds a search function that compares each candidate against `target`.
///
/// The result says where the candidate sits relative to the target: a
/// candidate that is `Greater` means the target must be to its left. This is
/// the shape [`Find`][crate::tree::Find] expects.
pub fn compare_to<'a, T, C>(order: &'a C, target: &'a T) -> impl Fn(&T) -> Ordering + 'a
where
    T: ?Sized,
    C: Comparator<T> + ?Sized,
{
    move |candidate| order.compare(candidate, target)
}
