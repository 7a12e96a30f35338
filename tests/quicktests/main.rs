mod bst;
mod multiset;

use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// a multiset in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Add one more T to the data structure
    Add(T),
    /// Check the count of T
    Count(T),
    /// Compare iterators
    Iter,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Add(T::arbitrary(g)),
            1 => Op::Count(T::arbitrary(g)),
            2 => Op::Iter,
            _ => unreachable!(),
        }
    }
}
