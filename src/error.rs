//! Errors surfaced by the trees in this crate.

/// Convenience alias used by every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong when calling into a tree.
///
/// Searching for a value that isn't present is *not* an error; those
/// operations return an [`Option`] instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Rank selection walked off the bottom of the tree because the
    /// requested index wasn't in `0..size`.
    #[error("index {index} is out of bounds for a tree of size {size}")]
    IndexOutOfBounds {
        /// The index that was asked for.
        index: usize,
        /// How many values the tree held at the time.
        size: usize,
    },
}
