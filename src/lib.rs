//! This crate exposes a persistent Binary Search Tree (BST) with a pluggable
//! ordering and a multiset built on top of it, mostly for educational
//! purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored records. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` will typically store some sort of
//! value (the value that was inserted, for example) and will sometimes have
//! child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Here "less" and "greater" are decided by a [`Comparator`][order::Comparator]
//! handed to the tree when it's built rather than by [`Ord`], so the same
//! type can be stored under different orders.
//!
//! Searching for values in the tree takes `O(height)` (where `height` is
//! defined as the longest path from the root `Node` to a leaf `Node`). The
//! trees here don't balance themselves so `height` can be as bad as `N`.
//! BSTs also naturally support sorted iteration by visiting the left
//! subtree, then the subtree root, then the right subtree.
//!
//! ## Layout
//!
//! - [`tree`] holds the persistent [`Tree`][tree::Tree] and the operations
//!   on it. Each operation is a [`Visitor`][visit::Visitor].
//! - [`BinarySearchTree`] wraps a tree and its comparator.
//! - [`Multiset`] counts repeated values on top of a [`BinarySearchTree`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod bst;
pub mod error;
pub mod multiset;
pub mod order;
pub mod tree;
pub mod visit;

pub use bst::BinarySearchTree;
pub use error::{Error, Result};
pub use multiset::Multiset;
