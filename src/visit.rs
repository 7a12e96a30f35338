//! Double dispatch over [`Tree`]s.
//!
//! Every algorithm on a tree is a [`Visitor`]: a value that knows what to do
//! with a [`Node`] and what to do with a [`Leaf`][Tree::Leaf]. Applying a
//! visitor to a tree picks the right half based on which variant the tree
//! currently is. New algorithms are new visitor types; the tree itself never
//! has to change.
//!
//! # Examples
//!
//! Counting the levels of a tree without touching [`Tree`]:
//!
//! ```
//! use ordset::tree::Node;
//! use ordset::visit::Visitor;
//! use ordset::BinarySearchTree;
//!
//! struct Height;
//!
//! impl<'t, T: 't> Visitor<'t, T> for Height {
//!     type Output = usize;
//!
//!     fn visit_node(&self, node: &'t Node<T>) -> usize {
//!         1 + self.apply(node.left()).max(self.apply(node.right()))
//!     }
//!
//!     fn visit_leaf(&self) -> usize {
//!         0
//!     }
//! }
//!
//! let mut bst = BinarySearchTree::new();
//! for x in [6, 2, 9, 3] {
//!     bst.insert(x);
//! }
//!
//! assert_eq!(Height.apply(bst.root()), 3);
//! ```

use crate::tree::{Node, Tree};

/// An operation over trees holding `T`s that produces an `Output`.
///
/// Visitors must not mutate the tree they walk. They may carry their own
/// parameters (the value being inserted, the index being looked up, ...) but
/// those should be treated as immutable: recursing with different
/// parameters means building a new visitor.
pub trait Visitor<'t, T: 't> {
    /// What applying this visitor produces.
    type Output;

    /// Called when the visited tree is a [`Node`].
    fn visit_node(&self, node: &'t Node<T>) -> Self::Output;

    /// Called when the visited tree is a [`Leaf`][Tree::Leaf].
    fn visit_leaf(&self) -> Self::Output;

    /// Applies this visitor to `tree`. This is the same as
    /// [`tree.accept(self)`][Tree::accept].
    fn apply(&self, tree: &'t Tree<T>) -> Self::Output {
        tree.accept(self)
    }
}

impl<T> Tree<T> {
    /// Dispatches to whichever half of `visitor` matches this tree's variant.
    pub fn accept<'t, V>(&'t self, visitor: &V) -> V::Output
    where
        V: Visitor<'t, T> + ?Sized,
    {
        match self {
            Self::Leaf => visitor.visit_leaf(),
            Self::Node(n) => visitor.visit_node(n),
        }
    }
}
