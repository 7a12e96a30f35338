//! The persistent tree structure and the operations defined over it.
//!
//! A [`Tree`] is modeled after a tree one would see in a functional language
//! like Haskell. Nothing here ever mutates a node: operations that one would
//! expect to modify the tree (like [`Insert`]) instead return a new tree that
//! references most of the nodes of the original one. Only the nodes on the
//! path from the root down to the change are rebuilt.
//!
//! Every operation is a [`Visitor`], so they're all applied the same way.
//!
//! # Examples
//!
//! ```
//! use ordset::order::{compare_to, Natural};
//! use ordset::tree::{CountNodes, Find, GetByIndex, Insert, Tree};
//! use ordset::visit::Visitor;
//!
//! let tree = Tree::new();
//!
//! // This `insert` returns a new tree!
//! let new_tree = Insert::new(6, &Natural).apply(&tree);
//! let newer_tree = Insert::new(2, &Natural).apply(&new_tree);
//!
//! // All history is preserved.
//! assert_eq!(CountNodes.apply(&tree), 0);
//! assert_eq!(CountNodes.apply(&new_tree), 1);
//! assert_eq!(CountNodes.apply(&newer_tree), 2);
//!
//! assert_eq!(Find::new(compare_to(&Natural, &2)).apply(&newer_tree), Some(&2));
//! assert_eq!(Find::new(compare_to(&Natural, &2)).apply(&new_tree), None);
//!
//! assert_eq!(GetByIndex::new(0).apply(&newer_tree), Some(&2));
//! assert_eq!(GetByIndex::new(2).apply(&newer_tree), None);
//! ```

use std::cmp::Ordering;
use std::rc::Rc;

use crate::order::Comparator;
use crate::visit::Visitor;

/// A binary tree of `T`s. Whether it's actually a *search* tree depends on
/// every value having been added through [`Insert`] with the same
/// comparator.
#[derive(Debug)]
pub enum Tree<T> {
    /// A marker for the empty pointer at the bottom of a subtree.
    Leaf,
    /// A `Node` that has a value and two children (which are both `Tree`s).
    /// This enum trivially wraps the [`Node`] struct.
    Node(Node<T>),
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Manual implementation of `Clone` so we don't require `T: Clone`. Cloning a
/// tree only bumps reference counts.
impl<T> Clone for Tree<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Leaf => Self::Leaf,
            Self::Node(n) => Self::Node(n.clone()),
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Leaf
    }

    /// Whether this tree is a [`Leaf`][Tree::Leaf].
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf)
    }
}

#[derive(Debug)]
struct Child<T>(Rc<Tree<T>>);

impl<T> Clone for Child<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> Child<T> {
    fn new() -> Self {
        Self(Rc::new(Tree::new()))
    }
}

impl<T> From<Tree<T>> for Child<T> {
    fn from(tree: Tree<T>) -> Self {
        Self(Rc::new(tree))
    }
}

/// A `Node` has a value that is used for searching/sorting. It always has two
/// children although those children may be [`Leaf`][Tree::Leaf]s.
///
/// A node has no idea where it lives in a larger tree; there are no parent
/// pointers. Its children may be shared with other versions of the tree but
/// never with each other.
#[derive(Debug)]
pub struct Node<T> {
    value: Rc<T>,
    left: Child<T>,
    right: Child<T>,
}

impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}

impl<T> Node<T> {
    /// Construct a new `Node` with the given value and two leaves.
    fn new(value: Rc<T>) -> Self {
        Self {
            value,
            left: Child::new(),
            right: Child::new(),
        }
    }

    /// Create a new Node with the same value as this node but with the given
    /// children.
    fn with_children(&self, left: Child<T>, right: Child<T>) -> Self {
        Self {
            value: Rc::clone(&self.value),
            left,
            right,
        }
    }

    /// The value stored at this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The subtree holding every value less than this node's.
    pub fn left(&self) -> &Tree<T> {
        &self.left.0
    }

    /// The subtree holding every value greater than this node's.
    pub fn right(&self) -> &Tree<T> {
        &self.right.0
    }
}

/// Produces a new tree that also contains `item`.
///
/// If a value comparing equal to `item` is already present, the new tree has
/// the same contents as the old one and `item` is dropped.
pub struct Insert<'o, T, C: ?Sized> {
    item: Rc<T>,
    order: &'o C,
}

impl<'o, T, C> Insert<'o, T, C>
where
    C: Comparator<T> + ?Sized,
{
    /// An insertion of `item` positioned using `order`.
    pub fn new(item: T, order: &'o C) -> Self {
        Self {
            item: Rc::new(item),
            order,
        }
    }
}

impl<'t, 'o, T: 't, C> Visitor<'t, T> for Insert<'o, T, C>
where
    C: Comparator<T> + ?Sized,
{
    type Output = Tree<T>;

    fn visit_node(&self, node: &'t Node<T>) -> Tree<T> {
        let node = match self.order.compare(&*self.item, node.value()) {
            Ordering::Less => {
                let new_left = self.apply(node.left()).into();
                node.with_children(new_left, node.right.clone())
            }
            Ordering::Equal => node.clone(),
            Ordering::Greater => {
                let new_right = self.apply(node.right()).into();
                node.with_children(node.left.clone(), new_right)
            }
        };

        Tree::Node(node)
    }

    fn visit_leaf(&self) -> Tree<T> {
        Tree::Node(Node::new(Rc::clone(&self.item)))
    }
}

/// Counts the nodes in a tree. This walks the whole tree so callers that need
/// the size repeatedly should hang onto it.
#[derive(Clone, Copy, Debug, Default)]
pub struct CountNodes;

impl<'t, T: 't> Visitor<'t, T> for CountNodes {
    type Output = usize;

    fn visit_node(&self, node: &'t Node<T>) -> usize {
        1 + self.apply(node.left()) + self.apply(node.right())
    }

    fn visit_leaf(&self) -> usize {
        0
    }
}

/// Looks for a value using a search function rather than a value.
///
/// The search function reports where a candidate sits relative to whatever
/// is being looked for: `Greater` sends the search left, `Less` sends it
/// right and `Equal` ends it. Any search function that agrees with the order
/// the tree was built with works, not just exact matches. See
/// [`compare_to`][crate::order::compare_to] for the exact match case.
pub struct Find<F> {
    search: F,
}

impl<F> Find<F> {
    /// A search driven by `search`.
    pub fn new(search: F) -> Self {
        Self { search }
    }
}

impl<'t, T: 't, F> Visitor<'t, T> for Find<F>
where
    F: Fn(&T) -> Ordering,
{
    type Output = Option<&'t T>;

    fn visit_node(&self, node: &'t Node<T>) -> Option<&'t T> {
        match (self.search)(node.value()) {
            Ordering::Greater => self.apply(node.left()),
            Ordering::Equal => Some(node.value()),
            Ordering::Less => self.apply(node.right()),
        }
    }

    fn visit_leaf(&self) -> Option<&'t T> {
        None
    }
}

/// Selects the value at a 0-based position in sorted order.
///
/// Reaching a leaf means the index was at least the size of the tree and
/// yields `None`.
#[derive(Clone, Copy, Debug)]
pub struct GetByIndex {
    index: usize,
}

impl GetByIndex {
    /// A lookup of the `index`th smallest value.
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl<'t, T: 't> Visitor<'t, T> for GetByIndex {
    type Output = Option<&'t T>;

    fn visit_node(&self, node: &'t Node<T>) -> Option<&'t T> {
        let left_count = CountNodes.apply(node.left());
        match self.index.cmp(&left_count) {
            Ordering::Less => self.apply(node.left()),
            Ordering::Equal => Some(node.value()),
            // Everything on the left and this node come before the right
            // subtree so they're skipped.
            Ordering::Greater => Self::new(self.index - left_count - 1).apply(node.right()),
        }
    }

    fn visit_leaf(&self) -> Option<&'t T> {
        None
    }
}
