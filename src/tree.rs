//! An owned, unbalanced BST that can be rebuilt into a balanced shape on
//! demand. Insertions and deletions never restructure the tree; a run of
//! ascending inserts will happily produce a chain. [`Tree::rebalance`]
//! flattens the tree back into sorted order and rebuilds it from scratch.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree: Tree<i32> = [5, 3, 8, 3, 1].into_iter().collect();
//! assert_eq!(tree.len(), 4);
//!
//! // Duplicates are ignored.
//! assert!(!tree.insert(5));
//! assert!(tree.insert(9));
//!
//! // Deleting a node returns its value.
//! assert_eq!(tree.delete(&3), Some(3));
//! assert_eq!(tree.delete(&3), None);
//!
//! assert_eq!(tree.in_order(), vec![&1, &5, &8, &9]);
//! ```

use std::cmp::Ordering;
use std::mem;

use tracing::{debug, trace};

use crate::prepare;

type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree of unique values.
///
/// Every operation other than [`Drop`] and [`Tree::rebalance`] recurses once
/// per level, so the call stack grows with the height of the tree. A tree
/// grown by inserting sorted values degrades into a chain whose height equals
/// its length; call [`Tree::rebalance`] before that becomes a problem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

/// A single node of a [`Tree`]. Nodes are only ever handed out by shared
/// reference so the structure can be read but never modified from outside
/// the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Detach children before each node is dropped so a long chain
        // doesn't recurse through `Box`'s drop glue.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    /// Sorts and deduplicates the values before building a balanced tree.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_sorted(prepare::prepare(iter))
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a balanced tree from strictly ascending `values`.
    ///
    /// The root of every subtree is the middle of its range, rounding down
    /// for even lengths, so `[1, 2, 3, 4]` is rooted at `2`.
    ///
    /// Passing values that aren't strictly ascending breaks the search
    /// invariant. Use [`FromIterator`] for unsorted input.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_sorted(vec![1, 2, 3, 4, 5, 6, 7]);
    ///
    /// assert_eq!(tree.pre_order(), vec![&4, &2, &1, &3, &6, &5, &7]);
    /// assert!(tree.is_balanced());
    /// ```
    pub fn from_sorted(values: Vec<T>) -> Self
    where
        T: Ord,
    {
        debug_assert!(
            values.windows(2).all(|pair| pair[0] < pair[1]),
            "`from_sorted` requires strictly ascending values"
        );

        let len = values.len();
        let root = build(&mut values.into_iter(), len);
        let tree = Self { root, len };
        debug!(len, height = tree.root().map_or(0, Node::height), "built tree");

        tree
    }

    /// The number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Inserts `value` as a new leaf. Returns `false` and leaves the tree
    /// untouched if the value is already present.
    ///
    /// The tree is not rebalanced afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(1));
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let (root, inserted) = insert(self.root.take(), value);
        self.root = root;
        if inserted {
            self.len += 1;
        } else {
            trace!("insert skipped, value already present");
        }

        inserted
    }

    /// Deletes the node containing `value` and returns the stored value. A
    /// node with two children takes the value of its in-order successor,
    /// which is removed from the right subtree in its place.
    ///
    /// If the tree doesn't contain `value`, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::from_sorted(vec![1, 2, 3]);
    ///
    /// assert_eq!(tree.delete(&2), Some(2));
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(3));
    /// assert_eq!(tree.delete(&42), None);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let (root, removed) = delete(self.root.take(), value);
        self.root = root;
        match removed {
            Some(_) => self.len -= 1,
            None => trace!("delete skipped, value not present"),
        }

        removed
    }

    /// Finds the node holding `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_sorted(vec![1, 2, 3]);
    ///
    /// let node = tree.find(&2).unwrap();
    /// assert_eq!(node.left().map(|n| *n.value()), Some(1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        self.root()?.find(value)
    }

    /// Whether `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// The height of the node holding `value`, see [`Node::height`]. `None`
    /// if the value isn't in the tree.
    pub fn height(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        self.find(value).map(Node::height)
    }

    /// The level of the node holding `value`, counting the root as level 1.
    /// `None` if the value isn't in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_sorted(vec![1, 2, 3, 4, 5, 6, 7]);
    ///
    /// assert_eq!(tree.depth(&4), Some(1));
    /// assert_eq!(tree.depth(&6), Some(2));
    /// assert_eq!(tree.depth(&7), Some(3));
    /// assert_eq!(tree.depth(&8), None);
    /// ```
    pub fn depth(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        depth(self.root(), value, 0)
    }

    /// Whether the heights of the two subtrees of every node differ by at
    /// most one. An empty tree is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in 1..=5 {
    ///     tree.insert(x);
    /// }
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        balanced_height(self.root()).is_some()
    }

    /// Rebuilds the tree into a balanced shape holding the same values.
    pub fn rebalance(&mut self)
    where
        T: Ord,
    {
        let mut values = Vec::with_capacity(self.len);
        drain_in_order(self.root.take(), &mut values);
        debug!(len = values.len(), "rebalancing tree");

        *self = Self::from_sorted(values);
    }
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, holding smaller values.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The root of the right subtree, holding larger values.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// How many levels are in the subtree rooted at this node. A node with
    /// no children has a height of 1; a missing child counts as 0.
    pub fn height(&self) -> usize {
        let left = self.left().map_or(0, Node::height);
        let right = self.right().map_or(0, Node::height);
        left.max(right) + 1
    }

    fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => self.left()?.find(value),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right()?.find(value),
        }
    }
}

/// Builds a balanced subtree out of the next `len` values.
fn build<T, I>(values: &mut I, len: usize) -> Link<T>
where
    I: Iterator<Item = T>,
{
    if len == 0 {
        return None;
    }

    let left_len = (len - 1) / 2;
    let left = build(values, left_len);
    let value = values.next()?;
    let right = build(values, len - 1 - left_len);

    Some(Box::new(Node { value, left, right }))
}

/// Returns the new subtree root and whether a node was added.
fn insert<T: Ord>(link: Link<T>, value: T) -> (Link<T>, bool) {
    let Some(mut node) = link else {
        return (Some(Box::new(Node::new(value))), true);
    };

    let inserted = match value.cmp(&node.value) {
        Ordering::Less => {
            let (left, inserted) = insert(node.left.take(), value);
            node.left = left;
            inserted
        }
        Ordering::Equal => false,
        Ordering::Greater => {
            let (right, inserted) = insert(node.right.take(), value);
            node.right = right;
            inserted
        }
    };

    (Some(node), inserted)
}

/// Returns the new subtree root and the removed value, if any.
fn delete<T: Ord>(link: Link<T>, value: &T) -> (Link<T>, Option<T>) {
    let Some(mut node) = link else {
        return (None, None);
    };

    match value.cmp(&node.value) {
        Ordering::Less => {
            let (left, removed) = delete(node.left.take(), value);
            node.left = left;
            (Some(node), removed)
        }
        Ordering::Greater => {
            let (right, removed) = delete(node.right.take(), value);
            node.right = right;
            (Some(node), removed)
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, child) | (child, None) => {
                let Node { value, .. } = *node;
                (child, Some(value))
            }
            (Some(left), Some(right)) => {
                let (successor, right) = remove_min(right);
                let removed = mem::replace(&mut node.value, successor);
                node.left = Some(left);
                node.right = right;
                (Some(node), Some(removed))
            }
        },
    }
}

/// Splits off the smallest value of a subtree, returning it and what's left.
fn remove_min<T>(mut node: Box<Node<T>>) -> (T, Link<T>) {
    match node.left.take() {
        None => {
            let Node { value, right, .. } = *node;
            (value, right)
        }
        Some(left) => {
            let (min, left) = remove_min(left);
            node.left = left;
            (min, Some(node))
        }
    }
}

fn depth<T: Ord>(node: Option<&Node<T>>, value: &T, level: usize) -> Option<usize> {
    let node = node?;
    match value.cmp(&node.value) {
        Ordering::Less => depth(node.left(), value, level + 1),
        Ordering::Equal => Some(level + 1),
        Ordering::Greater => depth(node.right(), value, level + 1),
    }
}

/// The height of a balanced subtree, or `None` as soon as any node in it is
/// out of balance.
fn balanced_height<T>(node: Option<&Node<T>>) -> Option<usize> {
    let Some(node) = node else {
        return Some(0);
    };

    let left = balanced_height(node.left())?;
    let right = balanced_height(node.right())?;
    (left.abs_diff(right) <= 1).then(|| left.max(right) + 1)
}

/// Moves every value out of the subtree in ascending order. Iterative so that
/// flattening a degenerate chain doesn't grow the call stack.
fn drain_in_order<T>(root: Link<T>, out: &mut Vec<T>) {
    let mut stack = Vec::new();
    let mut current = root;

    loop {
        while let Some(mut node) = current {
            current = node.left.take();
            stack.push(node);
        }

        let Some(node) = stack.pop() else {
            break;
        };
        let Node { value, right, .. } = *node;
        out.push(value);
        current = right;
    }
}
