//! The four classic traversal orders over a [`Tree`].
//!
//! Every order comes in two flavours: a `*_with` method that pushes each
//! value into a visitor as it is reached, and a method that collects the
//! values into a `Vec`. Both run to completion before returning.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::{Order, Tree};
//!
//! let tree = Tree::from_sorted(vec![1, 2, 3, 4, 5, 6, 7]);
//!
//! assert_eq!(tree.level_order(), vec![&4, &2, &6, &1, &3, &5, &7]);
//! assert_eq!(tree.post_order(), vec![&1, &3, &2, &5, &7, &6, &4]);
//!
//! let mut sum = 0;
//! tree.traverse_with(Order::In, |x| sum += x);
//! assert_eq!(sum, 28);
//! ```

use std::collections::VecDeque;
use std::fmt;

use crate::tree::{Node, Tree};

/// Selects one of the traversal orders at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Breadth first: top to bottom, left to right within a level.
    Level,
    /// Node, then left subtree, then right subtree.
    Pre,
    /// Left subtree, then node, then right subtree. Yields ascending values.
    In,
    /// Left subtree, then right subtree, then node.
    Post,
}

impl Order {
    /// Every order, breadth first followed by the depth first ones.
    pub const ALL: [Order; 4] = [Order::Level, Order::Pre, Order::In, Order::Post];
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Order::Level => "level order",
            Order::Pre => "pre order",
            Order::In => "in order",
            Order::Post => "post order",
        };
        f.write_str(name)
    }
}

impl<T> Tree<T> {
    /// Calls `visit` on every value in the given order.
    pub fn traverse_with<'a, F>(&'a self, order: Order, visit: F)
    where
        F: FnMut(&'a T),
    {
        match order {
            Order::Level => self.level_order_with(visit),
            Order::Pre => self.pre_order_with(visit),
            Order::In => self.in_order_with(visit),
            Order::Post => self.post_order_with(visit),
        }
    }

    /// Collects every value in the given order.
    pub fn traverse(&self, order: Order) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        self.traverse_with(order, |value| values.push(value));
        values
    }

    /// Calls `visit` on every value, level by level.
    pub fn level_order_with<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        let mut queue: VecDeque<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            visit(node.value());
            queue.extend(node.left());
            queue.extend(node.right());
        }
    }

    /// Calls `visit` on every node before either of its subtrees.
    pub fn pre_order_with<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        pre_order(self.root(), &mut visit);
    }

    /// Calls `visit` on every value in ascending order.
    pub fn in_order_with<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        in_order(self.root(), &mut visit);
    }

    /// Calls `visit` on every node after both of its subtrees.
    pub fn post_order_with<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        post_order(self.root(), &mut visit);
    }

    /// The values level by level, see [`Tree::level_order_with`].
    pub fn level_order(&self) -> Vec<&T> {
        self.traverse(Order::Level)
    }

    /// The values in pre-order, see [`Tree::pre_order_with`].
    pub fn pre_order(&self) -> Vec<&T> {
        self.traverse(Order::Pre)
    }

    /// The values in ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        self.traverse(Order::In)
    }

    /// The values in post-order, see [`Tree::post_order_with`].
    pub fn post_order(&self) -> Vec<&T> {
        self.traverse(Order::Post)
    }
}

fn pre_order<'a, T, F>(node: Option<&'a Node<T>>, visit: &mut F)
where
    F: FnMut(&'a T),
{
    if let Some(node) = node {
        visit(node.value());
        pre_order(node.left(), visit);
        pre_order(node.right(), visit);
    }
}

fn in_order<'a, T, F>(node: Option<&'a Node<T>>, visit: &mut F)
where
    F: FnMut(&'a T),
{
    if let Some(node) = node {
        in_order(node.left(), visit);
        visit(node.value());
        in_order(node.right(), visit);
    }
}

fn post_order<'a, T, F>(node: Option<&'a Node<T>>, visit: &mut F)
where
    F: FnMut(&'a T),
{
    if let Some(node) = node {
        post_order(node.left(), visit);
        post_order(node.right(), visit);
        visit(node.value());
    }
}
