//! This crate exposes a Binary Search Tree (BST) that is built balanced,
//! grows without any self-balancing, and can be rebuilt into a balanced
//! shape on request.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a
//! BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`. A tree built with [`Tree::from_sorted`] (or
//! collected from any iterator) has a height of `O(lg N)`, but because
//! [`Tree::insert`] and [`Tree::delete`] never restructure the tree, the
//! height can drift all the way to `N`. [`Tree::is_balanced`] reports when
//! that has happened and [`Tree::rebalance`] rebuilds the tree in `O(N)`.
//!
//! Visiting the left subtree, then the subtree root, then the right subtree
//! yields the values in sorted order. That, plus the other three traversal
//! orders, lives in [`Order`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod prepare;
mod traversal;
mod tree;

pub use traversal::Order;
pub use tree::{Node, Tree};
