//! This crate exposes classic data structures mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! The centerpiece is [`tree::Tree`], an unbalanced Binary Search Tree. A BST is
//! defined recursively using the notion of a `Node`. A `Node` stores a value and
//! may have up to two child `Node`s. The invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)` where `height` is the longest path from the root
//! `Node` to a leaf `Node`. Nothing here rebalances, so inserting values in sorted
//! order produces a tree whose height equals its length. Sorted iteration falls out
//! of visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ## Everything else
//!
//! - [`list::LinkedList`]: a doubly linked list.
//! - [`queue::Queue`]: a FIFO queue backed by a ring buffer.
//! - [`stack::Stack`]: a LIFO stack backed by a `Vec`.
//! - [`factorial::factorial`]: the obligatory recursive factorial.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod factorial;
pub mod list;
pub mod queue;
pub mod stack;
pub mod tree;
