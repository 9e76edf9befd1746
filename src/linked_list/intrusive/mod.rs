//! # Intrusive Linked List
//!
//! This module provides an intrusive doubly linked list over caller-owned
//! nodes.
//!
//! ## Core Components
//!
//! - [`traits`]: Defines the core traits for the linked list, such as
//!   `List`, `Link`, and `Node`.
//! - [`list::LinkedList`]: The list itself, tracking head, tail and count.
//! - [`double::DoubleNode`]: A doubly linked node owning a payload, to be
//!   embedded in caller data structures.
//! - [`iter::LinkedListIter`] and [`iter::LinkedListRevIter`]: Forward and
//!   backward traversal. Both yield an empty sequence on an empty list.
//!
//! ## Safety
//!
//! This implementation uses `unsafe` code to manage raw pointers between
//! caller-owned nodes. The user of this module is responsible for
//! upholding several invariants:
//!
//! - Nodes must outlive the list they are in.
//! - A node must not be in two lists at the same time, and a node already
//!   in a list must not be pushed again without removing it first.
//! - When iterating, the list must not be modified.
//! - A removed node's own links are left stale; it must not be read
//!   through them and must be reset (e.g. recreated) before reuse.
//! - When quick-removing a node, the provided parent (if any) must be the
//!   node's actual predecessor.
//!
//! Removal through [`traits::List::remove`] is checked: removing a node
//! that is not a member (including removing it a second time) returns
//! `None` instead of corrupting the chain.
//!
//! # Examples
//!
//! ```
//! use mesh_collections::linked_list::intrusive::{
//!     double::DoubleNode,
//!     list::LinkedList,
//!     traits::{List, NodeWithData},
//! };
//! use core::ptr::NonNull;
//!
//! let mut list = LinkedList::<DoubleNode<i32>>::new();
//! let mut node1 = DoubleNode::new(1);
//! let mut node2 = DoubleNode::new(2);
//!
//! list.push(NonNull::from(&mut node1));
//! list.push(NonNull::from(&mut node2));
//! assert_eq!(list.count(), 2);
//!
//! let mut values = vec![];
//! unsafe {
//!     for node in list.iter() {
//!         values.push(*node.as_ref().data());
//!     }
//! }
//! assert_eq!(values, vec![2, 1]);
//! ```

pub mod double;
pub mod iter;
pub mod list;
pub mod traits;

#[cfg(test)]
mod tests;
