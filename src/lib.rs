//! # mesh-collections
//!
//! Low-level, allocation-owning containers shared across the networking
//! stack.
//!
//! ## Core Components
//!
//! - [`linked_list::intrusive`]: an intrusive doubly linked list whose
//!   nodes are owned by the caller and embedded in caller data structures.
//! - [`array`]: a growable array that owns its backing buffer exclusively
//!   and stores element copies, never references.
//! - [`sort`]: an in-place generic partition sort over slices, driven by a
//!   three-way comparator.
//!
//! The list and array are independent of each other; the sort only needs
//! contiguous, indexable storage and works on any mutable slice, including
//! the one exposed by [`array::Array::as_mut_slice`].
//!
//! None of the containers are thread-safe. Callers that share one across
//! threads must serialize access externally.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod array;
pub mod linked_list;
pub mod sort;
