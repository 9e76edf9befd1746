//! An intrusive linked list implementation.
//!
//! In an intrusive linked list, the link pointers live directly in the
//! record being linked rather than in separately allocated wrapper nodes.
//! Here the record is a [`intrusive::double::DoubleNode`] owning its
//! payload; the list machinery never allocates and never owns a node.

pub mod intrusive;
