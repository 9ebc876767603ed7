//! This crate implements two textbook linked lists: a circular singly-linked list and a
//! (non-circular) doubly-linked list.
//!
//! # Purpose
//! Both lists are written to understand the pointer bookkeeping behind them, rather than to compete
//! with [`std::collections::LinkedList`] or [`Vec`]. Each list owns its nodes exclusively; links
//! between nodes are raw, non-owning pointers and nothing outside of the list can alias a node.
//!
//! # Error Handling
//! Operations that search for a value, or that need the list to have a minimum length, return
//! [`Result`]s rather than printing a message and silently doing nothing. The errors are strongly
//! typed: small structs that implement [`Error`](std::error::Error), combined with enums for static
//! dispatch where an operation can fail in more than one way. Failed operations never partially
//! modify a list, because every search completes before any link is touched.
//!
//! Panics are reserved for things that can't reasonably be handled, like a length overflowing
//! [`usize`].
//!
//! # Features
//! - `circular`: [`CircularList`](collections::linked::CircularList).
//! - `doubly`: [`DoublyList`](collections::linked::DoublyList).
//! - `linked-all` (default): both of the above.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
