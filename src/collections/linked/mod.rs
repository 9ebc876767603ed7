//! Linked collection types. Revolves around [`CircularList`], a ring of singly-linked nodes, and
//! [`DoublyList`], a chain of nodes linked in both directions.
//!
//! The two lists are independent of each other, sharing only their [`error`] types and the
//! internal length counter.

pub mod error;
mod length;

#[cfg(feature = "circular")]
pub mod circular;
#[cfg(feature = "doubly")]
pub mod doubly;

#[doc(inline)]
#[cfg(feature = "circular")]
pub use circular::CircularList;
#[doc(inline)]
#[cfg(feature = "doubly")]
pub use doubly::DoublyList;
pub use error::*;
pub(crate) use length::*;
