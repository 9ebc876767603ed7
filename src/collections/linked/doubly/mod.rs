//! A module containing [`DoublyList`] and its borrowed iterator.
//!
//! [`DoublyList`] is also re-exported under the parent module.

mod doubly_list;
mod iter;
mod node;
mod tests;

pub use doubly_list::*;
pub use iter::*;
pub(crate) use node::*;
