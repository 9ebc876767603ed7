//! A module containing [`CircularList`] and its borrowed iterator.
//!
//! [`CircularList`] is also re-exported under the parent module.

mod circular_list;
mod iter;
mod node;

pub use circular_list::*;
pub use iter::*;
pub(crate) use node::*;
