//! Collection types.
//!
//! # Purpose
//! I wrote these types to learn about the data structures themselves, and about pointers,
//! allocations and iterators along the way.

pub mod linked;
