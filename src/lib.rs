//! Two independent building blocks:
//!
//! - [`sort`]: in-place, iterative quicksort with three-way partitioning, in a
//!   deterministic (first-element pivot) and a randomized (uniform pivot) variant.
//! - [`hashing`]: [`ChainedHashMap`](hashing::ChainedHashMap), a separate-chaining
//!   hash map with universal hashing that grows and shrinks with its load factor.
//!
//! The library logs through the [`log`] facade; install any logger to see
//! resize events.

pub mod cs;
pub mod error;

pub use cs::{hashing, sort};
pub use error::{Error, Result};
