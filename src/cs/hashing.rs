//! Hashing primitives and the chained hash map built on them.

pub mod key;
pub mod separate;
pub mod universal;

pub use key::HashKey;
pub use separate::{BucketStats, ChainedHashMap, ChainedHashMapBuilder};
pub use universal::{UniversalHash, UniversalHashBuilder};
