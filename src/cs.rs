pub mod hashing;
pub mod sort;

// Re-export all modules
pub use hashing::*;
pub use sort::*;
