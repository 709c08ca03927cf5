//! Error type shared by the crate.
//!
//! Lookups and removals never fail; a missing key is reported through
//! `Option`/`bool`. Errors only arise when a container is configured with
//! parameters it cannot honor.

use thiserror::Error;

/// Errors returned when building a hash map or hash function.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A bucket count of zero was requested.
    #[error("invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    /// Load factor bounds that are not finite, not positive, or not ordered.
    #[error("invalid load factor bounds: min_load {min_load} must be >= 0 and below max_load {max_load}")]
    InvalidLoadFactor {
        /// Shrink threshold
        min_load: f64,
        /// Growth threshold
        max_load: f64,
    },

    /// Explicit universal hash parameters outside the prime field.
    #[error("invalid hash parameters: a = {a} must be in [1, p), b = {b} must be in [0, p)")]
    InvalidHashParams {
        /// Multiplier
        a: u64,
        /// Offset
        b: u64,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
