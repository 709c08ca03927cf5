//! # Universal Hashing
//!
//! An affine (Carter-Wegman) universal hash family over the prime field
//! `Z_p`, with `p = 2^31 - 1`:
//!
//! ```text
//!   h(x) = ((a * x + b) mod p) mod m
//! ```
//!
//! `a` is drawn from `[1, p)` and `b` from `[0, p)` once, when the function is
//! built. For two distinct inputs the probability of a collision is about `1/m`
//! over that random choice, no matter how the inputs were picked.
//!
//! Inputs are integers in `[0, 2^31)`; see [`HashKey`](super::key::HashKey) for
//! how keys are brought into that range.
//!
//! **Note**: this is **not** a cryptographic hash.
//!
//! # Usage
//!
//! ```rust
//! use algos_partition::hashing::universal::UniversalHashBuilder;
//!
//! let hash = UniversalHashBuilder::new().seed(7).build().unwrap();
//! let bucket = hash.bucket(12345, 64);
//! assert!(bucket < 64);
//!
//! // The same seed always yields the same function.
//! let again = UniversalHashBuilder::new().seed(7).build().unwrap();
//! assert_eq!(hash.params(), again.params());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::{Error, Result};

/// The Mersenne prime `2^31 - 1`.
pub const PRIME_31: u64 = 0x7fff_ffff;

/// Seed used when neither a seed nor parameters are supplied.
pub const DEFAULT_SEED: u64 = 12345;

/// A builder for [`UniversalHash`].
///
/// Parameters come, in order of precedence, from explicit [`params`](Self::params),
/// or from a [`ChaCha20Rng`] seeded with [`seed`](Self::seed) (default
/// [`DEFAULT_SEED`]).
#[derive(Debug, Clone, Default)]
pub struct UniversalHashBuilder {
    seed: Option<u64>,
    params: Option<(u64, u64)>,
}

impl UniversalHashBuilder {
    /// Creates a builder with the default seed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the seed for parameter generation.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Provide `a` and `b` directly, bypassing random generation.
    /// `build` rejects `a` outside `[1, p)` or `b` outside `[0, p)`.
    pub fn params(mut self, a: u64, b: u64) -> Self {
        self.params = Some((a, b));
        self
    }

    /// Builds the hash function.
    pub fn build(self) -> Result<UniversalHash> {
        match self.params {
            Some((a, b)) => UniversalHash::from_params(a, b),
            None => Ok(UniversalHash::from_seed(self.seed.unwrap_or(DEFAULT_SEED))),
        }
    }
}

/// One member of the affine universal family, fixed for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniversalHash {
    a: u64,
    b: u64,
}

impl UniversalHash {
    /// Draws `a` in `[1, p)` and `b` in `[0, p)` from `rng`.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let a = rng.gen_range(1..PRIME_31);
        let b = rng.gen_range(0..PRIME_31);
        UniversalHash { a, b }
    }

    /// Draws the parameters from a [`ChaCha20Rng`] seeded with `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::from_rng(&mut ChaCha20Rng::seed_from_u64(seed))
    }

    /// Uses the given parameters, validating them against the field.
    pub fn from_params(a: u64, b: u64) -> Result<Self> {
        if a == 0 || a >= PRIME_31 || b >= PRIME_31 {
            return Err(Error::InvalidHashParams { a, b });
        }
        Ok(UniversalHash { a, b })
    }

    /// Returns `(a, b)`.
    pub fn params(&self) -> (u64, u64) {
        (self.a, self.b)
    }

    /// `(a * x + b) mod p`, in `[0, p)`.
    #[inline]
    pub fn hash(&self, x: u64) -> u64 {
        add_mod(mul_mod(self.a, x, PRIME_31), self.b, PRIME_31)
    }

    /// Maps `x` to a bucket in `[0, buckets)`.
    ///
    /// # Panics
    /// - if `buckets == 0`.
    #[inline]
    pub fn bucket(&self, x: u64, buckets: usize) -> usize {
        (self.hash(x) % buckets as u64) as usize
    }
}

// ---------- Low-level ops for mod p < 2^63 ---------- //

#[inline]
fn add_mod(x: u64, y: u64, p: u64) -> u64 {
    let s = x % p + y % p;
    if s >= p {
        s - p
    } else {
        s
    }
}

/// Multiplication with a 128-bit intermediate so any `x` is accepted.
#[inline]
fn mul_mod(x: u64, y: u64, p: u64) -> u64 {
    ((x as u128 * y as u128) % p as u128) as u64
}
