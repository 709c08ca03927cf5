//! # Hash Keys
//!
//! [`HashKey`] is the capability a type needs to be stored in a
//! [`ChainedHashMap`](super::separate::ChainedHashMap): a deterministic mapping
//! to a non-negative 31-bit integer, which the universal hash then scrambles
//! into a bucket index.
//!
//! - Integers take the fast path: their two's-complement bits are masked to
//!   `[0, 2^31)`.
//! - Text and byte strings are folded with a polynomial accumulator
//!   `h = (h * 257 + byte) mod 2^31`.
//!
//! `str` and `String` (and `[u8]`/`Vec<u8>`) produce identical integers, so a map
//! keyed by `String` can be searched with a `&str`.

/// Keeps every key integer inside `[0, 2^31)`.
pub const KEY_MASK: u64 = 0x7fff_ffff;

/// Multiplier of the byte fold.
pub const FOLD_BASE: u64 = 257;

/// Conversion of a key into the integer domain of the universal hash.
///
/// Implementations must be consistent with `Eq`: equal keys return equal
/// integers. The result must be below `2^31`.
pub trait HashKey {
    /// Returns the key's integer representation in `[0, 2^31)`.
    fn key_to_int(&self) -> u64;
}

/// Folds `bytes` into `[0, 2^31)` with base 257.
///
/// ```
/// use algos_partition::hashing::key::fold_bytes;
///
/// assert_eq!(fold_bytes(b""), 0);
/// assert_eq!(fold_bytes(b"a"), 97);
/// assert_eq!(fold_bytes(b"ab"), 97 * 257 + 98);
/// ```
pub fn fold_bytes(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(0u64, |h, &b| (h * FOLD_BASE + b as u64) & KEY_MASK)
}

macro_rules! impl_hash_key_int {
    ($($t:ty),*) => {
        $(
            impl HashKey for $t {
                #[inline]
                fn key_to_int(&self) -> u64 {
                    // Sign-extend first so negative keys keep their low bits.
                    (*self as i128 as u64) & KEY_MASK
                }
            }
        )*
    };
}

impl_hash_key_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl HashKey for bool {
    fn key_to_int(&self) -> u64 {
        *self as u64
    }
}

impl HashKey for char {
    fn key_to_int(&self) -> u64 {
        let mut buf = [0u8; 4];
        fold_bytes(self.encode_utf8(&mut buf).as_bytes())
    }
}

impl HashKey for str {
    fn key_to_int(&self) -> u64 {
        fold_bytes(self.as_bytes())
    }
}

impl HashKey for String {
    fn key_to_int(&self) -> u64 {
        self.as_str().key_to_int()
    }
}

impl HashKey for [u8] {
    fn key_to_int(&self) -> u64 {
        fold_bytes(self)
    }
}

impl HashKey for Vec<u8> {
    fn key_to_int(&self) -> u64 {
        fold_bytes(self)
    }
}

impl<T: HashKey + ?Sized> HashKey for &T {
    fn key_to_int(&self) -> u64 {
        (**self).key_to_int()
    }
}
