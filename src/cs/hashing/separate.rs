//! # Separate Chaining Hash Table
//!
//! This module implements a **hash map** using **separate chaining** and an
//! affine **universal hash**. It supports:
//! - **Generic** values and any key implementing [`HashKey`] `+ Eq`.
//! - **Insert/update**, **search**, **delete** with expected **O(1)** cost.
//! - **Automatic growth** (doubling) when `len / capacity` exceeds `max_load`, and
//!   **automatic shrinkage** (halving) when a removal drops it below `min_load`.
//! - **Reproducible hashing**: the hash parameters `(a, b)` come from a seeded
//!   generator (or one you pass in) and never change for the map's lifetime.
//!
//! The bucket count is always a power of two and never below 8.
//!
//! Resizing is a stop-the-world rebuild: every pair is taken out and inserted
//! again under the new capacity, in `O(n)`.
//!
//! **Thread Safety**: no internal synchronization. Wrap the map in a mutex to
//! share it between threads.
//!
//! ## Example
//! ```rust
//! use algos_partition::hashing::ChainedHashMap;
//!
//! let mut map = ChainedHashMap::new();
//! map.insert("apple", 10);
//! map.insert("banana", 20);
//! assert_eq!(map.search("apple"), Some(&10));
//! assert!(map.delete("apple"));
//! assert_eq!(map.search("apple"), None);
//! assert_eq!(map.search("banana"), Some(&20));
//!
//! let stats = map.bucket_stats();
//! assert_eq!(stats.nonempty_buckets, 1);
//! ```

use std::borrow::Borrow;

use rand::Rng;

use super::key::HashKey;
use super::universal::{UniversalHash, DEFAULT_SEED};
use crate::error::{Error, Result};

/// Smallest number of buckets a map ever has.
pub const MIN_CAPACITY: usize = 8;

/// Largest power of two a `usize` bucket count can hold. Resizes past it are
/// clamped.
pub const MAX_CAPACITY: usize = 1 << (usize::BITS - 1);

/// Default load factor above which the table doubles.
pub const DEFAULT_MAX_LOAD: f64 = 0.75;

/// Default load factor below which a removal halves the table.
pub const DEFAULT_MIN_LOAD: f64 = 0.15;

/// A single entry in a chain.
#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// A "bucket" is a vector of entries for separate chaining.
type Bucket<K, V> = Vec<Entry<K, V>>;

/// Chain length figures over the current bucket array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketStats {
    /// Stored pairs divided by bucket count.
    pub avg_chain_len: f64,
    /// Length of the longest chain.
    pub max_chain_len: usize,
    /// Buckets holding at least one pair.
    pub nonempty_buckets: usize,
}

/// Where the builder takes the universal hash parameters from.
#[derive(Debug, Clone, Copy)]
enum HashSource {
    Seed(u64),
    Params(u64, u64),
    Drawn(UniversalHash),
}

/// A builder for the [`ChainedHashMap`].
///
/// ```
/// use algos_partition::hashing::{ChainedHashMap, ChainedHashMapBuilder};
///
/// let map: ChainedHashMap<u64, &str> = ChainedHashMapBuilder::new()
///     .with_capacity(100)
///     .with_max_load(0.9)
///     .with_min_load(0.1)
///     .with_seed(42)
///     .build()
///     .unwrap();
/// assert_eq!(map.capacity(), 128);
///
/// let bad = ChainedHashMapBuilder::new().with_min_load(0.8).build::<u64, u64>();
/// assert!(bad.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ChainedHashMapBuilder {
    capacity: usize,
    max_load: f64,
    min_load: f64,
    hash: HashSource,
}

impl Default for ChainedHashMapBuilder {
    fn default() -> Self {
        Self {
            capacity: MIN_CAPACITY,
            max_load: DEFAULT_MAX_LOAD,
            min_load: DEFAULT_MIN_LOAD,
            hash: HashSource::Seed(DEFAULT_SEED),
        }
    }
}

impl ChainedHashMapBuilder {
    /// Creates a builder with capacity 8, loads 0.75/0.15 and the default seed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial number of buckets. Rounded up to a power of two, minimum 8.
    /// Zero is rejected by `build`.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the load factor that triggers growth after an insert.
    pub fn with_max_load(mut self, max_load: f64) -> Self {
        self.max_load = max_load;
        self
    }

    /// Sets the load factor that triggers shrinkage after a removal.
    pub fn with_min_load(mut self, min_load: f64) -> Self {
        self.min_load = min_load;
        self
    }

    /// Seeds the generator the hash parameters are drawn from.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.hash = HashSource::Seed(seed);
        self
    }

    /// Draws the hash parameters from `rng` right away.
    pub fn with_rng<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.hash = HashSource::Drawn(UniversalHash::from_rng(rng));
        self
    }

    /// Uses explicit hash parameters `a` in `[1, p)` and `b` in `[0, p)`.
    pub fn with_hash_params(mut self, a: u64, b: u64) -> Self {
        self.hash = HashSource::Params(a, b);
        self
    }

    /// Validates the configuration and builds an empty map.
    pub fn build<K: HashKey + Eq, V>(self) -> Result<ChainedHashMap<K, V>> {
        let capacity = match bucket_count_for(self.capacity) {
            Some(capacity) if self.capacity > 0 => capacity,
            _ => return Err(Error::InvalidCapacity(self.capacity)),
        };
        let loads_ok = self.max_load.is_finite()
            && self.max_load > 0.0
            && self.min_load.is_finite()
            && self.min_load >= 0.0
            && self.min_load < self.max_load;
        if !loads_ok {
            return Err(Error::InvalidLoadFactor {
                min_load: self.min_load,
                max_load: self.max_load,
            });
        }

        let hash = match self.hash {
            HashSource::Seed(seed) => UniversalHash::from_seed(seed),
            HashSource::Params(a, b) => UniversalHash::from_params(a, b)?,
            HashSource::Drawn(hash) => hash,
        };
        let mut buckets = Vec::new();
        if buckets.try_reserve_exact(capacity).is_err() {
            return Err(Error::InvalidCapacity(self.capacity));
        }
        buckets.resize_with(capacity, Vec::new);

        log::debug!(
            "creating chained hash map: {} buckets, load bounds [{}, {}], hash params {:?}",
            capacity,
            self.min_load,
            self.max_load,
            hash.params()
        );
        Ok(ChainedHashMap {
            buckets,
            len: 0,
            max_load: self.max_load,
            min_load: self.min_load,
            hash,
        })
    }
}

/// A separate-chaining hash map with universal hashing and load-driven resizing.
#[derive(Debug, Clone)]
pub struct ChainedHashMap<K, V> {
    buckets: Vec<Bucket<K, V>>,
    /// The number of stored key-value pairs.
    len: usize,
    max_load: f64,
    min_load: f64,
    hash: UniversalHash,
}

impl<K: HashKey + Eq, V> Default for ChainedHashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: HashKey + Eq, V> ChainedHashMap<K, V> {
    /// Creates an empty map with 8 buckets, loads 0.75/0.15 and the default seed.
    pub fn new() -> Self {
        ChainedHashMapBuilder::new()
            .build()
            .expect("default map configuration is valid")
    }

    /// Creates an empty map with at least `capacity` buckets and default settings.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        ChainedHashMapBuilder::new().with_capacity(capacity).build()
    }

    /// Returns the number of key-value pairs in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Same as [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns true if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `len / capacity`.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Growth threshold.
    pub fn max_load(&self) -> f64 {
        self.max_load
    }

    /// Shrink threshold.
    pub fn min_load(&self) -> f64 {
        self.min_load
    }

    /// The universal hash parameters `(a, b)`.
    pub fn hash_params(&self) -> (u64, u64) {
        self.hash.params()
    }

    /// Inserts a key-value pair into the map.
    /// If the key already exists, its value is replaced and the old value returned.
    ///
    /// A new key that pushes the load factor over `max_load` doubles the table.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let idx = self.bucket_index(&key);
        let bucket = &mut self.buckets[idx];

        if let Some(entry) = bucket.iter_mut().find(|entry| entry.key == key) {
            return Some(std::mem::replace(&mut entry.value, value));
        }

        bucket.push(Entry { key, value });
        self.len += 1;

        if self.load_factor() > self.max_load {
            log::trace!(
                "load factor {:.3} above {} after insert, growing",
                self.load_factor(),
                self.max_load
            );
            self.resize(self.capacity().saturating_mul(2));
        }
        None
    }

    /// Returns a reference to the value stored for `key`, if present.
    ///
    /// `key` may be any borrowed form of `K` that converts to the same integer,
    /// e.g. `&str` for a `String` key.
    pub fn search<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: HashKey + Eq + ?Sized,
    {
        let idx = self.bucket_index(key);
        self.buckets[idx]
            .iter()
            .find(|entry| <K as Borrow<Q>>::borrow(&entry.key) == key)
            .map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value stored for `key`, if present.
    pub fn search_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: HashKey + Eq + ?Sized,
    {
        let idx = self.bucket_index(key);
        self.buckets[idx]
            .iter_mut()
            .find(|entry| <K as Borrow<Q>>::borrow(&entry.key) == key)
            .map(|entry| &mut entry.value)
    }

    /// Returns true if `key` is stored in the map.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: HashKey + Eq + ?Sized,
    {
        self.search(key).is_some()
    }

    /// Removes `key`, returning whether it was present.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: HashKey + Eq + ?Sized,
    {
        self.remove(key).is_some()
    }

    /// Removes and returns the value for `key`, if present.
    ///
    /// If the table has more than 8 buckets and the removal drops the load
    /// factor below `min_load`, the table is halved.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: HashKey + Eq + ?Sized,
    {
        let idx = self.bucket_index(key);
        let bucket = &mut self.buckets[idx];
        let pos = bucket
            .iter()
            .position(|entry| <K as Borrow<Q>>::borrow(&entry.key) == key)?;
        let entry = bucket.swap_remove(pos);
        self.len -= 1;

        if self.capacity() > MIN_CAPACITY && self.load_factor() < self.min_load {
            log::trace!(
                "load factor {:.3} below {} after removal, shrinking",
                self.load_factor(),
                self.min_load
            );
            self.resize(self.capacity() / 2);
        }
        Some(entry.value)
    }

    /// Clears the map, removing all key-value pairs. Capacity and hash
    /// parameters are kept.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Rebuilds the table with `new_capacity` buckets, rounded up to a power of
    /// two and at least 8. Requests above [`MAX_CAPACITY`] are clamped to it.
    ///
    /// Every pair goes back in through [`insert`](Self::insert), so if the new
    /// table is too small for its contents it keeps growing until the load
    /// factor is within bounds again. The hash parameters are not touched.
    pub fn resize(&mut self, new_capacity: usize) {
        let new_capacity = bucket_count_for(new_capacity).unwrap_or(MAX_CAPACITY);
        let old_capacity = self.capacity();
        let old_buckets = std::mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        log::debug!(
            "resizing chained hash map: {} -> {} buckets, rehashing {} entries",
            old_capacity,
            new_capacity,
            self.len
        );

        self.len = 0;
        for entry in old_buckets.into_iter().flatten() {
            self.insert(entry.key, entry.value);
        }
    }

    /// Reports average and maximum chain length and the number of non-empty
    /// buckets. Purely diagnostic.
    pub fn bucket_stats(&self) -> BucketStats {
        let total: usize = self.buckets.iter().map(Vec::len).sum();
        BucketStats {
            avg_chain_len: total as f64 / self.buckets.len() as f64,
            max_chain_len: self.buckets.iter().map(Vec::len).max().unwrap_or(0),
            nonempty_buckets: self.buckets.iter().filter(|b| !b.is_empty()).count(),
        }
    }

    fn bucket_index<Q: HashKey + ?Sized>(&self, key: &Q) -> usize {
        self.hash.bucket(key.key_to_int(), self.buckets.len())
    }
}

/// Next power of two at or above `requested`, never below [`MIN_CAPACITY`].
/// `None` if that power of two does not fit in a `usize`.
fn bucket_count_for(requested: usize) -> Option<usize> {
    requested.max(MIN_CAPACITY).checked_next_power_of_two()
}

fn empty_buckets<K, V>(count: usize) -> Vec<Bucket<K, V>> {
    let mut buckets = Vec::with_capacity(count);
    buckets.resize_with(count, Vec::new);
    buckets
}
