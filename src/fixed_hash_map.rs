//! FixedHashMap: fixed-capacity separate-chaining map over string keys.

use core::hash::BuildHasher;
use hashbrown::hash_map::DefaultHashBuilder;
use thiserror::Error;

/// Error returned by construction when the requested capacity is zero.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[error("capacity must be greater than zero")]
pub struct InvalidCapacity;

#[derive(Debug)]
struct Entry<V> {
    key: String,
    value: V,
}

/// A map from string keys to `V` with a bucket count fixed at
/// construction.
///
/// Collisions extend a per-bucket chain, so lookups degrade to a linear
/// scan of one bucket in the worst case. Once `len() == capacity()`,
/// `set` on a new key fails while overwrites, lookups and deletions
/// keep working.
pub struct FixedHashMap<V, S = DefaultHashBuilder> {
    hasher: S,
    buckets: Vec<Vec<Entry<V>>>,
    len: usize,
}

impl<V> FixedHashMap<V> {
    /// Create a map with `capacity` bucket slots and the default
    /// hasher. Fails with [`InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, InvalidCapacity> {
        Self::with_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<V, S> FixedHashMap<V, S>
where
    S: BuildHasher,
{
    /// Create a map with `capacity` bucket slots and an explicit hasher
    /// builder. Fails with [`InvalidCapacity`] when `capacity` is zero.
    pub fn with_hasher(capacity: usize, hasher: S) -> Result<Self, InvalidCapacity> {
        if capacity == 0 {
            return Err(InvalidCapacity);
        }
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Vec::new);
        Ok(Self {
            hasher,
            buckets,
            len: 0,
        })
    }

    fn bucket_index(&self, key: &str) -> usize {
        (self.hasher.hash_one(key) as usize) % self.buckets.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn is_full(&self) -> bool {
        self.len == self.buckets.len()
    }
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Current load factor, `len / capacity`, in `[0.0, 1.0]`.
    pub fn load(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Store `value` under `key`, returning whether the pair was
    /// stored.
    ///
    /// A key that is already present is overwritten in place no matter
    /// how full the map is. A new key is appended at the tail of its
    /// bucket's chain, unless the map already holds `capacity` entries:
    /// then nothing changes and `false` is returned. A full map is not
    /// an error; callers branch on the return value.
    pub fn set(&mut self, key: &str, value: V) -> bool {
        let idx = self.bucket_index(key);
        if let Some(entry) = self.buckets[idx].iter_mut().find(|e| e.key == key) {
            entry.value = value;
            return true;
        }
        if self.len == self.buckets.len() {
            return false;
        }
        self.buckets[idx].push(Entry {
            key: key.to_owned(),
            value,
        });
        self.len += 1;
        true
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        let idx = self.bucket_index(key);
        self.buckets[idx]
            .iter()
            .find(|e| e.key == key)
            .map(|e| &e.value)
    }

    /// Mutable variant of [`get`](Self::get).
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let idx = self.bucket_index(key);
        self.buckets[idx]
            .iter_mut()
            .find(|e| e.key == key)
            .map(|e| &mut e.value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove `key` and return its value.
    ///
    /// The other entries in the bucket keep their relative order and
    /// stay reachable. A miss returns `None` and leaves the map
    /// untouched.
    pub fn delete(&mut self, key: &str) -> Option<V> {
        let idx = self.bucket_index(key);
        let chain = &mut self.buckets[idx];
        let pos = chain.iter().position(|e| e.key == key)?;
        let entry = chain.remove(pos);
        self.len -= 1;
        Some(entry.value)
    }
}
