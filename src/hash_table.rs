//! HashTable: fixed-size separate chaining over `LinkedList` buckets.
//!
//! Each bucket is a `LinkedList<Entry<V>>`. A key index (`key -> bucket`)
//! sits beside the buckets so `has`, `keys` and `len` never scan chains.
//! Both are mutated under the same `&mut self`, so no caller can observe
//! one updated without the other.
//!
//! The table never grows: the bucket count chosen at construction is the
//! bucket count for the table's whole life.

mod invariants;

use crate::linked_list::LinkedList;
use core::fmt;
use core::mem;
use hashbrown::HashMap;
use log::{debug, trace};
use thiserror::Error;

pub const DEFAULT_BUCKET_COUNT: usize = 32;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HashTableError {
    #[error("bucket count must be at least 1")]
    InvalidBucketCount,
}

/// Maps a key to a bucket.
///
/// Implementations must be pure functions of `key` and `bucket_count`; the
/// table relies on this to keep each key in exactly one chain. Results are
/// reduced modulo `bucket_count` by the table, so out-of-range values are
/// tolerated.
pub trait BucketHasher {
    fn bucket_index(&self, key: &str, bucket_count: usize) -> usize;
}

/// Sum of the character codes of `key`, modulo the bucket count.
///
/// A character's code is its first UTF-16 code unit, which is the code
/// point itself for every character in the Basic Multilingual Plane.
/// Collision-prone on purpose: anagrams always share a bucket.
#[derive(Copy, Clone, Debug, Default)]
pub struct CharCodeSum;

impl BucketHasher for CharCodeSum {
    fn bucket_index(&self, key: &str, bucket_count: usize) -> usize {
        let sum = key.chars().fold(0usize, |acc, c| {
            let mut units = [0u16; 2];
            acc.wrapping_add(usize::from(c.encode_utf16(&mut units)[0]))
        });
        sum % bucket_count
    }
}

/// A key-value pair stored in a bucket chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<V> {
    key: String,
    value: V,
}

impl<V> Entry<V> {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_parts(self) -> (String, V) {
        (self.key, self.value)
    }
}

pub struct HashTable<V, H = CharCodeSum> {
    buckets: Vec<LinkedList<Entry<V>>>,
    keys: HashMap<String, usize>,
    hasher: H,
}

impl<V> HashTable<V> {
    pub fn new() -> Self {
        Self::allocate(DEFAULT_BUCKET_COUNT, CharCodeSum)
    }

    pub fn with_bucket_count(bucket_count: usize) -> Result<Self, HashTableError> {
        Self::with_hasher(bucket_count, CharCodeSum)
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, H> HashTable<V, H>
where
    H: BucketHasher,
{
    pub fn with_hasher(bucket_count: usize, hasher: H) -> Result<Self, HashTableError> {
        if bucket_count == 0 {
            return Err(HashTableError::InvalidBucketCount);
        }
        Ok(Self::allocate(bucket_count, hasher))
    }

    fn allocate(bucket_count: usize, hasher: H) -> Self {
        debug!("allocating hash table with {bucket_count} buckets");
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, LinkedList::new);
        Self {
            buckets,
            keys: HashMap::new(),
            hasher,
        }
    }

    /// Bucket index for `key`.
    pub fn hash(&self, key: &str) -> usize {
        let n = self.buckets.len();
        self.hasher.bucket_index(key, n) % n
    }

    /// Insert or overwrite. Returns the previous value when `key` was
    /// already present; the entry keeps its place in the chain.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        let index = self.hash(&key);
        let bucket = &mut self.buckets[index];

        let previous = match bucket.find_by_predicate(|e| e.key == key) {
            Some(h) => {
                trace!("overwriting {key:?} in bucket {index}");
                h.value_mut(bucket)
                    .map(|entry| mem::replace(&mut entry.value, value))
            }
            None => {
                if !bucket.is_empty() {
                    trace!(
                        "{key:?} collides in bucket {index}, chaining behind {} entries",
                        bucket.len()
                    );
                }
                bucket.append(Entry {
                    key: key.clone(),
                    value,
                });
                None
            }
        };
        self.keys.insert(key, index);
        debug_assert!(self.counts_agree());
        previous
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        let bucket = &self.buckets[self.hash(key)];
        bucket
            .find_by_predicate(|e| e.key == key)
            .and_then(|h| h.value(bucket))
            .map(|e| &e.value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.hash(key);
        let bucket = &mut self.buckets[index];
        let h = bucket.find_by_predicate(|e| e.key == key)?;
        h.value_mut(bucket).map(|e| &mut e.value)
    }

    /// Remove `key` and return its entry. Only the located node is
    /// unlinked; other entries in the chain are untouched even if their
    /// values compare equal.
    pub fn delete(&mut self, key: &str) -> Option<Entry<V>> {
        let index = self.hash(key);
        self.keys.remove(key);
        let bucket = &mut self.buckets[index];
        let removed = bucket
            .find_by_predicate(|e| e.key == key)
            .and_then(|h| bucket.remove(h));
        debug_assert!(self.counts_agree());
        let removed = removed?;
        trace!("deleted {key:?} from bucket {index}");
        Some(removed.into_value())
    }
}

impl<V, H> HashTable<V, H> {
    pub fn has(&self, key: &str) -> bool {
        self.keys.contains_key(key)
    }

    /// Every live key, read from the key index. Order is unspecified.
    pub fn keys(&self) -> Vec<&str> {
        self.keys.keys().map(String::as_str).collect()
    }

    /// Every value, by ascending bucket index and then chain order.
    pub fn values(&self) -> Vec<&V> {
        self.iter().map(|(_, v)| v).collect()
    }

    /// `(key, value)` pairs in the same order as [`HashTable::values`].
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.values())
            .map(|e| (e.key.as_str(), &e.value))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn bucket(&self, index: usize) -> Option<&LinkedList<Entry<V>>> {
        self.buckets.get(index)
    }
}

impl<V: fmt::Debug, H> fmt::Debug for HashTable<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
