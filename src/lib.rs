//! chain-table: a fixed-size, separate-chaining hash table whose buckets
//! are singly linked lists.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep the two coupled structures (bucket chains and the key
//!   index) in lock-step, with each layer small enough to check on its own.
//! - Layers:
//!   - ListNode<V>: one cell, a value plus the arena key of its successor.
//!   - LinkedList<V, C>: singly linked chain over a `SlotMap` arena with
//!     head/tail tracking, comparator-based and predicate-based search,
//!     and deletion by value or by handle.
//!   - HashTable<V, H>: a `Vec` of `LinkedList<Entry<V>>` buckets plus a
//!     `hashbrown::HashMap<String, usize>` key index for O(1) `has`/`keys`.
//!
//! Constraints
//! - Single-threaded: every mutator takes `&mut self`, so a chain update
//!   and the matching key-index update are one exclusive step.
//! - Fixed bucket count: chosen at construction (default 32), never
//!   resized or rehashed.
//! - Keys are unique across the whole table, not just within a bucket.
//!   Bucket hashers must be pure functions of `(key, bucket_count)`.
//! - Absent keys and empty lists are reported with `None`, never errors.
//!   The only error is a zero bucket count at construction.
//!
//! Chain ownership
//! - Nodes live in a per-list generational arena; `next` links are arena
//!   keys. There are no back-links, so no cycles can form and removing a
//!   node frees it immediately.
//! - `NodeHandle`s are generational keys: a handle to a removed node never
//!   resolves again, even after its slot is reused.
//!
//! Search and removal
//! - `LinkedList::find` takes an explicit `Search` criterion (value under
//!   the list's comparator, or a predicate) instead of an "unset" marker.
//! - The table looks entries up by predicate on the key and removes the
//!   located node by handle. Value equality is never used to pick which
//!   entry to unlink, so equal values elsewhere in the chain survive.
//!
//! Hashing
//! - The default `CharCodeSum` hasher sums character codes modulo the
//!   bucket count. It is deliberately weak; its collisions decide which
//!   keys share a chain and therefore the order `HashTable::values` reports.
//!
//! Notes and non-goals
//! - No resizing, persistence, thread-safety, or ordering beyond
//!   "ascending bucket, then insertion order within a bucket".
//! - `HashTable::keys` order is unspecified.

pub mod comparator;
pub mod hash_table;
mod hash_table_proptest;
pub mod linked_list;
mod linked_list_proptest;
pub mod list_node;
#[cfg(test)]
mod test_logger;

// Public surface
pub use comparator::{Comparator, DefaultComparator};
pub use hash_table::{
    BucketHasher, CharCodeSum, Entry, HashTable, HashTableError, DEFAULT_BUCKET_COUNT,
};
pub use linked_list::{LinkedList, NodeHandle, Search};
pub use list_node::ListNode;
