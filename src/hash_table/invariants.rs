use super::{BucketHasher, HashTable};

impl<V, H: BucketHasher> HashTable<V, H> {
    /// Check that the key index and the bucket chains describe the same set
    /// of entries. Intended for tests and debug assertions; O(n).
    pub fn invariants(&self) -> bool {
        chains_well_formed(self)
            && entries_indexed_at_their_bucket(self)
            && entries_hashed_to_their_bucket(self)
            && index_matches_entry_count(self)
    }
}

impl<V, H> HashTable<V, H> {
    /// O(bucket count) subset of [`HashTable::invariants`] checked by
    /// `debug_assert!` after `set` and `delete`.
    pub(crate) fn counts_agree(&self) -> bool {
        index_matches_entry_count(self)
    }
}

fn chains_well_formed<V, H>(t: &HashTable<V, H>) -> bool {
    t.buckets.iter().all(|b| b.invariants())
}

fn entries_indexed_at_their_bucket<V, H>(t: &HashTable<V, H>) -> bool {
    t.buckets.iter().enumerate().all(|(i, bucket)| {
        bucket
            .values()
            .all(|e| t.keys.get(e.key.as_str()) == Some(&i))
    })
}

fn entries_hashed_to_their_bucket<V, H: BucketHasher>(t: &HashTable<V, H>) -> bool {
    t.buckets
        .iter()
        .enumerate()
        .all(|(i, bucket)| bucket.values().all(|e| t.hash(&e.key) == i))
}

// With every entry indexed at its own bucket, equal counts rule out a key
// appearing twice.
fn index_matches_entry_count<V, H>(t: &HashTable<V, H>) -> bool {
    t.buckets.iter().map(|b| b.len()).sum::<usize>() == t.keys.len()
}
