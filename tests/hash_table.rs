mod common;

use chain_table::{BucketHasher, HashTable, HashTableError};
use common::init_test_logger;
use std::collections::BTreeSet;

fn key_set<V>(t: &HashTable<V>) -> BTreeSet<String> {
    t.keys().into_iter().map(str::to_owned).collect()
}

#[test]
fn set_get_has_delete() {
    init_test_logger();
    let mut t = HashTable::new();
    t.set("a", "sky-old");
    t.set("a", "sky");
    t.set("b", "sea");
    t.set("c", "earth");
    t.set("d", "ocean");

    assert!(t.has("a"));
    assert!(!t.has("x"));
    assert_eq!(t.get("a"), Some(&"sky"));
    assert_eq!(t.get("d"), Some(&"ocean"));
    assert_eq!(t.get("x"), None);

    let removed = t.delete("a").expect("a present");
    assert_eq!(removed.key(), "a");
    assert_eq!(*removed.value(), "sky");
    assert!(t.delete("a").is_none());
    assert_eq!(t.get("a"), None);
    assert_eq!(t.len(), 3);
    assert!(t.invariants());
}

/// Keys whose character codes sum to the same value modulo 32 share a chain,
/// and `values` reports them in insertion order.
#[test]
fn collision_scenario() {
    init_test_logger();
    let mut t = HashTable::with_bucket_count(32).unwrap();
    // 'a' = 97; 'A' (65) + ' ' (32) = 97.
    assert_eq!(t.hash("a"), t.hash("A "));

    t.set("a", 1);
    t.set("A ", 2);
    assert_eq!(t.values(), vec![&1, &2]);
    let chain: Vec<&str> = t
        .bucket(t.hash("a"))
        .unwrap()
        .values()
        .map(|e| e.key())
        .collect();
    assert_eq!(chain, vec!["a", "A "]);

    let removed = t.delete("a").expect("a present");
    assert_eq!(removed.into_parts(), ("a".to_string(), 1));
    assert!(!t.has("a"));
    assert_eq!(t.get("A "), Some(&2));
    assert!(t.invariants());
}

#[test]
fn idempotent_overwrite() {
    let mut t = HashTable::new();
    t.set("k", 1);
    let count = t.values().len();
    t.set("k", 2);
    assert_eq!(t.get("k"), Some(&2));
    assert_eq!(t.values().len(), count);
    assert_eq!(t.len(), 1);
}

#[test]
fn delete_absent_is_noop() {
    let mut t = HashTable::new();
    t.set("one", 1);
    t.set("two", 2);
    let keys = key_set(&t);
    let mut values: Vec<i32> = t.values().into_iter().copied().collect();
    values.sort_unstable();

    assert!(t.delete("three").is_none());

    assert_eq!(key_set(&t), keys);
    let mut after: Vec<i32> = t.values().into_iter().copied().collect();
    after.sort_unstable();
    assert_eq!(after, values);
}

#[test]
fn zero_bucket_count_fails_fast() {
    match HashTable::<()>::with_bucket_count(0) {
        Err(HashTableError::InvalidBucketCount) => {}
        Ok(_) => panic!("expected construction to fail"),
    }
    assert_eq!(
        HashTableError::InvalidBucketCount.to_string(),
        "bucket count must be at least 1"
    );
}

#[test]
fn single_bucket_table_chains_everything() {
    let mut t = HashTable::with_bucket_count(1).unwrap();
    for (i, k) in ["x", "y", "z"].into_iter().enumerate() {
        t.set(k, i);
    }
    assert_eq!(t.bucket(0).unwrap().len(), 3);
    assert_eq!(t.values(), vec![&0, &1, &2]);
    assert_eq!(t.iter().map(|(k, _)| k).collect::<Vec<_>>(), vec!["x", "y", "z"]);
}

/// A custom hasher decides the bucket; the table still keeps keys unique.
#[test]
fn custom_hasher_by_length() {
    struct ByLength;
    impl BucketHasher for ByLength {
        fn bucket_index(&self, key: &str, _bucket_count: usize) -> usize {
            key.len()
        }
    }

    let mut t = HashTable::with_hasher(4, ByLength).unwrap();
    t.set("ab", 1);
    t.set("cd", 2);
    t.set("ab", 3);
    t.set("abcdef", 4); // 6 % 4 == 2
    assert_eq!(t.hash("ab"), 2);
    assert_eq!(t.bucket(2).unwrap().len(), 3);
    assert_eq!(t.values(), vec![&3, &2, &4]);
    assert_eq!(t.len(), 3);
    assert!(t.invariants());
}

#[test]
fn reinsert_after_delete_goes_to_chain_end() {
    let mut t = HashTable::with_bucket_count(1).unwrap();
    t.set("a", 1);
    t.set("b", 2);
    t.delete("a");
    t.set("a", 3);
    assert_eq!(t.values(), vec![&2, &3]);
    assert!(t.has("a"));
}
