#![cfg(test)]

// Property tests for HashTable kept inside the crate so `invariants()` can
// inspect the buckets and the key index together.

use crate::hash_table::{BucketHasher, CharCodeSum, HashTable};
use crate::test_logger;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

// Pool-indexed operations so shrinking moves toward earlier keys and
// shorter op lists.
#[derive(Clone, Debug)]
enum Op {
    Set(usize, i32),
    Get(usize),
    Delete(usize),
    Has(String),
    Listing,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<Op>)> {
    proptest::collection::vec("[a-e]{0,4}", 1..=10).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Set(i, v)),
            idx.clone().prop_map(Op::Get),
            idx.clone().prop_map(Op::Delete),
            "[a-e]{0,4}".prop_map(Op::Has),
            Just(Op::Listing),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Direct bucket scan, bypassing the key index.
fn scan_count<H: BucketHasher>(t: &HashTable<i32, H>, key: &str) -> usize {
    (0..t.bucket_count())
        .filter_map(|i| t.bucket(i))
        .flat_map(|b| b.values())
        .filter(|e| e.key() == key)
        .count()
}

fn run_scenario<H: BucketHasher>(
    mut sut: HashTable<i32, H>,
    pool: Vec<String>,
    ops: Vec<Op>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, i32> = HashMap::new();

    for op in ops {
        match op {
            Op::Set(i, v) => {
                let k = &pool[i];
                let before = sut.len();
                let prev = sut.set(k.as_str(), v);
                prop_assert_eq!(prev, model.insert(k.clone(), v));
                if prev.is_some() {
                    prop_assert_eq!(sut.len(), before, "overwrite must not add an entry");
                }
            }
            Op::Get(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.get(k), model.get(k));
            }
            Op::Delete(i) => {
                let k = &pool[i];
                let keys_before: BTreeSet<String> =
                    sut.keys().into_iter().map(str::to_owned).collect();
                let removed = sut.delete(k).map(|e| e.into_parts());
                let expected = model.remove(k).map(|v| (k.clone(), v));
                let was_absent = expected.is_none();
                prop_assert_eq!(removed, expected);
                if was_absent {
                    let keys_after: BTreeSet<String> =
                        sut.keys().into_iter().map(str::to_owned).collect();
                    prop_assert_eq!(keys_before, keys_after);
                }
            }
            Op::Has(s) => {
                prop_assert_eq!(sut.has(&s), model.contains_key(&s));
                prop_assert_eq!(sut.has(&s), scan_count(&sut, &s) == 1);
            }
            Op::Listing => {
                let keys: BTreeSet<&str> = sut.keys().into_iter().collect();
                let model_keys: BTreeSet<&str> = model.keys().map(String::as_str).collect();
                prop_assert_eq!(keys, model_keys);
                let mut values: Vec<i32> = sut.values().into_iter().copied().collect();
                let mut model_values: Vec<i32> = model.values().copied().collect();
                values.sort_unstable();
                model_values.sort_unstable();
                prop_assert_eq!(values, model_values);
            }
        }

        // Post-conditions after each op
        for k in &pool {
            prop_assert!(scan_count(&sut, k) <= 1, "key {:?} stored twice", k);
        }
        prop_assert_eq!(sut.len(), model.len());
        prop_assert!(sut.invariants());
    }
    Ok(())
}

// Property: State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - `set` returns the overwritten value and never duplicates a key.
// - `get`/`has` agree with the model; `has` agrees with a bucket scan.
// - Deleting an absent key leaves the key listing unchanged.
// - The key index and the chains describe the same entries.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        test_logger::init();
        run_scenario(HashTable::new(), pool, ops)?;
    }

    #[test]
    fn prop_state_machine_small_table((pool, ops) in arb_scenario(), n in 1usize..=3) {
        run_scenario(HashTable::with_hasher(n, CharCodeSum).unwrap(), pool, ops)?;
    }
}

// Every key lands in one bucket.
#[derive(Clone, Default)]
struct ConstHasher;
impl BucketHasher for ConstHasher {
    fn bucket_index(&self, _key: &str, _bucket_count: usize) -> usize {
        7
    }
}

// Property: Same state-machine invariants under worst-case collisions.
// This stresses the chain search and identity-based removal.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario()) {
        run_scenario(HashTable::with_hasher(32, ConstHasher).unwrap(), pool, ops)?;
    }
}
