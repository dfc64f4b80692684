use chain_table::HashTable;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn filled(seed: u64, n: usize, buckets: usize) -> (HashTable<u64>, Vec<String>) {
    let mut t = HashTable::with_bucket_count(buckets).unwrap();
    let keys: Vec<String> = lcg(seed).take(n).map(key).collect();
    for (i, k) in keys.iter().enumerate() {
        t.set(k.as_str(), i as u64);
    }
    (t, keys)
}

fn bench_set_fresh(c: &mut Criterion) {
    for buckets in [32usize, 1024] {
        c.bench_function(&format!("table::set_fresh_10k_{buckets}_buckets"), |b| {
            b.iter_batched(
                || HashTable::<u64>::with_bucket_count(buckets).unwrap(),
                |mut t| {
                    for (i, x) in lcg(1).take(10_000).enumerate() {
                        t.set(key(x), i as u64);
                    }
                    black_box(t)
                },
                BatchSize::SmallInput,
            )
        });
    }
}

fn bench_overwrite(c: &mut Criterion) {
    c.bench_function("table::overwrite_10k_on_10k", |b| {
        b.iter_batched(
            || filled(2, 10_000, 1024),
            |(mut t, keys)| {
                for k in &keys {
                    black_box(t.set(k.as_str(), 0));
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit_and_miss(c: &mut Criterion) {
    let (t, keys) = filled(7, 10_000, 1024);
    c.bench_function("table::get_hit_10k", |b| {
        b.iter(|| {
            for k in &keys {
                black_box(t.get(k));
            }
        })
    });

    let misses: Vec<String> = lcg(0xdead_beef).take(10_000).map(key).collect();
    c.bench_function("table::get_miss_10k", |b| {
        b.iter(|| {
            for k in &misses {
                black_box(t.get(k));
            }
        })
    });

    c.bench_function("table::has_miss_10k", |b| {
        b.iter(|| {
            for k in &misses {
                black_box(t.has(k));
            }
        })
    });
}

fn bench_delete_all(c: &mut Criterion) {
    c.bench_function("table::delete_all_10k", |b| {
        b.iter_batched(
            || filled(5, 10_000, 1024),
            |(mut t, keys)| {
                for k in &keys {
                    black_box(t.delete(k));
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_values(c: &mut Criterion) {
    let (t, _) = filled(999, 10_000, 1024);
    c.bench_function("table::values_10k", |b| b.iter(|| black_box(t.values())));
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(12)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1))
}

criterion_group! {
    name = benches_insert;
    config = bench_config();
    targets = bench_set_fresh, bench_overwrite
}
criterion_group! {
    name = benches_ops;
    config = bench_config();
    targets = bench_get_hit_and_miss,
              bench_delete_all,
              bench_values
}
criterion_main!(benches_insert, benches_ops);
