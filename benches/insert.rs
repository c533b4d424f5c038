use std::collections::BTreeSet;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ordset::{generate::quadratic_keys, BTree};

const KEY_COUNT: u64 = 100_000;
const MODULUS: u64 = 8_000_009;

fn bulk_insert(c: &mut Criterion) {
    let keys: Vec<u64> = quadratic_keys(KEY_COUNT, MODULUS).collect();

    let mut group = c.benchmark_group("bulk_insert");
    for min_degree in [2, 8, 32] {
        group.bench_with_input(
            BenchmarkId::new("btree", min_degree),
            &min_degree,
            |b, &min_degree| {
                b.iter(|| {
                    let mut tree = BTree::new(min_degree);
                    for key in &keys {
                        tree.insert(black_box(*key));
                    }
                    tree
                })
            },
        );
    }
    group.bench_function("std_btreeset", |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for key in &keys {
                set.insert(black_box(*key));
            }
            set
        })
    });
    group.finish();
}

criterion_group!(benches, bulk_insert);
criterion_main!(benches);
