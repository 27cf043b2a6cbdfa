//! # Prefix Resolution Benchmarks
//!
//! Prefix lookup must stay logarithmic in the number of stored blocks:
//!
//! | Operation | Expected |
//! |-----------|----------|
//! | `resolve_prefix` (unique, 8 chars) | flat across store sizes |
//! | `get_block_info` (Basic, 8 chars) | resolve + one record decode |
//! | `get_block_info` (Full, 64 chars) | exact hash + child list |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qc_02_block_storage::{BlockQueryApi, BlockQueryService, BlockStoreApi, BlockView};
use qc_tests::fixtures::{make_block, new_store, put_block};
use rand::seq::SliceRandom;
use std::time::Duration;

const STORE_SIZES: [u64; 3] = [1_000, 10_000, 50_000];

fn bench_resolve_prefix(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-02-prefix-resolution");
    group.measurement_time(Duration::from_secs(5));

    for size in STORE_SIZES {
        let store = new_store();
        let mut hashes: Vec<_> = (0..size)
            .map(|rank| put_block(store.as_ref(), make_block(rank, vec![])))
            .collect();
        hashes.shuffle(&mut rand::thread_rng());
        let prefixes: Vec<String> = hashes
            .iter()
            .take(256)
            .map(|hash| hash.to_hex()[..8].to_string())
            .collect();

        group.throughput(Throughput::Elements(prefixes.len() as u64));
        group.bench_with_input(BenchmarkId::new("resolve_prefix", size), &prefixes, |b, prefixes| {
            b.iter(|| {
                for prefix in prefixes {
                    // An 8-char collision is possible at these sizes; ambiguity is a valid outcome.
                    let _ = black_box(store.resolve_prefix(prefix));
                }
            })
        });
    }

    group.finish();
}

fn bench_get_block_info(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-02-block-info");
    group.measurement_time(Duration::from_secs(5));

    let store = new_store();
    let genesis = put_block(store.as_ref(), make_block(0, vec![]));
    let mut tips = Vec::new();
    for rank in 1..10_000 {
        tips.push(put_block(store.as_ref(), make_block(rank, vec![genesis])));
    }
    let queries = BlockQueryService::new(store.clone());
    let prefix = tips[tips.len() / 2].to_hex()[..8].to_string();
    let genesis_hex = genesis.to_hex();

    group.bench_function("basic_by_prefix", |b| {
        b.iter(|| black_box(queries.get_block_info(&prefix, BlockView::Basic)))
    });

    group.bench_function("full_by_hash_wide_fanout", |b| {
        b.iter(|| black_box(queries.get_block_info(&genesis_hex, BlockView::Full)))
    });

    group.finish();
}

criterion_group!(benches, bench_resolve_prefix, bench_get_block_info);
criterion_main!(benches);
