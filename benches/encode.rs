//! Hot-path micro-benchmarks: key encoding, seek-target sampling, and one
//! seek round against the in-memory store.
//!
//! Run: `cargo bench --bench encode`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lsm_seek_bench::driver::{seek_round, write_phase};
use lsm_seek_bench::key::{value_payload, VALUE_LEN};
use lsm_seek_bench::{BenchConfig, Cursor, Key, MemStore, Store, XorShift64};

fn key_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("key/encode");
    group.throughput(Throughput::Elements(1));

    group.bench_function("fresh", |b| {
        let mut seq = 0u64;
        b.iter(|| {
            seq = (seq + 1) % 1_000_000;
            black_box(Key::encode(black_box(seq), 7).unwrap());
        });
    });

    group.bench_function("in_place", |b| {
        let mut key = Key::default();
        let mut seq = 0u64;
        b.iter(|| {
            seq = (seq + 1) % 1_000_000;
            key.update(black_box(seq), 7).unwrap();
            black_box(key.as_bytes());
        });
    });
    group.finish();
}

fn rng_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("rng");
    group.throughput(Throughput::Elements(1));
    group.bench_function("next_below", |b| {
        let mut rng = XorShift64::default();
        b.iter(|| black_box(rng.next_below(1_000_000)));
    });
    group.finish();
}

fn mem_seek_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("mem/seek_round");
    let config = BenchConfig::for_testing().with_keys(10_000).with_seeks(1_000);
    let store = MemStore::new();
    write_phase(&store, 0, config.n_keys, &value_payload(VALUE_LEN)).unwrap();
    group.throughput(Throughput::Elements(config.n_seeks));

    for nnext in [1u64, 8, 64] {
        group.bench_with_input(BenchmarkId::new("nnext", nnext), &nnext, |b, &nnext| {
            let mut rng = XorShift64::default();
            let mut cursor = Cursor::new(store.raw_iter());
            b.iter(|| seek_round(&mut cursor, &mut rng, &config, 0, nnext, 0).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, key_encode, rng_draw, mem_seek_round);
criterion_main!(benches);
