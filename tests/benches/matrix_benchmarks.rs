//! # Block Matrix Benchmarks
//!
//! | Operation | Cost |
//! |-----------|------|
//! | locate / block_number_at | O(1) |
//! | insert | O(dimension) block reads for two digests |
//! | redact | O(dimension) block reads for two digests |
//! | verify / audit | O(block_count) block reads |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use std::time::Duration;

use block_matrix::{block_number_at, locate, BlockMatrix, BlockMatrixApi, InMemoryKVStore};

fn populated(count: u64) -> BlockMatrix<InMemoryKVStore> {
    let matrix = BlockMatrix::in_memory().unwrap();
    let mut rng = rand::thread_rng();
    for i in 1..=count {
        let data: Vec<u8> = (0..256).map(|_| rng.gen()).collect();
        matrix.insert(&format!("key-{i}"), &data).unwrap();
    }
    matrix
}

// ============================================================================
// Indexing
// ============================================================================

fn bench_indexing(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexing");

    group.bench_function("locate_round_trip_10k", |b| {
        b.iter(|| {
            for n in 1..=10_000u64 {
                let position = locate(black_box(n)).unwrap();
                black_box(block_number_at(position));
            }
        })
    });

    group.finish();
}

// ============================================================================
// Insert / Redact
// ============================================================================

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    group.measurement_time(Duration::from_secs(10));

    for existing in [100u64, 1_000, 5_000] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::new("insert_into", existing),
            &existing,
            |b, &existing| {
                let matrix = populated(existing);
                let mut next = existing;
                b.iter(|| {
                    next += 1;
                    matrix
                        .insert(&format!("key-{next}"), black_box(b"benchmark payload"))
                        .unwrap()
                })
            },
        );
    }

    group.finish();
}

fn bench_redact(c: &mut Criterion) {
    let mut group = c.benchmark_group("redact");

    for existing in [100u64, 1_000] {
        group.bench_with_input(
            BenchmarkId::new("redact_in", existing),
            &existing,
            |b, &existing| {
                let matrix = populated(existing);
                let mut rng = rand::thread_rng();
                b.iter(|| {
                    let target = rng.gen_range(1..=existing);
                    matrix.redact(&format!("key-{target}")).unwrap()
                })
            },
        );
    }

    group.finish();
}

// ============================================================================
// Reads / Verify
// ============================================================================

fn bench_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("reads");
    let matrix = populated(1_000);

    group.bench_function("get_by_key", |b| {
        b.iter(|| matrix.get(black_box("key-500")).unwrap())
    });
    group.bench_function("get_by_number", |b| {
        b.iter(|| matrix.get_by_number(black_box(500)).unwrap())
    });

    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("verify");
    group.sample_size(20);

    for count in [100u64, 1_000] {
        let matrix = populated(count);
        group.throughput(Throughput::Elements(count));
        group.bench_with_input(BenchmarkId::new("full_audit", count), &count, |b, _| {
            b.iter(|| matrix.audit().unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_indexing,
    bench_insert,
    bench_redact,
    bench_reads,
    bench_verify
);
criterion_main!(benches);
