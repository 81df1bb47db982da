//! # Integration Scenarios
//!
//! Every scenario drives the matrix through `BlockMatrixApi` only, the way
//! an embedding application would.

pub mod concurrency;
pub mod lifecycle;
pub mod persistence;

use block_matrix::{BlockMatrix, BlockMatrixApi, KeyValueStore};

pub fn key(i: u64) -> String {
    format!("doc-{i}")
}

pub fn payload(i: u64) -> Vec<u8> {
    format!("document body {i}").into_bytes()
}

/// Insert `key(i)` for every `i` in `range`.
pub fn fill<KV: KeyValueStore>(matrix: &BlockMatrix<KV>, range: std::ops::RangeInclusive<u64>) {
    for i in range {
        matrix
            .insert(&key(i), &payload(i))
            .unwrap_or_else(|e| panic!("insert {i} failed: {e}"));
    }
}
