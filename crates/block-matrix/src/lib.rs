//! # Block Matrix
//!
//! A tamper-evident store that places opaque data blocks in the off-diagonal
//! cells of a growing square grid. Every row and every column carries a
//! SHA-256 digest over its blocks, so a change to one block shows up in
//! exactly one row and one column.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Minimal Dimension | `dimension` is the smallest `n` with `n² − n ≥ block_count` |
//! | 2 | Stable Placement | A block number's grid cell never changes |
//! | 3 | Empty Diagonal | Diagonal cells never hold a block |
//! | 4 | Digest Coverage | Each digest covers the assigned blocks of its line, in fixed order |
//! | 5 | Local Updates | Insert and redact change one row and one column digest |
//! | 6 | Atomic Writes | Every mutation commits in a single batch |
//! | 7 | No Holes | Every slot up to the grid capacity holds a block |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Pure domain logic (indexing, digests, metadata, redaction, audit)
//! - `ports/` - Port traits (inbound API, outbound key-value store)
//! - `adapters/` - In-memory and file-backed key-value stores
//! - `service/` - The `BlockMatrix` handle implementing the API
//!
//! ## Usage
//!
//! ```
//! use block_matrix::{BlockMatrix, BlockMatrixApi};
//!
//! let matrix = BlockMatrix::in_memory()?;
//!
//! let number = matrix.insert("invoice-17", b"amount=42")?;
//! assert_eq!(matrix.get("invoice-17")?.data, b"amount=42");
//!
//! matrix.redact("invoice-17")?;
//! assert!(matrix.get_by_number(number)?.is_empty_sentinel());
//!
//! matrix.verify()?;
//! # Ok::<(), block_matrix::MatrixError>(())
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

#[cfg(test)]
mod test_utils;

// Re-export key types for convenience
pub use adapters::{FileBackedKVStore, InMemoryKVStore};
pub use domain::audit::AuditReport;
pub use domain::block::{Block, EMPTY_BLOCK_DATA};
pub use domain::digest::{hash_bytes, Axis, Hash, EMPTY_DIGEST};
pub use domain::errors::{IntegrityKind, IntegrityViolation, KVStoreError, MatrixError};
pub use domain::indexing::{
    block_number_at, capacity, column_block_numbers, locate, row_block_numbers,
    smallest_valid_dimension, BlockNumber, GridPosition,
};
pub use domain::metadata::MatrixInfo;
pub use domain::redaction::RedactionReceipt;
pub use domain::snapshot::{Cell, MatrixSnapshot};
pub use domain::value_objects::MatrixConfig;
pub use ports::inbound::BlockMatrixApi;
pub use ports::outbound::{BatchOperation, KeyValueStore};
pub use service::BlockMatrix;
