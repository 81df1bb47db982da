//! # Domain Errors
//!
//! Error types for the block matrix.
//!
//! ## Design Principles
//!
//! - Backing store failures surface as `Storage` and are never retried
//! - Unknown keys and out-of-range numbers are recoverable `NotFound` cases
//! - Integrity violations are fatal to the operation that detected them

use std::fmt;

use thiserror::Error;

use super::digest::Axis;
use super::indexing::BlockNumber;

/// Errors returned by every block matrix operation.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// The backing key-value store failed.
    #[error("Storage error: {0}")]
    Storage(#[from] KVStoreError),

    /// No block is indexed under this key.
    #[error("Key not found: {key}")]
    KeyNotFound { key: String },

    /// Block number outside `1..=capacity`.
    #[error("Block {number} out of range (capacity {capacity})")]
    BlockOutOfRange { number: BlockNumber, capacity: u64 },

    /// The key already maps to a block.
    #[error("Duplicate key: {key}")]
    DuplicateKey { key: String },

    /// The key collides with the record layout of the store.
    #[error("Invalid key {key:?}: {reason}")]
    InvalidKey { key: String, reason: &'static str },

    /// Payload exceeds the configured maximum.
    #[error("Block too large: {size} bytes, max {max_size} bytes")]
    BlockTooLarge { size: usize, max_size: usize },

    /// A persisted record could not be encoded or decoded.
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// A hash or digest disagrees with the stored content.
    #[error("Integrity violation: {0}")]
    Integrity(#[from] IntegrityViolation),
}

impl MatrixError {
    /// True for the recoverable lookup failures (unknown key, out-of-range number).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MatrixError::KeyNotFound { .. } | MatrixError::BlockOutOfRange { .. }
        )
    }

    /// The violation carried by an `Integrity` error.
    pub fn integrity(&self) -> Option<&IntegrityViolation> {
        match self {
            MatrixError::Integrity(violation) => Some(violation),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for MatrixError {
    fn from(err: serde_json::Error) -> Self {
        MatrixError::Serialization {
            message: err.to_string(),
        }
    }
}

/// What kind of discrepancy was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegrityKind {
    /// A block's stored hash does not match its data.
    BlockHashMismatch,
    /// A stored row digest does not match the row's blocks.
    RowDigestMismatch,
    /// A stored column digest does not match the column's blocks.
    ColumnDigestMismatch,
    /// A block slot inside the grid capacity has no record.
    MissingBlock,
    /// The metadata record contradicts itself.
    MalformedMetadata,
    /// A redaction changed digests outside its own row and column.
    NonLocalRedaction,
}

impl IntegrityKind {
    /// Mismatch kind for a digest on the given axis.
    pub fn digest_mismatch(axis: Axis) -> Self {
        match axis {
            Axis::Row => IntegrityKind::RowDigestMismatch,
            Axis::Column => IntegrityKind::ColumnDigestMismatch,
        }
    }
}

impl fmt::Display for IntegrityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntegrityKind::BlockHashMismatch => "block hash mismatch",
            IntegrityKind::RowDigestMismatch => "row digest mismatch",
            IntegrityKind::ColumnDigestMismatch => "column digest mismatch",
            IntegrityKind::MissingBlock => "missing block",
            IntegrityKind::MalformedMetadata => "malformed metadata",
            IntegrityKind::NonLocalRedaction => "non-local redaction",
        };
        f.write_str(name)
    }
}

/// A single detected discrepancy.
///
/// `index` is a block number for block-level kinds and a row/column index for
/// digest kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("{kind} at index {index}")]
pub struct IntegrityViolation {
    pub kind: IntegrityKind,
    pub index: u64,
}

impl IntegrityViolation {
    pub fn new(kind: IntegrityKind, index: u64) -> Self {
        Self { kind, index }
    }
}

/// Key-value store errors.
#[derive(Debug, Clone, Error)]
pub enum KVStoreError {
    /// I/O error during read/write.
    #[error("KV store I/O error: {message}")]
    IOError { message: String },
    /// Data corruption in the store.
    #[error("KV store corruption: {message}")]
    CorruptionError { message: String },
    /// A record the matrix relies on is absent.
    #[error("Key not found in KV store")]
    NotFound,
}

impl From<std::io::Error> for KVStoreError {
    fn from(err: std::io::Error) -> Self {
        KVStoreError::IOError {
            message: err.to_string(),
        }
    }
}
