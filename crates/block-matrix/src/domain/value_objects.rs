//! # Value Objects
//!
//! Configuration and record-key layout for the block matrix.

use super::errors::{KVStoreError, MatrixError};
use super::indexing::BlockNumber;

/// Configuration for a block matrix handle.
///
/// All values have defaults suitable for embedding.
#[derive(Debug, Clone)]
pub struct MatrixConfig {
    /// Maximum payload size in bytes (default: 10MB).
    pub max_block_size: usize,

    /// Re-hash blocks on every read (default: true).
    ///
    /// When enabled, `get` and `get_by_number` fail with a block hash
    /// mismatch instead of returning data that no longer matches its hash.
    pub verify_reads: bool,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            max_block_size: 10 * 1024 * 1024, // 10 MB
            verify_reads: true,
        }
    }
}

impl MatrixConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum payload size.
    pub fn with_max_block_size(mut self, size: usize) -> Self {
        self.max_block_size = size;
        self
    }

    /// Enable or disable hash verification on reads.
    pub fn with_verify_reads(mut self, verify: bool) -> Self {
        self.verify_reads = verify;
        self
    }
}

/// Logical records kept in the key-value store.
///
/// | Key | Value |
/// |---|---|
/// | `info` | matrix metadata |
/// | `<caller key>` | ASCII decimal block number |
/// | `<decimal block number>` | block |
#[derive(Debug, Clone, Copy)]
pub enum RecordKey<'a> {
    /// The singleton metadata record.
    Info,
    /// Caller key to block number.
    Index(&'a str),
    /// Block number to block.
    Block(BlockNumber),
}

impl RecordKey<'_> {
    pub const INFO: &'static [u8] = b"info";

    /// Encoded store key.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            RecordKey::Info => Self::INFO.to_vec(),
            RecordKey::Index(key) => key.as_bytes().to_vec(),
            RecordKey::Block(number) => number.to_string().into_bytes(),
        }
    }

    /// Reject caller keys that would alias the metadata or a block record.
    pub fn validate_caller_key(key: &str) -> Result<(), MatrixError> {
        let reason = if key.is_empty() {
            "key must not be empty"
        } else if key.as_bytes() == Self::INFO {
            "key is reserved for matrix metadata"
        } else if key.bytes().all(|b| b.is_ascii_digit()) {
            "decimal keys are reserved for block records"
        } else {
            return Ok(());
        };

        Err(MatrixError::InvalidKey {
            key: key.to_string(),
            reason,
        })
    }
}

/// Value of an index record.
pub fn encode_block_number(number: BlockNumber) -> Vec<u8> {
    number.to_string().into_bytes()
}

/// Parse an index record value.
pub fn decode_block_number(bytes: &[u8]) -> Result<BlockNumber, MatrixError> {
    std::str::from_utf8(bytes)
        .ok()
        .and_then(|s| s.parse::<BlockNumber>().ok())
        .filter(|number| *number > 0)
        .ok_or_else(|| {
            KVStoreError::CorruptionError {
                message: format!("invalid block number record: {:?}", String::from_utf8_lossy(bytes)),
            }
            .into()
        })
}
