//! # Inbound Ports (Driving Ports)
//!
//! The public API of a block matrix handle.

use crate::domain::audit::AuditReport;
use crate::domain::block::Block;
use crate::domain::errors::MatrixError;
use crate::domain::indexing::BlockNumber;
use crate::domain::metadata::MatrixInfo;
use crate::domain::redaction::RedactionReceipt;
use crate::domain::snapshot::MatrixSnapshot;

/// Primary API of the block matrix.
///
/// Writes (`insert`, `redact`) are mutually exclusive and exclude readers;
/// reads may run concurrently with each other.
pub trait BlockMatrixApi {
    /// Store `data` under `key` in the next free block slot.
    ///
    /// Grows the grid by one shell when the slot count is exhausted, then
    /// recomputes exactly the new block's row and column digests. All records
    /// are committed in one atomic batch.
    ///
    /// ## Errors
    ///
    /// - `InvalidKey`: key aliases a metadata or block record
    /// - `DuplicateKey`: key already maps to a block
    /// - `BlockTooLarge`: payload exceeds `MatrixConfig::max_block_size`
    /// - `Storage`: the backing store failed; nothing was committed
    fn insert(&self, key: &str, data: &[u8]) -> Result<BlockNumber, MatrixError>;

    /// Block stored under `key`.
    ///
    /// ## Errors
    ///
    /// - `KeyNotFound`: no block indexed under `key`
    /// - `Integrity`: the block fails re-hashing (when `verify_reads` is on)
    fn get(&self, key: &str) -> Result<Block, MatrixError>;

    /// Block stored at `number`, including materialised empty slots.
    ///
    /// ## Errors
    ///
    /// - `BlockOutOfRange`: `number` is `0` or beyond the grid capacity
    /// - `Integrity`: the block is missing or fails re-hashing
    fn get_by_number(&self, number: BlockNumber) -> Result<Block, MatrixError>;

    /// Block number assigned to `key`.
    fn block_number(&self, key: &str) -> Result<BlockNumber, MatrixError>;

    /// Replace the payload under `key` with the empty sentinel.
    ///
    /// The block keeps its number and position. Exactly the block's row and
    /// column digests are recomputed, and the change is self-checked before
    /// committing.
    ///
    /// ## Errors
    ///
    /// - `KeyNotFound`: no block indexed under `key`
    /// - `Integrity(NonLocalRedaction)`: the self-check failed; nothing was committed
    fn redact(&self, key: &str) -> Result<RedactionReceipt, MatrixError>;

    /// Dense copy of the grid.
    fn snapshot(&self) -> Result<MatrixSnapshot, MatrixError>;

    /// Current metadata record.
    fn info(&self) -> Result<MatrixInfo, MatrixError>;

    /// Full scan; fails with the first discrepancy found.
    fn verify(&self) -> Result<(), MatrixError>;

    /// Full scan collecting every discrepancy.
    fn audit(&self) -> Result<AuditReport, MatrixError>;
}
