//! # Block Matrix Service
//!
//! The `BlockMatrix` handle implementing `BlockMatrixApi`.
//!
//! ## Architecture
//!
//! This service:
//! 1. Owns one backing `KeyValueStore` behind a `parking_lot::RwLock`
//! 2. Runs `insert` and `redact` (and the growth they trigger) under the write lock
//! 3. Stages every mutation and commits it with one `atomic_batch_write`
//! 4. Serves reads, snapshots and audits under the read lock

mod read;
mod records;
mod staging;
mod verify;
mod write;

use parking_lot::RwLock;

use crate::adapters::InMemoryKVStore;
use crate::domain::audit::AuditReport;
use crate::domain::block::Block;
use crate::domain::errors::{IntegrityKind, IntegrityViolation, MatrixError};
use crate::domain::indexing::{column_block_numbers, row_block_numbers, BlockNumber};
use crate::domain::metadata::MatrixInfo;
use crate::domain::redaction::RedactionReceipt;
use crate::domain::snapshot::MatrixSnapshot;
use crate::domain::value_objects::{MatrixConfig, RecordKey};
use crate::ports::inbound::BlockMatrixApi;
use crate::ports::outbound::{BatchOperation, KeyValueStore};

use records::RecordSource;

/// A block matrix bound to one backing store.
///
/// `BlockMatrix<KV>` is `Send + Sync` whenever `KV` is, so a handle can be
/// shared through an `Arc`.
pub struct BlockMatrix<KV: KeyValueStore> {
    store: RwLock<KV>,
    config: MatrixConfig,
}

impl<KV: KeyValueStore> BlockMatrix<KV> {
    /// Open a matrix over `store` with the default configuration.
    pub fn open(store: KV) -> Result<Self, MatrixError> {
        Self::open_with_config(store, MatrixConfig::default())
    }

    /// Open a matrix over `store`.
    ///
    /// Empty storage is initialised with dimension 1, no blocks and one empty
    /// digest per axis. Existing metadata is loaded and checked for shape.
    pub fn open_with_config(mut store: KV, config: MatrixConfig) -> Result<Self, MatrixError> {
        let existing = store.get(&RecordKey::Info.to_bytes())?;

        match existing {
            Some(bytes) => {
                let info = MatrixInfo::from_bytes(&bytes)?;
                if !info.is_well_formed() {
                    tracing::warn!(
                        dimension = info.dimension,
                        block_count = info.block_count,
                        "refusing to open matrix with malformed metadata"
                    );
                    return Err(IntegrityViolation::new(
                        IntegrityKind::MalformedMetadata,
                        info.block_count,
                    )
                    .into());
                }
                tracing::info!(
                    dimension = info.dimension,
                    block_count = info.block_count,
                    "opened block matrix"
                );
            }
            None => {
                let info = MatrixInfo::new();
                store.atomic_batch_write(vec![BatchOperation::put(
                    RecordKey::Info.to_bytes(),
                    info.to_bytes()?,
                )])?;
                tracing::info!("initialised empty block matrix");
            }
        }

        Ok(Self {
            store: RwLock::new(store),
            config,
        })
    }

    pub fn config(&self) -> &MatrixConfig {
        &self.config
    }

    /// Block numbers of row `row` at the current dimension, in digest order.
    pub fn row_block_numbers(&self, row: usize) -> Result<Vec<BlockNumber>, MatrixError> {
        let info = self.store.read().load_info()?;
        Ok(row_block_numbers(row, info.dimension))
    }

    /// Block numbers of column `column` at the current dimension, in digest order.
    pub fn column_block_numbers(&self, column: usize) -> Result<Vec<BlockNumber>, MatrixError> {
        let info = self.store.read().load_info()?;
        Ok(column_block_numbers(column, info.dimension))
    }

    /// Exclusive access to the backing store, bypassing the matrix.
    ///
    /// Writes made through this reference are not digested; `verify` will
    /// report them.
    pub fn store_mut(&mut self) -> &mut KV {
        self.store.get_mut()
    }

    /// Release the backing store.
    pub fn into_inner(self) -> KV {
        self.store.into_inner()
    }
}

impl BlockMatrix<InMemoryKVStore> {
    /// A matrix over a fresh in-memory store.
    pub fn in_memory() -> Result<Self, MatrixError> {
        Self::open(InMemoryKVStore::new())
    }
}

impl<KV: KeyValueStore> BlockMatrixApi for BlockMatrix<KV> {
    fn insert(&self, key: &str, data: &[u8]) -> Result<BlockNumber, MatrixError> {
        self.insert_block(key, data)
    }

    fn get(&self, key: &str) -> Result<Block, MatrixError> {
        self.get_block(key)
    }

    fn get_by_number(&self, number: BlockNumber) -> Result<Block, MatrixError> {
        self.get_block_by_number(number)
    }

    fn block_number(&self, key: &str) -> Result<BlockNumber, MatrixError> {
        self.lookup_block_number(key)
    }

    fn redact(&self, key: &str) -> Result<RedactionReceipt, MatrixError> {
        self.redact_block(key)
    }

    fn snapshot(&self) -> Result<MatrixSnapshot, MatrixError> {
        self.take_snapshot()
    }

    fn info(&self) -> Result<MatrixInfo, MatrixError> {
        self.current_info()
    }

    fn verify(&self) -> Result<(), MatrixError> {
        self.run_verify()
    }

    fn audit(&self) -> Result<AuditReport, MatrixError> {
        self.run_audit()
    }
}
