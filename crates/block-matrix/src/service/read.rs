//! # Read Path
//!
//! Lookups and snapshots, all under the read lock.

use super::records::RecordSource;
use super::BlockMatrix;
use crate::domain::block::Block;
use crate::domain::errors::{IntegrityKind, IntegrityViolation, MatrixError};
use crate::domain::indexing::{block_number_at, BlockNumber, GridPosition};
use crate::domain::metadata::MatrixInfo;
use crate::domain::snapshot::{Cell, MatrixSnapshot};
use crate::ports::outbound::KeyValueStore;

impl<KV: KeyValueStore> BlockMatrix<KV> {
    /// Load block `number`, re-hashing it when `verify_reads` is on.
    fn read_block(&self, store: &KV, number: BlockNumber) -> Result<Block, MatrixError> {
        let block = store
            .load_block(number)?
            .ok_or_else(|| IntegrityViolation::new(IntegrityKind::MissingBlock, number))?;

        if self.config.verify_reads && !block.is_intact() {
            tracing::warn!(number, "block content does not match its stored hash");
            return Err(IntegrityViolation::new(IntegrityKind::BlockHashMismatch, number).into());
        }
        Ok(block)
    }

    fn resolve_key(store: &KV, key: &str) -> Result<BlockNumber, MatrixError> {
        store
            .load_block_number(key)?
            .ok_or_else(|| MatrixError::KeyNotFound {
                key: key.to_string(),
            })
    }

    pub(super) fn get_block(&self, key: &str) -> Result<Block, MatrixError> {
        let store = self.store.read();
        let number = Self::resolve_key(&store, key)?;
        self.read_block(&store, number)
    }

    pub(super) fn get_block_by_number(&self, number: BlockNumber) -> Result<Block, MatrixError> {
        let store = self.store.read();
        let capacity = store.load_info()?.capacity();
        if number == 0 || number > capacity {
            return Err(MatrixError::BlockOutOfRange { number, capacity });
        }
        self.read_block(&store, number)
    }

    pub(super) fn lookup_block_number(&self, key: &str) -> Result<BlockNumber, MatrixError> {
        let store = self.store.read();
        Self::resolve_key(&store, key)
    }

    pub(super) fn current_info(&self) -> Result<MatrixInfo, MatrixError> {
        self.store.read().load_info()
    }

    pub(super) fn take_snapshot(&self) -> Result<MatrixSnapshot, MatrixError> {
        let store = self.store.read();
        let info = store.load_info()?;

        let mut cells = Vec::with_capacity(info.dimension);
        for row in 0..info.dimension {
            let mut line = Vec::with_capacity(info.dimension);
            for column in 0..info.dimension {
                let cell = match block_number_at(GridPosition::new(row, column)) {
                    None => Cell::Diagonal,
                    Some(number) => Cell::Block(store.load_block(number)?.ok_or_else(|| {
                        IntegrityViolation::new(IntegrityKind::MissingBlock, number)
                    })?),
                };
                line.push(cell);
            }
            cells.push(line);
        }

        Ok(MatrixSnapshot {
            dimension: info.dimension,
            block_count: info.block_count,
            cells,
        })
    }
}
