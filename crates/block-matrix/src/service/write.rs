//! # Write Path
//!
//! `insert` and `redact`. Both hold the write lock for the whole
//! read-modify-write of the metadata and commit through one batch.

use super::records::RecordSource;
use super::staging::StagedWrites;
use super::BlockMatrix;
use crate::domain::block::Block;
use crate::domain::digest::{compute_digest, Axis};
use crate::domain::errors::{IntegrityKind, IntegrityViolation, MatrixError};
use crate::domain::indexing::{
    locate, shell_block_numbers, smallest_valid_dimension, BlockNumber, GridPosition,
};
use crate::domain::metadata::MatrixInfo;
use crate::domain::redaction::{check_redaction_locality, RedactionReceipt};
use crate::domain::value_objects::RecordKey;
use crate::ports::outbound::KeyValueStore;

/// Grid position of an assigned block number.
pub(super) fn position_of(number: BlockNumber) -> Result<GridPosition, MatrixError> {
    locate(number)
        .ok_or_else(|| IntegrityViolation::new(IntegrityKind::MalformedMetadata, number).into())
}

/// Recompute the row and column digests through `position` from the stored
/// block hashes.
fn refresh_digests<S: RecordSource>(
    source: &S,
    info: &mut MatrixInfo,
    position: GridPosition,
) -> Result<(), MatrixError> {
    for (axis, index) in [(Axis::Row, position.row), (Axis::Column, position.column)] {
        let digest = compute_digest(axis, index, info.dimension, info.block_count, |number| {
            source
                .load_block(number)?
                .map(|block| block.hash)
                .ok_or_else(|| {
                    MatrixError::from(IntegrityViolation::new(IntegrityKind::MissingBlock, number))
                })
        })?;
        info.set_digest(axis, index, digest)?;
    }
    Ok(())
}

impl<KV: KeyValueStore> BlockMatrix<KV> {
    pub(super) fn insert_block(&self, key: &str, data: &[u8]) -> Result<BlockNumber, MatrixError> {
        RecordKey::validate_caller_key(key)?;
        if data.len() > self.config.max_block_size {
            return Err(MatrixError::BlockTooLarge {
                size: data.len(),
                max_size: self.config.max_block_size,
            });
        }

        let mut store = self.store.write();
        let mut staged = StagedWrites::new(&*store);

        if staged.load_block_number(key)?.is_some() {
            return Err(MatrixError::DuplicateKey {
                key: key.to_string(),
            });
        }

        let mut info = staged.load_info()?;
        let number = info.block_count + 1;

        let dimension = smallest_valid_dimension(number);
        if dimension > info.dimension {
            let shell = shell_block_numbers(info.dimension, dimension);
            tracing::info!(
                from = info.dimension,
                to = dimension,
                first = shell.start(),
                last = shell.end(),
                "growing block matrix"
            );
            let empty = Block::empty();
            for slot in shell {
                staged.put_block(slot, &empty)?;
            }
            info.extend_to(dimension);
        }

        let block = Block::new(data.to_vec());
        staged.put_index(key, number);
        staged.put_block(number, &block)?;
        info.block_count = number;

        let position = position_of(number)?;
        refresh_digests(&staged, &mut info, position)?;
        staged.put_info(&info)?;

        let records = staged.len();
        let operations = staged.into_operations();
        store.atomic_batch_write(operations)?;

        tracing::debug!(
            key,
            number,
            row = position.row,
            column = position.column,
            records,
            "inserted block"
        );
        Ok(number)
    }

    pub(super) fn redact_block(&self, key: &str) -> Result<RedactionReceipt, MatrixError> {
        let mut store = self.store.write();
        let mut staged = StagedWrites::new(&*store);

        let number = staged
            .load_block_number(key)?
            .ok_or_else(|| MatrixError::KeyNotFound {
                key: key.to_string(),
            })?;
        let before = staged.load_info()?;
        let position = position_of(number)?;
        let previous = staged
            .load_block(number)?
            .ok_or_else(|| IntegrityViolation::new(IntegrityKind::MissingBlock, number))?;

        staged.put_block(number, &Block::empty())?;
        let mut after = before.clone();
        refresh_digests(&staged, &mut after, position)?;

        let (row_changed, column_changed) = check_redaction_locality(&before, &after, position)
            .map_err(|violation| {
                tracing::warn!(key, number, %violation, "redaction self-check failed");
                violation
            })?;

        staged.put_info(&after)?;
        let operations = staged.into_operations();
        store.atomic_batch_write(operations)?;

        tracing::debug!(
            key,
            number,
            row = position.row,
            column = position.column,
            row_changed,
            column_changed,
            "redacted block"
        );
        Ok(RedactionReceipt {
            block_number: number,
            position,
            previous_hash: previous.hash,
            row_changed,
            column_changed,
        })
    }
}
