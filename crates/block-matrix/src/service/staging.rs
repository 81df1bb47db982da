//! Write overlay for a single mutating operation.

use std::collections::BTreeMap;

use super::records::RecordSource;
use crate::domain::block::Block;
use crate::domain::errors::MatrixError;
use crate::domain::indexing::BlockNumber;
use crate::domain::metadata::MatrixInfo;
use crate::domain::value_objects::{encode_block_number, RecordKey};
use crate::ports::outbound::{BatchOperation, KeyValueStore};

/// Records written by an operation that is still in progress.
///
/// Reads see staged values first and fall through to the committed store.
/// Nothing reaches the store until `into_operations` is handed to
/// `atomic_batch_write`.
pub(crate) struct StagedWrites<'a, KV: KeyValueStore> {
    committed: &'a KV,
    pending: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl<'a, KV: KeyValueStore> StagedWrites<'a, KV> {
    pub(crate) fn new(committed: &'a KV) -> Self {
        Self {
            committed,
            pending: BTreeMap::new(),
        }
    }

    fn stage(&mut self, key: RecordKey<'_>, value: Vec<u8>) {
        self.pending.insert(key.to_bytes(), value);
    }

    pub(crate) fn put_block(&mut self, number: BlockNumber, block: &Block) -> Result<(), MatrixError> {
        self.stage(RecordKey::Block(number), block.to_bytes()?);
        Ok(())
    }

    pub(crate) fn put_index(&mut self, key: &str, number: BlockNumber) {
        self.stage(RecordKey::Index(key), encode_block_number(number));
    }

    pub(crate) fn put_info(&mut self, info: &MatrixInfo) -> Result<(), MatrixError> {
        self.stage(RecordKey::Info, info.to_bytes()?);
        Ok(())
    }

    /// Number of records staged so far.
    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }

    pub(crate) fn into_operations(self) -> Vec<BatchOperation> {
        self.pending
            .into_iter()
            .map(|(key, value)| BatchOperation::Put { key, value })
            .collect()
    }
}

impl<KV: KeyValueStore> RecordSource for StagedWrites<'_, KV> {
    fn read(&self, key: RecordKey<'_>) -> Result<Option<Vec<u8>>, MatrixError> {
        let encoded = key.to_bytes();
        match self.pending.get(&encoded) {
            Some(value) => Ok(Some(value.clone())),
            None => Ok(self.committed.get(&encoded)?),
        }
    }
}
