//! Typed access to the persisted records.
//!
//! Implemented for every `KeyValueStore` and for `StagedWrites`, so the
//! write path reads its own uncommitted records through the same code the
//! read path uses.

use crate::domain::block::Block;
use crate::domain::errors::{KVStoreError, MatrixError};
use crate::domain::indexing::BlockNumber;
use crate::domain::metadata::MatrixInfo;
use crate::domain::value_objects::{decode_block_number, RecordKey};
use crate::ports::outbound::KeyValueStore;

pub(crate) trait RecordSource {
    fn read(&self, key: RecordKey<'_>) -> Result<Option<Vec<u8>>, MatrixError>;

    /// The metadata record. Its absence means the store was emptied under an
    /// open handle.
    fn load_info(&self) -> Result<MatrixInfo, MatrixError> {
        let bytes = self
            .read(RecordKey::Info)?
            .ok_or(MatrixError::Storage(KVStoreError::NotFound))?;
        MatrixInfo::from_bytes(&bytes)
    }

    fn load_block(&self, number: BlockNumber) -> Result<Option<Block>, MatrixError> {
        self.read(RecordKey::Block(number))?
            .map(|bytes| Block::from_bytes(&bytes))
            .transpose()
    }

    /// Index record for a caller key. Reserved keys never have one, so they
    /// resolve to `None` without touching the records they would alias.
    fn load_block_number(&self, key: &str) -> Result<Option<BlockNumber>, MatrixError> {
        if RecordKey::validate_caller_key(key).is_err() {
            return Ok(None);
        }
        self.read(RecordKey::Index(key))?
            .map(|bytes| decode_block_number(&bytes))
            .transpose()
    }
}

impl<KV: KeyValueStore> RecordSource for KV {
    fn read(&self, key: RecordKey<'_>) -> Result<Option<Vec<u8>>, MatrixError> {
        Ok(self.get(&key.to_bytes())?)
    }
}
