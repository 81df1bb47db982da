use crate::domain::errors::KVStoreError;
use crate::ports::outbound::{BatchOperation, KeyValueStore};
use std::collections::HashMap;

/// Matrix records held in a `HashMap`.
///
/// The store has no locking of its own. `BlockMatrix` keeps it behind a
/// `RwLock` and only reaches `put`, `delete` and `atomic_batch_write`
/// through the write guard, so a batch is never interleaved with another
/// writer and readers see either none of it or all of it. Nothing in this
/// store can fail, so a batch always lands in full.
#[derive(Debug, Default, Clone)]
pub struct InMemoryKVStore {
    records: HashMap<Vec<u8>, Vec<u8>>,
}

impl InMemoryKVStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held, counting metadata, index and block records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn apply(&mut self, op: BatchOperation) {
        match op {
            BatchOperation::Put { key, value } => {
                self.records.insert(key, value);
            }
            BatchOperation::Delete { key } => {
                self.records.remove(&key);
            }
        }
    }
}

impl KeyValueStore for InMemoryKVStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        Ok(self.records.get(key).cloned())
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
        self.apply(BatchOperation::put(key.to_vec(), value.to_vec()));
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), KVStoreError> {
        self.apply(BatchOperation::delete(key.to_vec()));
        Ok(())
    }

    /// Applies operations in order; a later write to the same key wins.
    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError> {
        self.records.reserve(operations.len());
        operations.into_iter().for_each(|op| self.apply(op));
        Ok(())
    }

    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        Ok(self.records.contains_key(key))
    }
}
