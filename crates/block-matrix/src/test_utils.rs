//! Shared fixtures for unit tests.

use crate::adapters::InMemoryKVStore;
use crate::domain::errors::KVStoreError;
use crate::ports::inbound::BlockMatrixApi;
use crate::ports::outbound::{BatchOperation, KeyValueStore};
use crate::service::BlockMatrix;

/// In-memory store whose writes can be switched to fail.
#[derive(Debug, Default)]
pub struct FlakyKVStore {
    pub inner: InMemoryKVStore,
    pub fail_writes: bool,
}

impl FlakyKVStore {
    fn check(&self) -> Result<(), KVStoreError> {
        if self.fail_writes {
            return Err(KVStoreError::IOError {
                message: "injected write failure".to_string(),
            });
        }
        Ok(())
    }
}

impl KeyValueStore for FlakyKVStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        self.inner.get(key)
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
        self.check()?;
        self.inner.put(key, value)
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), KVStoreError> {
        self.check()?;
        self.inner.delete(key)
    }

    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        self.inner.exists(key)
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError> {
        self.check()?;
        self.inner.atomic_batch_write(operations)
    }
}

pub fn key(i: u64) -> String {
    format!("key-{i}")
}

pub fn payload(i: u64) -> Vec<u8> {
    format!("payload #{i}").into_bytes()
}

/// In-memory matrix holding `count` blocks `key-1 ..= key-count`.
pub fn matrix_with(count: u64) -> BlockMatrix<InMemoryKVStore> {
    let matrix = BlockMatrix::in_memory().unwrap();
    for i in 1..=count {
        matrix.insert(&key(i), &payload(i)).unwrap();
    }
    matrix
}
