use crate::domain::errors::KVStoreError;
use crate::ports::outbound::{BatchOperation, KeyValueStore};
use std::collections::HashMap;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// File-backed key-value store.
///
/// Keeps the whole store in memory and rewrites a single binary file on
/// every mutation. Every save goes through a temp file plus rename, so a
/// batch is either fully on disk or not at all.
#[derive(Debug)]
pub struct FileBackedKVStore {
    data: HashMap<Vec<u8>, Vec<u8>>,
    path: PathBuf,
}

impl FileBackedKVStore {
    /// Open the store at `path`, loading any existing records.
    ///
    /// A missing file yields an empty store. A file that cannot be parsed is
    /// reported as corruption rather than silently discarded.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, KVStoreError> {
        let path = path.as_ref().to_path_buf();

        let data = match std::fs::File::open(&path) {
            Ok(mut file) => {
                let mut bytes = Vec::new();
                file.read_to_end(&mut bytes)?;
                let data = Self::decode(&bytes)?;
                tracing::info!(
                    path = %path.display(),
                    bytes = bytes.len(),
                    records = data.len(),
                    "loaded block matrix store"
                );
                data
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no existing store file, starting empty");
                HashMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self { data, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Binary format: `[key_len:u32 LE][key][value_len:u32 LE][value]...`
    fn decode(bytes: &[u8]) -> Result<HashMap<Vec<u8>, Vec<u8>>, KVStoreError> {
        let mut data = HashMap::new();
        let mut cursor = 0;

        while cursor < bytes.len() {
            let key = Self::read_field(bytes, &mut cursor)?;
            let value = Self::read_field(bytes, &mut cursor)?;
            data.insert(key, value);
        }

        Ok(data)
    }

    fn read_field(bytes: &[u8], cursor: &mut usize) -> Result<Vec<u8>, KVStoreError> {
        let truncated = |at: usize| KVStoreError::CorruptionError {
            message: format!("store file truncated at byte {at}"),
        };

        let len_end = *cursor + 4;
        let len_bytes: [u8; 4] = bytes
            .get(*cursor..len_end)
            .and_then(|b| b.try_into().ok())
            .ok_or_else(|| truncated(*cursor))?;
        let len = u32::from_le_bytes(len_bytes) as usize;

        let field = bytes
            .get(len_end..len_end + len)
            .ok_or_else(|| truncated(len_end))?
            .to_vec();
        *cursor = len_end + len;
        Ok(field)
    }

    fn encode(data: &HashMap<Vec<u8>, Vec<u8>>) -> Vec<u8> {
        let mut bytes = Vec::new();
        for (key, value) in data {
            bytes.extend_from_slice(&(key.len() as u32).to_le_bytes());
            bytes.extend_from_slice(key);
            bytes.extend_from_slice(&(value.len() as u32).to_le_bytes());
            bytes.extend_from_slice(value);
        }
        bytes
    }

    fn save(&self, data: &HashMap<Vec<u8>, Vec<u8>>) -> Result<(), KVStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let bytes = Self::encode(data);

        // Write atomically via temp file
        let temp_path = self.path.with_extension("tmp");
        let mut file = std::fs::File::create(&temp_path)?;
        file.write_all(&bytes)?;
        file.sync_all()?;
        std::fs::rename(&temp_path, &self.path)?;

        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "store file saved");
        Ok(())
    }

    /// Persist `next` and adopt it only once it is on disk.
    fn commit(&mut self, next: HashMap<Vec<u8>, Vec<u8>>) -> Result<(), KVStoreError> {
        self.save(&next)?;
        self.data = next;
        Ok(())
    }
}

impl KeyValueStore for FileBackedKVStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
        let mut next = self.data.clone();
        next.insert(key.to_vec(), value.to_vec());
        self.commit(next)
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), KVStoreError> {
        let mut next = self.data.clone();
        next.remove(key);
        self.commit(next)
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError> {
        let mut next = self.data.clone();
        for op in operations {
            match op {
                BatchOperation::Put { key, value } => {
                    next.insert(key, value);
                }
                BatchOperation::Delete { key } => {
                    next.remove(&key);
                }
            }
        }
        self.commit(next)
    }

    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        Ok(self.data.contains_key(key))
    }
}
