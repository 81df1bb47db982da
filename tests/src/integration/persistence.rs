//! # Persistence
//!
//! A matrix over `FileBackedKVStore` survives process restarts.

#[cfg(test)]
mod tests {
    use block_matrix::{BlockMatrix, BlockMatrixApi, FileBackedKVStore, IntegrityKind};
    use tempfile::tempdir;

    use crate::integration::{fill, key, payload};

    #[test]
    fn test_matrix_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("matrix.db");

        let info = {
            let matrix = BlockMatrix::open(FileBackedKVStore::open(&path).unwrap()).unwrap();
            fill(&matrix, 1..=12);
            matrix.redact(&key(4)).unwrap();
            matrix.info().unwrap()
        };

        let matrix = BlockMatrix::open(FileBackedKVStore::open(&path).unwrap()).unwrap();

        assert_eq!(matrix.info().unwrap(), info);
        assert_eq!(matrix.get(&key(12)).unwrap().data, payload(12));
        assert!(matrix.get(&key(4)).unwrap().is_empty_sentinel());
        matrix.verify().unwrap();

        assert_eq!(matrix.insert(&key(13), &payload(13)).unwrap(), 13);
        matrix.verify().unwrap();
    }

    #[test]
    fn test_edit_to_file_is_detected_after_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("matrix.db");

        {
            let matrix = BlockMatrix::open(FileBackedKVStore::open(&path).unwrap()).unwrap();
            fill(&matrix, 1..=6);
        }

        // Payloads are stored as hex inside the JSON block record.
        let original = hex::encode(payload(3));
        let forged = hex::encode(b"document body X");
        assert_eq!(original.len(), forged.len());
        let mut bytes = std::fs::read(&path).unwrap();
        let at = bytes
            .windows(original.len())
            .position(|w| w == original.as_bytes())
            .unwrap();
        bytes[at..at + forged.len()].copy_from_slice(forged.as_bytes());
        std::fs::write(&path, bytes).unwrap();

        let matrix = BlockMatrix::open(FileBackedKVStore::open(&path).unwrap()).unwrap();
        let err = matrix.verify().unwrap_err();

        assert_eq!(err.integrity().map(|v| v.kind), Some(IntegrityKind::BlockHashMismatch));
        assert_eq!(matrix.audit().unwrap().tampered_blocks(), vec![3]);
    }
}
