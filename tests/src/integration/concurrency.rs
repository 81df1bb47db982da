//! # Concurrency
//!
//! One handle shared across threads: writers are serialised, readers never
//! observe a half-applied insert.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use block_matrix::{capacity, BlockMatrix, BlockMatrixApi};

    use crate::integration::{fill, key, payload};

    const WRITERS: u64 = 4;
    const PER_WRITER: u64 = 25;

    #[test]
    fn test_parallel_writers_get_distinct_numbers() {
        let matrix = Arc::new(BlockMatrix::in_memory().unwrap());

        let handles: Vec<_> = (0..WRITERS)
            .map(|w| {
                let matrix = Arc::clone(&matrix);
                thread::spawn(move || {
                    let first = w * PER_WRITER + 1;
                    fill(&matrix, first..=first + PER_WRITER - 1);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let total = WRITERS * PER_WRITER;
        let numbers: HashSet<_> = (1..=total)
            .map(|i| matrix.block_number(&key(i)).unwrap())
            .collect();

        assert_eq!(numbers.len() as u64, total);
        assert!(numbers.iter().all(|n| (1..=total).contains(n)));
        assert_eq!(matrix.info().unwrap().block_count, total);
        matrix.verify().unwrap();
    }

    #[test]
    fn test_readers_see_consistent_state_during_writes() {
        let matrix = Arc::new(BlockMatrix::in_memory().unwrap());
        fill(&matrix, 1..=3);

        let writer = {
            let matrix = Arc::clone(&matrix);
            thread::spawn(move || {
                fill(&matrix, 4..=60);
                for i in (1..=60).step_by(7) {
                    matrix.redact(&key(i)).unwrap();
                }
            })
        };

        let readers: Vec<_> = (0..3)
            .map(|_| {
                let matrix = Arc::clone(&matrix);
                thread::spawn(move || {
                    for _ in 0..25 {
                        let info = matrix.info().unwrap();
                        assert!(capacity(info.dimension) >= info.block_count);
                        assert_eq!(info.rows.len(), info.dimension);

                        let block = matrix.get(&key(2)).unwrap();
                        assert_eq!(block.data, payload(2));

                        let report = matrix.audit().unwrap();
                        assert!(report.is_clean(), "{:?}", report.violations);
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
        matrix.verify().unwrap();
    }
}
