//! # Lifecycle
//!
//! Growth, digest locality and redaction over long insert histories.

#[cfg(test)]
mod tests {
    use block_matrix::{
        capacity, locate, Axis, BlockMatrix, BlockMatrixApi, Cell, GridPosition, MatrixInfo,
        EMPTY_DIGEST,
    };
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::integration::{fill, key, payload};

    fn changed(before: &MatrixInfo, after: &MatrixInfo) -> (Vec<usize>, Vec<usize>) {
        let mut before = before.clone();
        before.extend_to(after.dimension);
        (
            before.changed_lines(after, Axis::Row),
            before.changed_lines(after, Axis::Column),
        )
    }

    #[test]
    fn test_membership_scenario() {
        let matrix = BlockMatrix::in_memory().unwrap();

        fill(&matrix, 1..=5);
        assert_eq!(matrix.row_block_numbers(2).unwrap(), vec![4, 6]);
        assert_eq!(matrix.column_block_numbers(1).unwrap(), vec![1, 6]);

        fill(&matrix, 6..=25);
        assert_eq!(matrix.row_block_numbers(0).unwrap(), vec![1, 3, 7, 13, 21]);
        assert_eq!(matrix.column_block_numbers(3).unwrap(), vec![7, 9, 11, 20, 28]);

        matrix.verify().unwrap();
    }

    #[test]
    fn test_every_block_is_where_locate_says() {
        let matrix = BlockMatrix::in_memory().unwrap();
        fill(&matrix, 1..=40);

        let snapshot = matrix.snapshot().unwrap();
        for number in 1..=40 {
            let position = locate(number).unwrap();
            let cell = snapshot.cell(position).unwrap();
            assert_eq!(cell.block().unwrap().data, payload(number));
        }
        for i in 0..snapshot.dimension {
            assert_eq!(
                snapshot.cell(GridPosition::new(i, i)),
                Some(&Cell::Diagonal)
            );
        }
    }

    #[test]
    fn test_random_history_keeps_every_invariant() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        let matrix = BlockMatrix::in_memory().unwrap();
        let mut inserted = 0u64;

        for _ in 0..150 {
            let before = matrix.info().unwrap();

            if inserted > 0 && rng.gen_bool(0.25) {
                let target = rng.gen_range(1..=inserted);
                let receipt = matrix.redact(&key(target)).unwrap();
                let after = matrix.info().unwrap();
                let (rows, cols) = changed(&before, &after);

                let expected_rows: Vec<_> =
                    receipt.row_changed.then_some(receipt.position.row).into_iter().collect();
                let expected_cols: Vec<_> = receipt
                    .column_changed
                    .then_some(receipt.position.column)
                    .into_iter()
                    .collect();
                assert_eq!(rows, expected_rows);
                assert_eq!(cols, expected_cols);
                assert!(matrix.get(&key(target)).unwrap().is_empty_sentinel());
            } else {
                inserted += 1;
                let len = rng.gen_range(0..64);
                let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
                let number = matrix.insert(&key(inserted), &data).unwrap();
                let after = matrix.info().unwrap();
                let position = locate(number).unwrap();

                assert_eq!(number, inserted);
                assert_eq!(changed(&before, &after), (vec![position.row], vec![position.column]));
                assert_eq!(matrix.get(&key(inserted)).unwrap().data, data);
            }

            let info = matrix.info().unwrap();
            assert!(info.dimension >= before.dimension);
            assert!(capacity(info.dimension) >= info.block_count);
            assert!(info.dimension == 1 || capacity(info.dimension - 1) < info.block_count);
        }

        matrix.verify().unwrap();
    }

    #[test]
    fn test_fresh_lines_start_at_empty_digest() {
        let matrix = BlockMatrix::in_memory().unwrap();
        fill(&matrix, 1..=7);

        // block 7 opened shell 3; row 3 holds no assigned block yet
        let info = matrix.info().unwrap();
        assert_eq!(info.dimension, 4);
        assert_eq!(info.rows[3], EMPTY_DIGEST);
        assert_ne!(info.cols[3], EMPTY_DIGEST);
    }

    #[test]
    fn test_redacted_key_still_resolves() {
        let matrix = BlockMatrix::in_memory().unwrap();
        fill(&matrix, 1..=3);

        let receipt = matrix.redact(&key(2)).unwrap();

        assert_eq!(matrix.block_number(&key(2)).unwrap(), receipt.block_number);
        assert!(matrix.insert(&key(2), b"again").is_err());
        matrix.verify().unwrap();
    }
}
