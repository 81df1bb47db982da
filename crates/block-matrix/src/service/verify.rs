//! # Integrity Verifier
//!
//! Full scan of every block slot and every row and column digest.
//!
//! Digests are recomputed from re-hashed block content rather than the
//! stored hashes, so a block whose bytes were altered out of band shows up
//! as a block violation plus one row and one column violation.

use super::records::RecordSource;
use super::BlockMatrix;
use crate::domain::audit::AuditReport;
use crate::domain::block::Block;
use crate::domain::digest::{compute_digest, Axis, Hash};
use crate::domain::errors::{IntegrityKind, IntegrityViolation, MatrixError};
use crate::domain::value_objects::RecordKey;
use crate::ports::outbound::KeyValueStore;

impl<KV: KeyValueStore> BlockMatrix<KV> {
    pub(super) fn run_audit(&self) -> Result<AuditReport, MatrixError> {
        let store = self.store.read();
        let info = store.load_info()?;
        let mut report = AuditReport::new(info.dimension, info.block_count);

        if !info.is_well_formed() {
            report.record(IntegrityViolation::new(
                IntegrityKind::MalformedMetadata,
                info.block_count,
            ));
            tracing::warn!(
                dimension = info.dimension,
                block_count = info.block_count,
                "metadata is malformed, skipping digest checks"
            );
            return Ok(report);
        }

        // Re-hashed content per slot, indexed by `number - 1`. `None` when the
        // record is missing or undecodable.
        let mut content: Vec<Option<Hash>> = Vec::new();
        for number in 1..=info.capacity() {
            report.blocks_checked += 1;
            let Some(bytes) = store.read(RecordKey::Block(number))? else {
                report.record(IntegrityViolation::new(IntegrityKind::MissingBlock, number));
                content.push(None);
                continue;
            };
            match Block::from_bytes(&bytes) {
                Ok(block) => {
                    let hash = block.compute_hash();
                    if hash != block.hash {
                        report.record(IntegrityViolation::new(
                            IntegrityKind::BlockHashMismatch,
                            number,
                        ));
                    }
                    content.push(Some(hash));
                }
                Err(_) => {
                    report.record(IntegrityViolation::new(
                        IntegrityKind::BlockHashMismatch,
                        number,
                    ));
                    content.push(None);
                }
            }
        }

        for axis in Axis::ALL {
            for index in 0..info.dimension {
                let recomputed =
                    compute_digest(axis, index, info.dimension, info.block_count, |number| {
                        content
                            .get((number - 1) as usize)
                            .copied()
                            .flatten()
                            .ok_or(number)
                    });
                let matches = matches!(
                    (recomputed, info.digest(axis, index)),
                    (Ok(digest), Some(stored)) if digest == *stored
                );
                if !matches {
                    report.record(IntegrityViolation::new(
                        IntegrityKind::digest_mismatch(axis),
                        index as u64,
                    ));
                }
                match axis {
                    Axis::Row => report.rows_checked += 1,
                    Axis::Column => report.columns_checked += 1,
                }
            }
        }

        if report.is_clean() {
            tracing::debug!(
                dimension = info.dimension,
                block_count = info.block_count,
                "audit clean"
            );
        } else {
            tracing::warn!(
                violations = report.violations.len(),
                tampered = ?report.tampered_blocks(),
                "audit found integrity violations"
            );
        }
        Ok(report)
    }

    pub(super) fn run_verify(&self) -> Result<(), MatrixError> {
        match self.run_audit()?.first_violation() {
            Some(violation) => Err(violation.into()),
            None => Ok(()),
        }
    }
}
