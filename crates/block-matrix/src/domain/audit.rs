//! # Audit Report
//!
//! Result of a full integrity scan. Unlike `verify`, which stops at the
//! first discrepancy, an audit keeps scanning and records every violation so
//! a tampered block can be pinned to its row and column.

use super::errors::{IntegrityKind, IntegrityViolation};
use super::indexing::BlockNumber;

/// Result of a full integrity scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    /// Dimension recorded in the metadata at scan time.
    pub dimension: usize,
    /// Block count recorded in the metadata at scan time.
    pub block_count: u64,
    /// Block slots re-hashed.
    pub blocks_checked: u64,
    /// Row digests recomputed.
    pub rows_checked: usize,
    /// Column digests recomputed.
    pub columns_checked: usize,
    /// Violations in detection order: blocks, then rows, then columns.
    pub violations: Vec<IntegrityViolation>,
}

impl AuditReport {
    pub fn new(dimension: usize, block_count: u64) -> Self {
        Self {
            dimension,
            block_count,
            ..Self::default()
        }
    }

    /// True when no violation was recorded.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// First violation in detection order.
    pub fn first_violation(&self) -> Option<IntegrityViolation> {
        self.violations.first().copied()
    }

    pub fn record(&mut self, violation: IntegrityViolation) {
        self.violations.push(violation);
    }

    /// Violations of one kind.
    pub fn of_kind(&self, kind: IntegrityKind) -> impl Iterator<Item = &IntegrityViolation> {
        self.violations.iter().filter(move |v| v.kind == kind)
    }

    /// Block numbers whose content no longer matches their hash.
    pub fn tampered_blocks(&self) -> Vec<BlockNumber> {
        self.of_kind(IntegrityKind::BlockHashMismatch)
            .map(|v| v.index)
            .collect()
    }
}
