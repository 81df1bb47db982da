//! # Redaction
//!
//! Redaction voids a block's payload with the empty sentinel while keeping
//! its block number and grid position. Only the digests of that block's row
//! and column may change; anything else means the metadata was modified
//! concurrently or the digest maintenance is wrong.

use serde::{Deserialize, Serialize};

use super::digest::{Axis, Hash};
use super::errors::{IntegrityKind, IntegrityViolation};
use super::indexing::{BlockNumber, GridPosition};
use super::metadata::MatrixInfo;

/// Outcome of a successful redaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionReceipt {
    pub block_number: BlockNumber,
    pub position: GridPosition,
    /// Hash of the payload that was voided.
    pub previous_hash: Hash,
    pub row_changed: bool,
    pub column_changed: bool,
}

/// Whether line `expected` changed on `axis`. Any other changed line is a
/// violation.
fn check_axis(
    before: &MatrixInfo,
    after: &MatrixInfo,
    axis: Axis,
    expected: usize,
) -> Result<bool, IntegrityViolation> {
    let changed = before.changed_lines(after, axis);
    match changed.as_slice() {
        [] => Ok(false),
        [index] if *index == expected => Ok(true),
        [index, ..] => {
            let stray = changed
                .iter()
                .copied()
                .find(|i| *i != expected)
                .unwrap_or(*index);
            Err(IntegrityViolation::new(
                IntegrityKind::NonLocalRedaction,
                stray as u64,
            ))
        }
    }
}

/// Confirm that at most the redacted block's row and column digests changed.
///
/// Returns `(row_changed, column_changed)`.
pub fn check_redaction_locality(
    before: &MatrixInfo,
    after: &MatrixInfo,
    position: GridPosition,
) -> Result<(bool, bool), IntegrityViolation> {
    if before.dimension != after.dimension || before.block_count != after.block_count {
        return Err(IntegrityViolation::new(
            IntegrityKind::NonLocalRedaction,
            after.block_count,
        ));
    }
    let row_changed = check_axis(before, after, Axis::Row, position.row)?;
    let column_changed = check_axis(before, after, Axis::Column, position.column)?;
    Ok((row_changed, column_changed))
}
