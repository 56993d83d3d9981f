//! Hash recomputation and comparison against reference values.

use crate::record::{BlockRecord, BlockReport};
use blockaudit_core::{merkle_root_hex, HeaderError, MerkleError, RawHeader};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that abort verification before any comparison happens.
///
/// Malformed input is fatal for the affected block: a partial or garbage
/// hash must never be produced, let alone compared. A mismatch is not an
/// error; see [`ComparisonResult`].
#[derive(Debug, Error, PartialEq)]
pub enum VerifyError {
    #[error("header error: {0}")]
    Header(#[from] HeaderError),

    #[error("merkle error: {0}")]
    Merkle(#[from] MerkleError),
}

/// Result type for verification operations.
pub type Result<T> = std::result::Result<T, VerifyError>;

/// The outcome of comparing a recomputed value against a published one.
///
/// A mismatch is a reportable result rather than a fault: it flags bad
/// upstream data or broken hashing, and only the caller can decide whether
/// to abort or keep reporting. There is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ComparisonResult {
    Match,
    Mismatch { expected: String, actual: String },
}

impl ComparisonResult {
    /// True for [`ComparisonResult::Match`].
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match)
    }
}

/// Compare an expected reference value against a computed one,
/// case-insensitively. Both sides are normalized to lowercase first.
pub fn verify(expected: &str, actual: &str) -> ComparisonResult {
    let expected = expected.to_ascii_lowercase();
    let actual = actual.to_ascii_lowercase();
    if expected == actual {
        ComparisonResult::Match
    } else {
        ComparisonResult::Mismatch { expected, actual }
    }
}

/// Recompute one block's hash and merkle root and compare both against the
/// record's published values.
pub fn verify_block(record: &BlockRecord) -> Result<BlockReport> {
    let header = RawHeader::from_hex(&record.raw_header)?;
    let block_hash = header.block_hash().to_hex();
    let merkle_root = merkle_root_hex(&record.tx)?;

    debug!(
        height = record.height,
        %block_hash,
        tx_count = record.tx.len(),
        "recomputed block hashes"
    );

    let report = BlockReport {
        height: record.height,
        block_hash: verify(&record.hash, &block_hash),
        merkle_root: verify(&record.mrkl_root, &merkle_root),
    };

    if !report.is_clean() {
        warn!(
            height = record.height,
            "recomputed hashes do not match explorer values"
        );
    }

    Ok(report)
}

/// Verify a batch of blocks, one report per record.
///
/// A mismatch never stops the batch; every block is independent and gets
/// reported. Malformed input in any record does stop it, per the fail-fast
/// policy on hex and precondition errors.
pub fn verify_batch(records: &[BlockRecord]) -> Result<Vec<BlockReport>> {
    records.iter().map(verify_block).collect()
}
