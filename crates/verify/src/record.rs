//! Per-block explorer snapshots and verification reports.

use crate::verifier::ComparisonResult;
use serde::{Deserialize, Serialize};

/// One block's worth of explorer data, as handed over by the retrieval
/// collaborator.
///
/// Field names follow the explorer's JSON: `hash` and `mrkl_root` are the
/// published reference values, `tx` the transaction hashes in block order.
/// All hex is display (big-endian) order except `raw_header`, which stays in
/// protocol serialization order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockRecord {
    /// Block height on the chain.
    pub height: u64,
    /// 160 hex characters of serialized header.
    pub raw_header: String,
    /// Published block hash.
    pub hash: String,
    /// Published transaction hashes, in block order.
    pub tx: Vec<String>,
    /// Published merkle root.
    pub mrkl_root: String,
}

/// The outcome of verifying one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockReport {
    /// Height of the verified block.
    pub height: u64,
    /// Recomputed header hash vs the published block hash.
    pub block_hash: ComparisonResult,
    /// Recomputed merkle root vs the published root.
    pub merkle_root: ComparisonResult,
}

impl BlockReport {
    /// True when both recomputed values matched the published ones.
    pub fn is_clean(&self) -> bool {
        self.block_hash.is_match() && self.merkle_root.is_match()
    }
}
