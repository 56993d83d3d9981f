//! Block integrity verification for blockaudit.
//!
//! Recomputes a block's hash from its raw header and its merkle root from
//! its transaction list, then compares both against the reference values an
//! external explorer published. Retrieval of that data and presentation of
//! the outcome are the caller's concern; this crate only ever sees in-memory
//! records.

pub mod record;
pub mod verifier;

pub use record::{BlockRecord, BlockReport};
pub use verifier::{verify, verify_batch, verify_block, ComparisonResult, VerifyError};
