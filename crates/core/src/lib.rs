//! Core hashing and endianness primitives for blockaudit.
//!
//! This crate provides the deterministic machinery for recomputing block
//! identifiers:
//! - Byte-order conversion between display (big-endian) and protocol
//!   (little-endian) hex
//! - Double-SHA-256 hashing
//! - Merkle root reduction over transaction hashes
//! - Raw block header parsing and hashing
//!
//! Everything here is pure and stateless: raw hex in, hashes out. Fetching
//! block data and presenting results belong to the callers.

pub mod endian;
pub mod hash;
pub mod header;
pub mod merkle;

// Re-export commonly used items at the crate root
pub use endian::{reverse_byte_order, HexError};
pub use hash::{double_hash_hex, sha256d, Hash, H256};
pub use header::{HeaderError, RawHeader, HEADER_SIZE};
pub use merkle::{merkle_root, merkle_root_hex, MerkleError};
