//! Raw block header parsing and hashing.
//!
//! An 80-byte header serializes version ‖ prev-block ‖ merkle-root ‖ time ‖
//! bits ‖ nonce, all little-endian. Its double-SHA-256 digest, re-expressed
//! in display order, is the block hash explorers publish.

use crate::endian::HexError;
use crate::hash::{sha256d, Hash};
use thiserror::Error;

/// Serialized header size in bytes.
pub const HEADER_SIZE: usize = 80;

/// Errors raised while parsing a serialized header.
#[derive(Debug, Error, PartialEq)]
pub enum HeaderError {
    #[error("invalid block header size: expected 80 bytes, got {0}")]
    InvalidSize(usize),

    #[error(transparent)]
    Hex(#[from] HexError),
}

/// A raw serialized block header, held exactly as supplied in protocol
/// byte order.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RawHeader([u8; HEADER_SIZE]);

impl RawHeader {
    /// Parse a header from 160 hex characters.
    pub fn from_hex(s: &str) -> Result<Self, HeaderError> {
        let bytes = hex::decode(s).map_err(HexError::from)?;
        if bytes.len() != HEADER_SIZE {
            return Err(HeaderError::InvalidSize(bytes.len()));
        }
        let mut arr = [0u8; HEADER_SIZE];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// Get the underlying serialized bytes.
    pub fn as_bytes(&self) -> &[u8; HEADER_SIZE] {
        &self.0
    }

    /// The canonical block hash.
    ///
    /// The header is double-hashed exactly as supplied, with no prior byte
    /// reordering, and the digest is flipped to display order.
    pub fn block_hash(&self) -> Hash {
        Hash::from_bytes(sha256d(&self.0)).reversed()
    }

    /// Protocol version word.
    pub fn version(&self) -> u32 {
        self.word_at(0)
    }

    /// Hash of the previous block, in display order.
    pub fn prev_block_hash(&self) -> Hash {
        self.hash_at(4)
    }

    /// Merkle root the block commits to, in display order.
    pub fn merkle_root(&self) -> Hash {
        self.hash_at(36)
    }

    /// Block timestamp (Unix seconds).
    pub fn time(&self) -> u32 {
        self.word_at(68)
    }

    /// Compact difficulty target.
    pub fn bits(&self) -> u32 {
        self.word_at(72)
    }

    /// Miner nonce.
    pub fn nonce(&self) -> u32 {
        self.word_at(76)
    }

    fn word_at(&self, offset: usize) -> u32 {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(&self.0[offset..offset + 4]);
        u32::from_le_bytes(buf)
    }

    fn hash_at(&self, offset: usize) -> Hash {
        let mut buf = [0u8; 32];
        buf.copy_from_slice(&self.0[offset..offset + 32]);
        Hash::from_bytes(buf).reversed()
    }
}

impl std::fmt::Debug for RawHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RawHeader({})", self.block_hash())
    }
}
