//! Double-SHA-256 hashing utilities.

use crate::endian::HexError;
use sha2::{Digest, Sha256};
use std::fmt;

/// A named alias for a 32-byte(u8) array, used to represent a 256-bit hash.
pub type H256 = [u8; 32];

/// A 32-byte hash held in display (big-endian) byte order.
///
/// Renders as 64 lowercase hex characters, the form block explorers publish.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash(pub H256);

impl Hash {
    /// Create a new Hash from raw bytes.
    pub fn from_bytes(bytes: H256) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes.
    pub fn as_bytes(&self) -> &H256 {
        &self.0
    }

    /// Convert to a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from a hex string, requiring exactly 64 hex characters.
    pub fn from_hex(s: &str) -> Result<Self, HexError> {
        if s.len() != 64 {
            return Err(HexError::Length {
                expected: 64,
                actual: s.len(),
            });
        }
        let bytes = hex::decode(s)?;
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// The same value with its byte order flipped, converting between
    /// display and protocol representations.
    pub fn reversed(&self) -> Self {
        let mut bytes = self.0;
        bytes.reverse();
        Self(bytes)
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", &self.to_hex()[..8])
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<H256> for Hash {
    fn from(bytes: H256) -> Self {
        Self(bytes)
    }
}

impl From<Hash> for H256 {
    fn from(hash: Hash) -> Self {
        hash.0
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Compute `SHA256(SHA256(data))` over raw bytes.
pub fn sha256d(data: &[u8]) -> H256 {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}

/// Double-hash a hex-encoded payload.
///
/// Fails fast on malformed hex so a garbage digest is never produced. The
/// raw digest is returned as-is; callers choose encoding and byte order.
pub fn double_hash_hex(hex_str: &str) -> Result<H256, HexError> {
    let bytes = hex::decode(hex_str)?;
    Ok(sha256d(&bytes))
}
