//! Byte-order conversion for hex-encoded values.
//!
//! Block explorers publish hashes in display (big-endian) order while the
//! wire format serializes them in protocol (little-endian) order. Converting
//! between the two is a pure byte-order transform on the hex text: split into
//! two-character byte tokens, emit the tokens in reverse.

use thiserror::Error;

/// Errors raised when input text is not valid even-length hex.
#[derive(Debug, Error, PartialEq)]
pub enum HexError {
    #[error("malformed hex: {0}")]
    Malformed(#[from] hex::FromHexError),

    #[error("expected {expected} hex characters, got {actual}")]
    Length { expected: usize, actual: usize },
}

/// Reverse the byte order of a hex string.
///
/// Rejects odd-length input and non-hex characters; never pads or truncates.
/// Self-inverse over valid input: `reverse(reverse(x)) == x`. Output is
/// lowercase regardless of input case.
pub fn reverse_byte_order(hex_str: &str) -> Result<String, HexError> {
    let mut bytes = hex::decode(hex_str)?;
    bytes.reverse();
    Ok(hex::encode(bytes))
}
