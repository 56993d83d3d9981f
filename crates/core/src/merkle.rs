//! Merkle root reduction over transaction hashes.
//!
//! Explorers publish transaction hashes in display (big-endian) order, but
//! the protocol hashes in little-endian order. Each reduction level flips a
//! pair to protocol order, double-hashes the concatenation, and flips the
//! digest back to display order before it feeds the next level. Leaves stay
//! in display order between levels so the final root comes out in the same
//! form the reference root is published in.

use crate::endian::HexError;
use crate::hash::{sha256d, Hash};
use thiserror::Error;

/// Errors raised while reducing a transaction list to its root.
#[derive(Debug, Error, PartialEq)]
pub enum MerkleError {
    /// The protocol defines no root for zero transactions.
    #[error("cannot compute a merkle root over an empty transaction list")]
    Empty,

    #[error(transparent)]
    Hex(#[from] HexError),
}

/// Compute the merkle root of an ordered list of transaction hashes.
///
/// A single leaf is its own root and is returned unchanged, with no hashing.
/// At every level a trailing odd element pairs with itself, the canonical
/// duplicate-last rule; this applies again at upper levels when oddness
/// cascades. Each pass halves the level (rounded up), so the reduction runs
/// ⌈log2(n)⌉ passes.
pub fn merkle_root(leaves: &[Hash]) -> Result<Hash, MerkleError> {
    if leaves.is_empty() {
        return Err(MerkleError::Empty);
    }

    let mut level = leaves.to_vec();
    while level.len() > 1 {
        let mut next = Vec::with_capacity(level.len().div_ceil(2));
        for pair in level.chunks(2) {
            // A lone trailing element is hashed with itself.
            let right = if pair.len() == 2 { &pair[1] } else { &pair[0] };
            next.push(hash_pair(&pair[0], right));
        }
        level = next;
    }

    Ok(level[0])
}

/// Hex-string entry point: parse display-order transaction hashes, reduce,
/// and return the root as lowercase hex.
pub fn merkle_root_hex<S: AsRef<str>>(leaves: &[S]) -> Result<String, MerkleError> {
    let parsed: Vec<Hash> = leaves
        .iter()
        .map(|s| Hash::from_hex(s.as_ref()))
        .collect::<Result<_, _>>()?;
    Ok(merkle_root(&parsed)?.to_hex())
}

/// Combine two display-order hashes into their display-order parent:
/// sha256d over left‖right in protocol order, digest flipped back.
fn hash_pair(left: &Hash, right: &Hash) -> Hash {
    let mut data = [0u8; 64];
    data[..32].copy_from_slice(left.reversed().as_bytes());
    data[32..].copy_from_slice(right.reversed().as_bytes());
    Hash::from_bytes(sha256d(&data)).reversed()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Deterministic display-order leaves for structural tests.
    fn make_leaves(n: usize) -> Vec<Hash> {
        (0..n)
            .map(|i| Hash::from_bytes(sha256d(&[i as u8])).reversed())
            .collect()
    }

    #[test]
    fn test_empty_list_rejected() {
        assert_eq!(merkle_root(&[]), Err(MerkleError::Empty));
    }

    #[test]
    fn test_single_leaf_is_its_own_root() {
        let leaves = make_leaves(1);
        assert_eq!(merkle_root(&leaves).unwrap(), leaves[0]);
    }

    #[test]
    fn test_odd_list_duplicates_last_leaf() {
        let mut leaves = make_leaves(3);
        let odd = merkle_root(&leaves).unwrap();
        leaves.push(leaves[2]);
        assert_eq!(merkle_root(&leaves).unwrap(), odd);
    }

    #[test]
    fn test_three_leaves_known_root() {
        let leaves = [
            "9a538906e6466ebd2617d321f71bc94e56056ce213d366773699e28158e00614",
            "705f425bfcb81942ec8db27abc2485c1322177233dac87d78445c704dccf129c",
            "babb95b7a797b2e17dbc71c7b49dce0c15687d7704c03a4394fdeb40eaadc31c",
        ];
        assert_eq!(
            merkle_root_hex(&leaves).unwrap(),
            "d0c1e5f32d1d424371ac1018770af4446140436d5926d112c67f562fe0df29e1"
        );
    }

    #[test]
    fn test_order_sensitivity() {
        let mut leaves = make_leaves(4);
        let original = merkle_root(&leaves).unwrap();
        leaves.swap(0, 1);
        assert_ne!(merkle_root(&leaves).unwrap(), original);
    }

    #[test]
    fn test_deterministic() {
        let leaves = make_leaves(10);
        assert_eq!(merkle_root(&leaves), merkle_root(&leaves));
    }

    #[test]
    fn test_genesis_coinbase_is_the_root() {
        // Block 0 has a single transaction; its hash is the published root.
        let coinbase = "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b";
        assert_eq!(merkle_root_hex(&[coinbase]).unwrap(), coinbase);
    }

    #[test]
    fn test_block_100000_published_root() {
        // The four transaction hashes of mainnet block 100000 and its
        // published mrkl_root.
        let txs = [
            "8c14f0db3df150123e6f3dbbf30f8b955a8249b62ac1d1ff16284aefa3d06d87",
            "fff2525b8931402dd09222c50775608f75787bd2b87e56995a7bdd30f79702c4",
            "6359f0868171b1d194cbee1af2f16ea598ae8fad666d9b012c8ed2b79a236ec4",
            "e9a66845e05d5abc0ad04ec80f774a7e585c6e8db975962d069a522137b80c1d",
        ];
        assert_eq!(
            merkle_root_hex(&txs).unwrap(),
            "f3e94742aca4b5ef85488dc37c06c3282295ffec960994b2c0d5ac2a25a95766"
        );
    }

    #[test]
    fn test_malformed_leaf_rejected() {
        let leaves = ["zz".repeat(32)];
        assert!(matches!(
            merkle_root_hex(&leaves).unwrap_err(),
            MerkleError::Hex(HexError::Malformed(_))
        ));
    }

    #[test]
    fn test_short_leaf_rejected() {
        assert_eq!(
            merkle_root_hex(&["abcd"]).unwrap_err(),
            MerkleError::Hex(HexError::Length {
                expected: 64,
                actual: 4
            })
        );
    }
}
