//! Block integrity checks: header hash and merkle root

use crate::codec::{decode_exact, hashes_match, reverse_byte_order};
use crate::config::MerkleConfig;
use crate::constants::HASH_SIZE;
use crate::error::Result;
use crate::hashing::double_hash;
use crate::header::serialize_header;
use crate::merkle::merkle_root;
use crate::types::*;
use tracing::{debug, warn};

/// VerifyBlock: ℬ → {true, false}²
///
/// For block b:
/// 1. Validate the shape of every field (errors, no result)
/// 2. merkle = MerkleRoot(b.tx) = b.merkleroot
/// 3. header = reverse(DoubleHash(SerializeHeader(b))) = b.hash
///
/// A mismatch is a `false` entry, never an error.
pub fn verify_block(block: &Block, config: &MerkleConfig) -> Result<VerificationResult> {
    block.validate()?;

    let result = VerificationResult {
        merkle_root: check_merkle(block, config)?,
        block_hash: check_header(block)?,
    };

    debug!(
        hash = %block.hash,
        height = block.height,
        merkle_root = result.merkle_root,
        block_hash = result.block_hash,
        "block verified"
    );

    Ok(result)
}

/// CheckHeader: ℬ → {true, false}
///
/// Recompute the block hash from the header fields and compare it with the
/// claimed `hash`, ignoring case. A malformed claimed hash is an error.
pub fn check_header(block: &Block) -> Result<bool> {
    decode_exact(&block.hash, HASH_SIZE, "hash")?;
    let computed = compute_block_hash(block)?;
    let matches = hashes_match(&computed, &block.hash);
    if !matches {
        warn!(claimed = %block.hash, %computed, "block hash mismatch");
    }
    Ok(matches)
}

/// CheckMerkle: ℬ → {true, false}
///
/// Reduce `tx` to a root and compare it with the claimed `merkleroot`.
/// A malformed claimed root is an error.
pub fn check_merkle(block: &Block, config: &MerkleConfig) -> Result<bool> {
    decode_exact(&block.merkle_root, HASH_SIZE, "merkleroot")?;
    let computed = merkle_root(&block.tx, config)?;
    let matches = hashes_match(&computed, &block.merkle_root);
    if !matches {
        warn!(claimed = %block.merkle_root, %computed, "merkle root mismatch");
    }
    Ok(matches)
}

/// Block hash in display order: reverse(DoubleHash(SerializeHeader(b)))
pub fn compute_block_hash(block: &Block) -> Result<String> {
    let header = serialize_header(block)?;
    reverse_byte_order(&double_hash(&header))
}
