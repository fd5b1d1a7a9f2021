//! Merkle root reduction over transaction hashes
//!
//! Each level is paired left to right; an odd trailing hash is paired with
//! itself. A combine step reverses both display-order inputs, double hashes
//! their concatenation and reverses the digest back to display order, so
//! every level holds display-order hashes.

use crate::codec::{decode_reversed, reverse_byte_order};
use crate::config::MerkleConfig;
use crate::constants::HASH_SIZE;
use crate::error::{Result, VerifyError};
use crate::hashing::double_hash;
use tracing::trace;

/// MerkleRoot: hex* → hex
///
/// Reduce `tx_hashes` level by level until one hash remains. A single hash
/// is its own root. Fails with `InvalidInput` for an empty list or a hash
/// that is not 32 bytes.
pub fn merkle_root<S: AsRef<str>>(tx_hashes: &[S], config: &MerkleConfig) -> Result<String> {
    let mut levels = merkle_levels(tx_hashes, config)?;
    let root_level = levels.pop().unwrap_or_default();
    root_level
        .into_iter()
        .next()
        .ok_or_else(|| VerifyError::InvalidInput("Merkle reduction produced no root".to_string()))
}

/// Every level of the reduction, leaves first and the single-hash root
/// level last.
pub fn merkle_levels<S: AsRef<str>>(
    tx_hashes: &[S],
    config: &MerkleConfig,
) -> Result<Vec<Vec<String>>> {
    if tx_hashes.is_empty() {
        return Err(VerifyError::InvalidInput(
            "Cannot calculate merkle root for empty transaction list".to_string(),
        ));
    }

    for (i, hash) in tx_hashes.iter().enumerate() {
        decode_reversed(hash.as_ref(), HASH_SIZE, &format!("tx[{}]", i))?;
    }

    let mut levels = Vec::new();
    let mut current: Vec<String> = tx_hashes.iter().map(|h| h.as_ref().to_string()).collect();

    while current.len() > 1 {
        let next_level = reduce_level(&current, config)?;
        trace!(
            depth = levels.len() + 1,
            width = next_level.len(),
            parallel = config.use_parallel(current.len()),
            "merkle level reduced"
        );
        levels.push(std::mem::replace(&mut current, next_level));
    }
    levels.push(current);

    Ok(levels)
}

/// MerkleCombine: hex × hex → hex
///
/// reverse(DoubleHash(decode(reverse(left)) || decode(reverse(right))))
pub fn combine_pair(left: &str, right: &str) -> Result<String> {
    let mut combined = decode_reversed(left, HASH_SIZE, "left merkle hash")?;
    combined.extend_from_slice(&decode_reversed(right, HASH_SIZE, "right merkle hash")?);
    reverse_byte_order(&double_hash(&combined))
}

/// Combine one level into the next, keeping pair order.
fn reduce_level(level: &[String], config: &MerkleConfig) -> Result<Vec<String>> {
    #[cfg(feature = "rayon")]
    {
        if config.use_parallel(level.len()) {
            use rayon::prelude::*;
            return level.par_chunks(2).map(combine_chunk).collect();
        }
    }
    #[cfg(not(feature = "rayon"))]
    let _ = config;

    level.chunks(2).map(combine_chunk).collect()
}

fn combine_chunk(chunk: &[String]) -> Result<String> {
    match chunk {
        [left, right] => combine_pair(left, right),
        // Odd number: duplicate the last hash
        [last] => combine_pair(last, last),
        _ => Err(VerifyError::InvalidInput(format!(
            "Unexpected merkle chunk of {} hashes",
            chunk.len()
        ))),
    }
}
