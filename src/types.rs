//! Block data and verification results

use crate::codec::decode_exact;
use crate::constants::*;
use crate::error::{Result, VerifyError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hash type: 256-bit hash
pub type Hash = [u8; 32];

/// Block as published by a block explorer.
///
/// Hash fields are hex strings in display byte order. Missing required keys
/// fail deserialization. Unknown keys are accepted and dropped, since explorer
/// payloads carry extra fields (`size`, `confirmations`, ...) that play no
/// part in verification. `previousblockhash` may be absent (genesis) and then
/// reads as the null hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub hash: String,
    pub height: u64,
    pub version: u64,
    #[serde(rename = "previousblockhash", default = "null_hash")]
    pub prev_block_hash: String,
    #[serde(rename = "merkleroot")]
    pub merkle_root: String,
    pub time: u64,
    pub bits: String,
    pub nonce: u64,
    pub tx: Vec<String>,
}

fn null_hash() -> String {
    NULL_HASH_HEX.to_string()
}

impl Block {
    /// Check every field's shape before any hashing happens.
    ///
    /// Hash fields must decode to 32 bytes, `bits` to 4 bytes, and `tx`
    /// must hold at least one 32-byte hash.
    pub fn validate(&self) -> Result<()> {
        decode_exact(&self.hash, HASH_SIZE, "hash")?;
        decode_exact(&self.prev_block_hash, HASH_SIZE, "previousblockhash")?;
        decode_exact(&self.merkle_root, HASH_SIZE, "merkleroot")?;
        decode_exact(&self.bits, BITS_SIZE, "bits")?;

        if self.tx.is_empty() {
            return Err(VerifyError::InvalidInput(
                "Block has an empty transaction list".to_string(),
            ));
        }

        for (i, txid) in self.tx.iter().enumerate() {
            decode_exact(txid, HASH_SIZE, &format!("tx[{}]", i))?;
        }

        Ok(())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hash={}; height={}", self.hash, self.height)
    }
}

/// Outcome of verifying one block: each check strictly passes or fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    #[serde(rename = "merkleroot")]
    pub merkle_root: bool,
    pub block_hash: bool,
}

impl VerificationResult {
    /// Both checks passed
    pub fn is_valid(&self) -> bool {
        self.merkle_root && self.block_hash
    }

    /// Results keyed by their stable names
    pub fn entries(&self) -> [(&'static str, bool); 2] {
        [
            (MERKLE_ROOT_KEY, self.merkle_root),
            (BLOCK_HASH_KEY, self.block_hash),
        ]
    }
}
