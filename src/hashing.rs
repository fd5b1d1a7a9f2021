//! Double SHA-256 hash primitive

use crate::types::Hash;
use sha2::{Digest, Sha256};

/// DoubleSHA256: 𝕊 → ℍ
///
/// SHA256(SHA256(data)), returned as raw digest bytes.
pub fn double_sha256(data: &[u8]) -> Hash {
    let first = Sha256::digest(data);
    let second = Sha256::digest(&first);

    let mut hash = [0u8; 32];
    hash.copy_from_slice(&second);
    hash
}

/// DoubleHash: 𝕊 → hex
///
/// SHA256(SHA256(data)) as 64 lowercase hex digits, in digest byte order.
pub fn double_hash(data: &[u8]) -> String {
    hex::encode(double_sha256(data))
}
