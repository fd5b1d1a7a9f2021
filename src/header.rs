//! Block header serialization
//!
//! Layout (80 bytes), each field byte-reversed from its display form:
//! `version(4) || previousblockhash(32) || merkleroot(32) || time(4) || bits(4) || nonce(4)`

use crate::codec::{decode_hex, decode_reversed, encode_ascii, integer_to_hex, reverse_byte_order};
use crate::constants::*;
use crate::error::{Result, VerifyError};
use crate::types::Block;

/// SerializeHeader: ℬ → 𝕊
///
/// Concatenate the six header fields in wire order. Fails with
/// `InvalidInput` when a field has the wrong width, before any hashing.
pub fn serialize_header(block: &Block) -> Result<Vec<u8>> {
    let mut data = Vec::with_capacity(HEADER_SIZE);

    // Version (4 bytes, little-endian)
    data.extend_from_slice(&integer_field(block.version, "version")?);

    // Previous block hash (32 bytes)
    data.extend_from_slice(&decode_reversed(
        &block.prev_block_hash,
        HASH_SIZE,
        "previousblockhash",
    )?);

    // Merkle root (32 bytes)
    data.extend_from_slice(&decode_reversed(&block.merkle_root, HASH_SIZE, "merkleroot")?);

    // Timestamp (4 bytes, little-endian)
    data.extend_from_slice(&integer_field(block.time, "time")?);

    // Bits (4 bytes, little-endian)
    data.extend_from_slice(&decode_reversed(&block.bits, BITS_SIZE, "bits")?);

    // Nonce (4 bytes, little-endian)
    data.extend_from_slice(&integer_field(block.nonce, "nonce")?);

    if data.len() != HEADER_SIZE {
        return Err(VerifyError::InvalidInput(format!(
            "Serialized header is {} bytes, expected {}",
            data.len(),
            HEADER_SIZE
        )));
    }

    Ok(data)
}

/// 32-bit integer field: fixed-width hex, byte-reversed, decoded.
fn integer_field(value: u64, field: &str) -> Result<Vec<u8>> {
    let hex = integer_to_hex(value, U32_HEX_WIDTH)
        .map_err(|e| VerifyError::InvalidInput(format!("{}: {}", field, e)))?;
    decode_hex(encode_ascii(&reverse_byte_order(&hex)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genesis() -> Block {
        Block {
            hash: "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f".to_string(),
            height: 0,
            version: 1,
            prev_block_hash: NULL_HASH_HEX.to_string(),
            merkle_root: "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b"
                .to_string(),
            time: 1231006505,
            bits: "1d00ffff".to_string(),
            nonce: 2083236893,
            tx: vec![
                "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b".to_string(),
            ],
        }
    }

    #[test]
    fn test_serialize_header_length() {
        let bytes = serialize_header(&genesis()).unwrap();
        assert_eq!(bytes.len(), HEADER_SIZE);
    }

    #[test]
    fn test_serialize_header_genesis_bytes() {
        let bytes = serialize_header(&genesis()).unwrap();
        assert_eq!(
            hex::encode(bytes),
            concat!(
                "01000000",
                "0000000000000000000000000000000000000000000000000000000000000000",
                "3ba3edfd7a7b12b27ac72c3e67768f617fc81bc3888a51323a9fb8aa4b1e5e4a",
                "29ab5f49",
                "ffff001d",
                "1dac2b7c"
            )
        );
    }

    #[test]
    fn test_serialize_header_field_order() {
        let bytes = serialize_header(&genesis()).unwrap();
        assert_eq!(&bytes[0..4], &[0x01, 0x00, 0x00, 0x00]);
        assert_eq!(&bytes[4..36], &[0u8; 32]);
        assert_eq!(bytes[36], 0x3b);
        assert_eq!(&bytes[72..76], &[0xff, 0xff, 0x00, 0x1d]);
    }

    #[test]
    fn test_serialize_header_short_prev_hash() {
        let mut block = genesis();
        block.prev_block_hash = "00".repeat(30);
        let result = serialize_header(&block);
        assert!(matches!(result, Err(VerifyError::InvalidInput(_))));
    }

    #[test]
    fn test_serialize_header_nonce_out_of_range() {
        let mut block = genesis();
        block.nonce = 1 << 32;
        let result = serialize_header(&block);
        assert!(matches!(result, Err(VerifyError::InvalidInput(_))));
    }

    #[test]
    fn test_serialize_header_non_hex_bits() {
        let mut block = genesis();
        block.bits = "1d00fffg".to_string();
        assert!(matches!(serialize_header(&block), Err(VerifyError::Decode(_))));
    }
}
