//! Byte-order codec: hex/byte conversions and endianness reversal
//!
//! Hashes are published in display order (big-endian looking hex) while the
//! header and merkle preimages use the reversed (little-endian) byte order.
//! Every conversion between the two goes through [`reverse_byte_order`].

use crate::constants::HEX_PREFIX;
use crate::error::{Result, VerifyError};

/// Strip the optional `0x` marker from a hex string.
pub fn strip_hex_prefix(hex: &str) -> &str {
    hex.strip_prefix(HEX_PREFIX).unwrap_or(hex)
}

/// IntegerToHex: ℕ × ℕ → hex
///
/// Format `value` as exactly `width` lowercase hex digits, zero-padded.
/// Fails with `InvalidInput` if `value` needs more than `width` digits.
pub fn integer_to_hex(value: u64, width: usize) -> Result<String> {
    if width == 0 || width > 16 {
        return Err(VerifyError::InvalidInput(format!(
            "Hex width {} outside 1..=16",
            width
        )));
    }

    if width < 16 && value >> (4 * width) != 0 {
        return Err(VerifyError::InvalidInput(format!(
            "Value {} does not fit in {} hex digits",
            value, width
        )));
    }

    Ok(format!("{:0width$x}", value, width = width))
}

/// ReverseByteOrder: hex → hex
///
/// Reverse the string in 1-byte (2 hex digit) chunks after removing an
/// optional `0x` prefix. Applying it twice yields the unprefixed input.
pub fn reverse_byte_order(hex: &str) -> Result<String> {
    let digits = strip_hex_prefix(hex);

    if !digits.is_ascii() {
        return Err(VerifyError::InvalidInput(format!(
            "Non-ASCII characters in hex string {:?}",
            hex
        )));
    }

    if digits.len() % 2 != 0 {
        return Err(VerifyError::InvalidInput(format!(
            "Odd-length hex string ({} digits)",
            digits.len()
        )));
    }

    Ok(digits
        .as_bytes()
        .chunks(2)
        .rev()
        .flat_map(|pair| pair.iter().map(|&b| b as char))
        .collect())
}

/// Decode hex text (as `&str` or ASCII bytes) into raw bytes.
pub fn decode_hex<T: AsRef<[u8]>>(hex: T) -> Result<Vec<u8>> {
    Ok(hex::decode(hex)?)
}

/// Convert ASCII text to its bytes. Used for hex text handed to the decoder.
pub fn encode_ascii(text: &str) -> Result<Vec<u8>> {
    if !text.is_ascii() {
        return Err(VerifyError::InvalidInput(format!(
            "Non-ASCII characters in {:?}",
            text
        )));
    }
    Ok(text.as_bytes().to_vec())
}

/// Decode a display-order hex field and check its byte width.
pub fn decode_exact(hex: &str, expected_len: usize, field: &str) -> Result<Vec<u8>> {
    let bytes = decode_hex(strip_hex_prefix(hex))?;
    if bytes.len() != expected_len {
        return Err(VerifyError::InvalidInput(format!(
            "{} must be {} bytes, got {}",
            field,
            expected_len,
            bytes.len()
        )));
    }
    Ok(bytes)
}

/// Reverse a display-order hex field and decode it into wire-order bytes,
/// checking its byte width.
pub fn decode_reversed(hex: &str, expected_len: usize, field: &str) -> Result<Vec<u8>> {
    let bytes = decode_hex(reverse_byte_order(hex)?)?;
    if bytes.len() != expected_len {
        return Err(VerifyError::InvalidInput(format!(
            "{} must be {} bytes, got {}",
            field,
            expected_len,
            bytes.len()
        )));
    }
    Ok(bytes)
}

/// Case-insensitive comparison of two display-order hashes, ignoring `0x`.
pub fn hashes_match(computed: &str, claimed: &str) -> bool {
    strip_hex_prefix(computed).eq_ignore_ascii_case(strip_hex_prefix(claimed))
}
