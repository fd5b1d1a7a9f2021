//! Error types for block verification

use thiserror::Error;

/// Failures that prevent a verification from producing a result.
///
/// A hash mismatch is not an error; it is reported as `false` in
/// [`VerificationResult`](crate::types::VerificationResult).
#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Hex decoding failed: {0}")]
    Decode(#[from] hex::FromHexError),

    #[error("Ambiguous block lookup: {0}")]
    AmbiguousLookup(String),

    #[error("Block not found: {0}")]
    NotFound(String),

    #[error("Block source transport failed: {0}")]
    Transport(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for VerifyError {
    fn from(err: serde_json::Error) -> Self {
        VerifyError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VerifyError>;
