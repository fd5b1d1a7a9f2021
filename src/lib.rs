//! # Block-Integrity
//!
//! Cryptographic integrity checks for Bitcoin-style blocks.
//!
//! This crate confirms that a block's claimed hash is the double SHA-256 of
//! its 80-byte header and that its claimed merkle root is the pairwise
//! double SHA-256 reduction of its transaction hashes. It does not validate
//! transactions, proof of work, or chain linkage.
//!
//! ## Architecture
//!
//! - Byte-order codec (`codec`) and hash primitive (`hashing`) at the bottom
//! - Header serializer (`header`) and merkle reducer (`merkle`) on top of them
//! - Block verifier (`block`) orchestrating both checks
//! - Block sources (`source`) as the seam to whatever retrieves blocks
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every check is deterministic and side-effect-free
//! 2. **Errors vs. Mismatches**: malformed input is an error, a hash that
//!    does not match is a `false` result
//! 3. **Exact Version Pinning**: consensus-critical hashing pinned to exact versions
//!
//! ## Usage
//!
//! ```rust
//! use block_integrity::BlockVerifier;
//! use block_integrity::types::*;
//!
//! let merkle = "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b";
//! let genesis = Block {
//!     hash: "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f".to_string(),
//!     height: 0,
//!     version: 1,
//!     prev_block_hash: "00".repeat(32),
//!     merkle_root: merkle.to_string(),
//!     time: 1231006505,
//!     bits: "1d00ffff".to_string(),
//!     nonce: 2083236893,
//!     tx: vec![merkle.to_string()],
//! };
//!
//! let result = BlockVerifier::new().verify(&genesis).unwrap();
//! assert!(result.is_valid());
//! ```

pub mod types;
pub mod constants;
pub mod codec;
pub mod hashing;
pub mod header;
pub mod merkle;
pub mod block;
pub mod config;
pub mod source;
pub mod error;

// Re-export commonly used types
pub use types::*;
pub use constants::*;
pub use config::{MerkleConfig, VerifierConfig};
pub use source::{BlockLookup, BlockSource, MemoryBlockSource};
pub use error::{Result, VerifyError};

/// Main block verifier
///
/// # Examples
///
/// ```
/// use block_integrity::{BlockVerifier, VerifierConfig};
///
/// let verifier = BlockVerifier::with_config(VerifierConfig::default());
/// let root = verifier.merkle_root(&["11".repeat(32), "22".repeat(32)]).unwrap();
/// assert_eq!(root, "ba982c0808a9a03c4e958ae612516f85faac3780dcb34d9ab83ceeaf74b54011");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BlockVerifier {
    config: VerifierConfig,
}

impl BlockVerifier {
    /// Create a verifier with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: VerifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Run both checks on a block
    ///
    /// Fails only for malformed input; mismatches are `false` entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use block_integrity::{BlockVerifier, VerifyError};
    /// use block_integrity::types::*;
    ///
    /// let block = Block {
    ///     hash: "00".repeat(32),
    ///     height: 1,
    ///     version: 1,
    ///     prev_block_hash: "00".repeat(32),
    ///     merkle_root: "11".repeat(32),
    ///     time: 0,
    ///     bits: "1d00ffff".to_string(),
    ///     nonce: 0,
    ///     tx: vec!["11".repeat(32)],
    /// };
    ///
    /// let verifier = BlockVerifier::new();
    /// let result = verifier.verify(&block).unwrap();
    /// assert!(result.merkle_root);
    /// assert!(!result.block_hash);
    ///
    /// let empty = Block { tx: vec![], ..block };
    /// assert!(matches!(verifier.verify(&empty), Err(VerifyError::InvalidInput(_))));
    /// ```
    pub fn verify(&self, block: &Block) -> Result<VerificationResult> {
        block::verify_block(block, &self.config.merkle)
    }

    /// Check the claimed block hash against the header fields
    pub fn check_header(&self, block: &Block) -> Result<bool> {
        block.validate()?;
        block::check_header(block)
    }

    /// Check the claimed merkle root against the transaction hashes
    pub fn check_merkle(&self, block: &Block) -> Result<bool> {
        block.validate()?;
        block::check_merkle(block, &self.config.merkle)
    }

    /// Display-order hash recomputed from the header fields
    pub fn block_hash(&self, block: &Block) -> Result<String> {
        block::compute_block_hash(block)
    }

    /// The 80-byte serialized header
    pub fn header_bytes(&self, block: &Block) -> Result<Vec<u8>> {
        header::serialize_header(block)
    }

    /// Merkle root of display-order transaction hashes
    pub fn merkle_root<S: AsRef<str>>(&self, tx_hashes: &[S]) -> Result<String> {
        merkle::merkle_root(tx_hashes, &self.config.merkle)
    }

    /// Fetch a block from `source` and verify it
    ///
    /// Retrieval errors propagate unchanged and no verification is attempted.
    pub fn verify_lookup(
        &self,
        source: &dyn BlockSource,
        lookup: &BlockLookup,
    ) -> Result<(Block, VerificationResult)> {
        let block = source.retrieve(lookup)?;
        let result = self.verify(&block)?;
        Ok((block, result))
    }
}
