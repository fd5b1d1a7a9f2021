//! Configuration for block verification
//!
//! Settings only affect how the work is scheduled, never the results.
//! They can be loaded from JSON, from environment variables, or built
//! programmatically.

use crate::constants::DEFAULT_PARALLEL_THRESHOLD;
use crate::error::{Result, VerifyError};
use serde::{Deserialize, Serialize};

/// Merkle reduction scheduling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleConfig {
    /// Combine pairs within a level on the rayon thread pool
    /// Default: true (ignored when built without the `rayon` feature)
    #[serde(default = "default_true")]
    pub enable_parallel: bool,

    /// Minimum level width (number of hashes) before pairs run in parallel
    /// Default: 64
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_true() -> bool {
    true
}

fn default_parallel_threshold() -> usize {
    DEFAULT_PARALLEL_THRESHOLD
}

impl Default for MerkleConfig {
    fn default() -> Self {
        Self {
            enable_parallel: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl MerkleConfig {
    /// Sequential evaluation only
    pub fn sequential() -> Self {
        Self {
            enable_parallel: false,
            ..Self::default()
        }
    }

    /// Whether a level of `width` hashes should be combined in parallel
    pub fn use_parallel(&self, width: usize) -> bool {
        cfg!(feature = "rayon") && self.enable_parallel && width >= self.parallel_threshold
    }
}

/// Top-level verifier configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierConfig {
    #[serde(default)]
    pub merkle: MerkleConfig,
}

const ENV_ENABLE_PARALLEL: &str = "BLOCK_INTEGRITY_MERKLE_ENABLE_PARALLEL";
const ENV_PARALLEL_THRESHOLD: &str = "BLOCK_INTEGRITY_MERKLE_PARALLEL_THRESHOLD";

impl VerifierConfig {
    /// Parse configuration from a JSON document; absent keys take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from environment variables
    ///
    /// Environment variables follow the pattern `BLOCK_INTEGRITY_<SECTION>_<KEY>`:
    /// - `BLOCK_INTEGRITY_MERKLE_ENABLE_PARALLEL=false`
    /// - `BLOCK_INTEGRITY_MERKLE_PARALLEL_THRESHOLD=256`
    ///
    /// Unparsable values are skipped and the default is kept.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var(ENV_ENABLE_PARALLEL) {
            if let Ok(enabled) = val.parse::<bool>() {
                config.merkle.enable_parallel = enabled;
            }
        }

        if let Ok(val) = std::env::var(ENV_PARALLEL_THRESHOLD) {
            if let Ok(threshold) = val.parse::<usize>() {
                config.merkle.parallel_threshold = threshold;
            }
        }

        config
    }

    /// Like [`from_env`](Self::from_env), but unparsable values are errors.
    pub fn try_from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(val) = std::env::var(ENV_ENABLE_PARALLEL) {
            config.merkle.enable_parallel = val.parse::<bool>().map_err(|_| {
                VerifyError::Config(format!("{}={:?} is not a boolean", ENV_ENABLE_PARALLEL, val))
            })?;
        }

        if let Ok(val) = std::env::var(ENV_PARALLEL_THRESHOLD) {
            config.merkle.parallel_threshold = val.parse::<usize>().map_err(|_| {
                VerifyError::Config(format!("{}={:?} is not a count", ENV_PARALLEL_THRESHOLD, val))
            })?;
        }

        Ok(config)
    }
}
