//! Block sources: the seam between retrieval and verification
//!
//! Retrieval itself (HTTP, RPC, files) lives behind [`BlockSource`]; the
//! verifier only ever sees a fetched [`Block`] or the error that prevented
//! one from being fetched.

use crate::codec::strip_hex_prefix;
use crate::constants::HASH_SIZE;
use crate::error::{Result, VerifyError};
use crate::types::Block;
use std::collections::HashMap;
use std::io::Read;

/// Key used to look a block up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockLookup {
    Hash(String),
    Height(u64),
}

impl BlockLookup {
    /// Classify a user-supplied key.
    ///
    /// 64 hex digits (optionally `0x`-prefixed) is a hash, a decimal integer
    /// is a height, anything else is `AmbiguousLookup`.
    pub fn parse(key: &str) -> Result<Self> {
        let trimmed = key.trim();
        let digits = strip_hex_prefix(trimmed);

        if digits.len() == HASH_SIZE * 2 && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Ok(BlockLookup::Hash(digits.to_ascii_lowercase()));
        }

        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(height) = trimmed.parse::<u64>() {
                return Ok(BlockLookup::Height(height));
            }
        }

        Err(VerifyError::AmbiguousLookup(format!(
            "{:?} is neither a block hash nor a block height",
            key
        )))
    }
}

/// Anything that can hand out blocks by hash or by height.
pub trait BlockSource {
    /// Fetch a block by its display-order hash.
    fn fetch_by_hash(&self, hash: &str) -> Result<Block>;

    /// Resolve a height to the hash of the block at that height.
    fn hash_at_height(&self, height: u64) -> Result<String>;

    /// Fetch a block by height: resolve the hash, then fetch by hash.
    fn fetch_by_height(&self, height: u64) -> Result<Block> {
        let hash = self.hash_at_height(height)?;
        self.fetch_by_hash(&hash)
    }

    fn retrieve(&self, lookup: &BlockLookup) -> Result<Block> {
        match lookup {
            BlockLookup::Hash(hash) => self.fetch_by_hash(hash),
            BlockLookup::Height(height) => self.fetch_by_height(*height),
        }
    }
}

/// In-memory block source, typically loaded from explorer JSON.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlockSource {
    blocks: HashMap<String, Block>,
    heights: HashMap<u64, String>,
}

impl MemoryBlockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a block, replacing any block with the same hash or height.
    pub fn insert(&mut self, block: Block) {
        let key = normalize_hash(&block.hash);
        if let Some(old) = self.blocks.remove(&key) {
            self.heights.remove(&old.height);
        }
        if let Some(old_hash) = self.heights.remove(&block.height) {
            self.blocks.remove(&old_hash);
        }
        self.heights.insert(block.height, key.clone());
        self.blocks.insert(key, block);
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Blocks ordered by height
    pub fn blocks(&self) -> Vec<&Block> {
        let mut blocks: Vec<&Block> = self.blocks.values().collect();
        blocks.sort_by_key(|b| b.height);
        blocks
    }

    /// Load one explorer block object or an array of them.
    ///
    /// The first non-whitespace character picks the shape, so a malformed
    /// block reports the offending field.
    pub fn from_json_str(json: &str) -> Result<Self> {
        match json.trim_start().as_bytes().first() {
            Some(b'[') => {
                let blocks: Vec<Block> = serde_json::from_str(json)?;
                Ok(blocks.into_iter().collect())
            }
            _ => {
                let block: Block = serde_json::from_str(json)?;
                Ok(std::iter::once(block).collect())
            }
        }
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut json = String::new();
        reader
            .read_to_string(&mut json)
            .map_err(|e| VerifyError::Transport(e.to_string()))?;
        Self::from_json_str(&json)
    }
}

impl FromIterator<Block> for MemoryBlockSource {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        let mut source = Self::new();
        iter.into_iter().for_each(|b| source.insert(b));
        source
    }
}

impl BlockSource for MemoryBlockSource {
    fn fetch_by_hash(&self, hash: &str) -> Result<Block> {
        self.blocks
            .get(&normalize_hash(hash))
            .cloned()
            .ok_or_else(|| VerifyError::NotFound(format!("no block with hash {}", hash)))
    }

    fn hash_at_height(&self, height: u64) -> Result<String> {
        self.heights
            .get(&height)
            .cloned()
            .ok_or_else(|| VerifyError::NotFound(format!("no block at height {}", height)))
    }
}

fn normalize_hash(hash: &str) -> String {
    strip_hex_prefix(hash.trim()).to_ascii_lowercase()
}
