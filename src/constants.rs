//! Layout constants for the block header and hash fields

/// Serialized block header size: 4 + 32 + 32 + 4 + 4 + 4 bytes
pub const HEADER_SIZE: usize = 80;

/// Size of a block, transaction or merkle hash
pub const HASH_SIZE: usize = 32;

/// Size of the compact difficulty target (`bits`)
pub const BITS_SIZE: usize = 4;

/// Hex digits used for the 32-bit integer header fields
pub const U32_HEX_WIDTH: usize = 8;

/// Optional prefix accepted in front of hex strings
pub const HEX_PREFIX: &str = "0x";

/// Previous block hash of the genesis block
pub const NULL_HASH_HEX: &str =
    "0000000000000000000000000000000000000000000000000000000000000000";

/// Result key for the merkle root check
pub const MERKLE_ROOT_KEY: &str = "merkleroot";

/// Result key for the block header hash check
pub const BLOCK_HASH_KEY: &str = "block_hash";

/// Default minimum merkle level width evaluated on the thread pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;
