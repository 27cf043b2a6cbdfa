//! # Value Objects
//!
//! Immutable configuration and key layout for the Block Storage subsystem.

use shared_types::BlockHash;

/// Longest accepted query: a full block hash in hex.
pub const MAX_PREFIX_LEN: usize = BlockHash::HEX_LENGTH;

/// Shortest prefix any configuration may accept.
pub const MIN_PREFIX_LEN: usize = 4;

/// Configuration for the storage engine.
///
/// All configuration values have sensible defaults for production use.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Maximum canonical block size in bytes (default: 10MB).
    pub max_block_size: u64,

    /// Maximum number of blocks a single rank listing returns (default: 100).
    pub max_rank_range: u64,

    /// Shortest accepted hash prefix, in hex characters (default: 4).
    pub min_prefix_len: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            max_block_size: 10 * 1024 * 1024, // 10 MB
            max_rank_range: 100,
            min_prefix_len: MIN_PREFIX_LEN,
        }
    }
}

impl StorageConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum block size.
    pub fn with_max_block_size(mut self, size: u64) -> Self {
        self.max_block_size = size;
        self
    }

    /// Set the rank listing cap. Zero is raised to one.
    pub fn with_max_rank_range(mut self, limit: u64) -> Self {
        self.max_rank_range = limit.max(1);
        self
    }

    /// Set the shortest accepted prefix, clamped to `4..=64`.
    pub fn with_min_prefix_len(mut self, len: usize) -> Self {
        self.min_prefix_len = len.clamp(MIN_PREFIX_LEN, MAX_PREFIX_LEN);
        self
    }
}

/// Key prefixes for the key-value store.
///
/// All keys are prefixed to namespace different data types.
#[derive(Debug, Clone, Copy)]
pub enum KeyPrefix {
    /// Block record: `b:{hash}` -> StoredBlock
    Block,
    /// Child list: `c:{parent_hash}` -> Vec<BlockHash>
    Children,
    /// Rank index: `r:{main_rank}{insert_seq}` -> BlockHash
    Rank,
}

impl KeyPrefix {
    /// Get the byte prefix for this key type.
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            KeyPrefix::Block => b"b:",
            KeyPrefix::Children => b"c:",
            KeyPrefix::Rank => b"r:",
        }
    }

    /// Build a full key with the given suffix.
    pub fn key(&self, suffix: &[u8]) -> Vec<u8> {
        let mut key = self.as_bytes().to_vec();
        key.extend_from_slice(suffix);
        key
    }

    /// Build a block key from a hash.
    pub fn block_key(hash: &BlockHash) -> Vec<u8> {
        KeyPrefix::Block.key(hash.as_bytes())
    }

    /// Build a child-list key from a parent hash.
    pub fn children_key(parent: &BlockHash) -> Vec<u8> {
        KeyPrefix::Children.key(parent.as_bytes())
    }

    /// Build a rank key. Big-endian so byte order equals numeric order.
    pub fn rank_key(main_rank: u64, insert_seq: u64) -> Vec<u8> {
        let mut suffix = [0u8; 16];
        suffix[..8].copy_from_slice(&main_rank.to_be_bytes());
        suffix[8..].copy_from_slice(&insert_seq.to_be_bytes());
        KeyPrefix::Rank.key(&suffix)
    }

    /// Split a rank key back into `(main_rank, insert_seq)`.
    pub fn parse_rank_key(key: &[u8]) -> Option<(u64, u64)> {
        let suffix = key.strip_prefix(KeyPrefix::Rank.as_bytes())?;
        if suffix.len() != 16 {
            return None;
        }
        let rank = u64::from_be_bytes(suffix[..8].try_into().ok()?);
        let seq = u64::from_be_bytes(suffix[8..].try_into().ok()?);
        Some((rank, seq))
    }

    /// Extract the hash from a `b:` or `c:` key.
    pub fn parse_hash_key(&self, key: &[u8]) -> Option<BlockHash> {
        let suffix = key.strip_prefix(self.as_bytes())?;
        let bytes: [u8; 32] = suffix.try_into().ok()?;
        Some(BlockHash(bytes))
    }
}
