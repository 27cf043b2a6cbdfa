//! # Inbound Ports (Driving Ports)
//!
//! The public APIs of the Block Storage subsystem.
//!
//! - `BlockStoreApi`: content-addressed storage plus its indices. The
//!   ingestion path is the only caller of `put`.
//! - `BlockQueryApi`: view-specific read facade for RPC layers.

use crate::domain::entities::{BlockInfo, BlockStats, BlockSummary, BlockView};
use crate::domain::errors::{QueryError, StorageError};
use shared_types::{Block, BlockHash, DeployMeta};

/// Content-addressed block storage.
///
/// All methods take `&self`; implementations synchronize internally and
/// are shared across threads.
pub trait BlockStoreApi: Send + Sync {
    /// Insert a block under its content hash.
    ///
    /// ## Atomicity
    ///
    /// The record, the child-index entries for every parent and the rank
    /// entry are committed in one batch. No reader observes the block
    /// without its backlinks.
    ///
    /// ## Errors
    ///
    /// - `CorruptedStore`: `hash` is already bound to different content
    /// - `BlockTooLarge`: canonical encoding exceeds the configured limit
    ///
    /// Re-inserting identical content is a no-op success.
    fn put(&self, hash: BlockHash, block: Block, deploy_meta: DeployMeta) -> Result<(), StorageError>;

    /// Read a block by its hash.
    ///
    /// ## Errors
    ///
    /// - `BlockNotFound`: No block with this hash exists
    fn get(&self, hash: &BlockHash) -> Result<Block, StorageError>;

    /// Check whether a block is stored.
    fn contains(&self, hash: &BlockHash) -> bool;

    /// Summary cached at insertion.
    fn get_summary(&self, hash: &BlockHash) -> Result<BlockSummary, StorageError>;

    /// Stats cached at insertion.
    fn get_stats(&self, hash: &BlockHash) -> Result<BlockStats, StorageError>;

    /// Deploy effects stored with the block.
    fn get_deploy_meta(&self, hash: &BlockHash) -> Result<DeployMeta, StorageError>;

    /// Recorded children of `hash`, in insertion order. Empty if none.
    fn children(&self, hash: &BlockHash) -> Vec<BlockHash>;

    /// Resolve a 4 to 64 character lowercase hex prefix to one stored hash.
    fn resolve_prefix(&self, prefix: &str) -> Result<BlockHash, QueryError>;

    /// Hashes with `main_rank >= start_rank`, ascending, at most `limit`
    /// (capped by configuration).
    fn blocks_by_main_rank(&self, start_rank: u64, limit: u64) -> Vec<BlockHash>;

    /// Number of stored blocks.
    fn block_count(&self) -> usize;
}

/// Read facade answering block queries.
pub trait BlockQueryApi: Send + Sync {
    /// Look a block up by full hash or unique prefix.
    ///
    /// `query` is 4 to 64 lowercase hex characters; 64 characters are
    /// treated as an exact hash. `child_hashes` is populated only for
    /// `BlockView::Full`.
    ///
    /// ## Errors
    ///
    /// - `InvalidQuery`: malformed query string
    /// - `NotFound`: no matching block
    /// - `AmbiguousPrefix`: prefix matches several blocks
    fn get_block_info(&self, query: &str, view: BlockView) -> Result<BlockInfo, QueryError>;

    /// Same as `get_block_info` for an already-parsed hash.
    fn get_block_info_by_hash(&self, hash: &BlockHash, view: BlockView) -> Result<BlockInfo, QueryError>;

    /// `BlockInfo` for up to `limit` blocks starting at `start_rank`.
    fn get_block_infos_by_rank(
        &self,
        start_rank: u64,
        limit: u64,
        view: BlockView,
    ) -> Result<Vec<BlockInfo>, QueryError>;
}
