//! # Domain Entities
//!
//! The persisted block record and the query-side views built from it.

use serde::{Deserialize, Serialize};
use super::errors::QueryError;
use shared_types::{Block, BlockHash, BlockHeader, DeployMeta};
use std::str::FromStr;

/// Immutable snapshot of a header plus the block's own hash.
///
/// Built once, when the block is inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSummary {
    pub block_hash: BlockHash,
    pub header: BlockHeader,
}

impl BlockSummary {
    pub fn new(block_hash: BlockHash, header: BlockHeader) -> Self {
        Self { block_hash, header }
    }

    pub fn parent_hashes(&self) -> &[BlockHash] {
        &self.header.parent_hashes
    }

    pub fn main_rank(&self) -> u64 {
        self.header.main_rank
    }
}

/// Aggregate statistics derived from a block's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockStats {
    /// Length of the canonical block encoding.
    pub block_size_bytes: u64,
    /// Sum of deploy costs.
    pub deploy_cost_total: u64,
    /// Cost-weighted average gas price, floored; 0 when no cost was spent.
    pub deploy_gas_price_avg: u64,
    pub deploy_count: u64,
}

/// The record persisted under `b:{hash}`.
///
/// Summary and stats are computed at insertion and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredBlock {
    pub summary: BlockSummary,
    pub stats: BlockStats,
    pub block: Block,
    pub deploy_meta: DeployMeta,
}

impl StoredBlock {
    pub fn new(summary: BlockSummary, stats: BlockStats, block: Block, deploy_meta: DeployMeta) -> Self {
        Self {
            summary,
            stats,
            block,
            deploy_meta,
        }
    }

    pub fn block_hash(&self) -> BlockHash {
        self.summary.block_hash
    }

    /// True when `block` and `deploy_meta` are exactly what this record holds.
    pub fn has_content(&self, block: &Block, deploy_meta: &DeployMeta) -> bool {
        self.block == *block && self.deploy_meta == *deploy_meta
    }
}

/// How much of a block's neighbourhood a query returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockView {
    /// Summary and stats only; `child_hashes` is always empty.
    #[default]
    Basic,
    /// Summary, stats and the recorded children.
    Full,
}

impl FromStr for BlockView {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Ok(BlockView::Basic),
            "full" => Ok(BlockView::Full),
            _ => Err(QueryError::invalid_query(s, "expected one of: basic, full")),
        }
    }
}

/// Query-side status section of a `BlockInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockStatus {
    pub block_size_bytes: u64,
    pub deploy_cost_total: u64,
    pub deploy_gas_price_avg: u64,
    pub child_hashes: Vec<BlockHash>,
}

/// Result of a block query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockInfo {
    pub summary: BlockSummary,
    pub status: BlockStatus,
}

impl BlockInfo {
    /// Assemble the response for `view`.
    ///
    /// `children` is dropped for `BlockView::Basic`.
    pub fn assemble(summary: BlockSummary, stats: BlockStats, children: Vec<BlockHash>, view: BlockView) -> Self {
        let child_hashes = match view {
            BlockView::Full => children,
            BlockView::Basic => Vec::new(),
        };
        Self {
            summary,
            status: BlockStatus {
                block_size_bytes: stats.block_size_bytes,
                deploy_cost_total: stats.deploy_cost_total,
                deploy_gas_price_avg: stats.deploy_gas_price_avg,
                child_hashes,
            },
        }
    }
}
