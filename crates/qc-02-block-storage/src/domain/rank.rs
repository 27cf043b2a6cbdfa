//! # Rank Index
//!
//! `main_rank -> [block hash]` index backing ranged listings.
//! Blocks sharing a rank keep their insertion order.

use shared_types::BlockHash;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct RankIndex {
    ranks: BTreeMap<u64, Vec<BlockHash>>,
}

impl RankIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, main_rank: u64, hash: BlockHash) {
        self.ranks.entry(main_rank).or_default().push(hash);
    }

    /// Up to `limit` hashes with rank `>= start_rank`, ascending by rank.
    pub fn range(&self, start_rank: u64, limit: usize) -> Vec<BlockHash> {
        self.ranks
            .range(start_rank..)
            .flat_map(|(_, hashes)| hashes.iter().copied())
            .take(limit)
            .collect()
    }

    /// Highest rank seen so far.
    pub fn max_rank(&self) -> Option<u64> {
        self.ranks.keys().next_back().copied()
    }
}
