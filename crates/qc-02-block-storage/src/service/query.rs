//! # Block Query Service
//!
//! Read facade over the storage service.
//!
//! Each query runs as validate -> resolve -> fetch -> assemble. Resolve and
//! fetch share one read guard; assembly runs after it is released.

use super::*;
use crate::domain::entities::{BlockInfo, BlockView, StoredBlock};
use crate::domain::errors::QueryError;
use crate::domain::prefix::validate_query;
use crate::ports::inbound::BlockQueryApi;
use shared_types::BlockHash;
use std::sync::Arc;

/// Query facade composing the hash, child and rank indices with the store.
pub struct BlockQueryService<KV, BS>
where
    KV: KeyValueStore,
    BS: BlockSerializer,
{
    store: Arc<BlockStorageService<KV, BS>>,
}

impl<KV, BS> Clone for BlockQueryService<KV, BS>
where
    KV: KeyValueStore,
    BS: BlockSerializer,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<KV, BS> BlockQueryService<KV, BS>
where
    KV: KeyValueStore,
    BS: BlockSerializer,
{
    pub fn new(store: Arc<BlockStorageService<KV, BS>>) -> Self {
        Self { store }
    }

    /// The storage service queries are answered from.
    pub fn store(&self) -> &Arc<BlockStorageService<KV, BS>> {
        &self.store
    }

    /// Record and (for `Full`) children of `hash`, read under `state`.
    fn fetch(
        &self,
        state: &StoreState<KV>,
        hash: &BlockHash,
        view: BlockView,
    ) -> Result<(StoredBlock, Vec<BlockHash>), QueryError> {
        let record = self.store.read_record(state, hash)?;
        let children = match view {
            BlockView::Full => state.child_index.children(hash),
            BlockView::Basic => Vec::new(),
        };
        Ok((record, children))
    }

    fn assemble((record, children): (StoredBlock, Vec<BlockHash>), view: BlockView) -> BlockInfo {
        BlockInfo::assemble(record.summary, record.stats, children, view)
    }
}

impl<KV, BS> BlockQueryApi for BlockQueryService<KV, BS>
where
    KV: KeyValueStore,
    BS: BlockSerializer,
{
    fn get_block_info(&self, query: &str, view: BlockView) -> Result<BlockInfo, QueryError> {
        validate_query(query, self.store.config.min_prefix_len)?;

        let fetched = {
            let state = self.store.state.read();
            let hash = if query.len() == BlockHash::HEX_LENGTH {
                BlockHash::from_hex(query).map_err(|e| QueryError::invalid_query(query, e.to_string()))?
            } else {
                state.hash_index.resolve(query, self.store.config.min_prefix_len)?
            };
            self.fetch(&state, &hash, view)?
        };

        Ok(Self::assemble(fetched, view))
    }

    fn get_block_info_by_hash(&self, hash: &BlockHash, view: BlockView) -> Result<BlockInfo, QueryError> {
        let fetched = {
            let state = self.store.state.read();
            self.fetch(&state, hash, view)?
        };
        Ok(Self::assemble(fetched, view))
    }

    fn get_block_infos_by_rank(
        &self,
        start_rank: u64,
        limit: u64,
        view: BlockView,
    ) -> Result<Vec<BlockInfo>, QueryError> {
        let limit = limit.min(self.store.config.max_rank_range) as usize;

        let fetched = {
            let state = self.store.state.read();
            state
                .rank_index
                .range(start_rank, limit)
                .iter()
                .map(|hash| self.fetch(&state, hash, view))
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(fetched
            .into_iter()
            .map(|entry| Self::assemble(entry, view))
            .collect())
    }
}
