//! # Block Store API Implementation
//!
//! Implements the BlockStoreApi trait for read/write operations.

use super::*;
use crate::domain::entities::{BlockStats, BlockSummary};
use crate::domain::errors::QueryError;
use crate::ports::inbound::BlockStoreApi;
use shared_types::{Block, BlockHash, DeployMeta};

impl<KV, BS> BlockStoreApi for BlockStorageService<KV, BS>
where
    KV: KeyValueStore,
    BS: BlockSerializer,
{
    fn put(&self, hash: BlockHash, block: Block, deploy_meta: DeployMeta) -> Result<(), StorageError> {
        let record = self.build_record(hash, block, deploy_meta)?;
        let data = self.serializer.serialize(&record)?;

        let mut state = self.state.write();

        if state.hash_index.contains(&hash) {
            let existing = self.read_record(&state, &hash)?;
            if existing.has_content(&record.block, &record.deploy_meta) {
                #[cfg(feature = "tracing-log")]
                tracing::debug!("[qc-02] Block {} already stored, ignoring re-insert", hash.short());
                return Ok(());
            }
            #[cfg(feature = "tracing-log")]
            tracing::error!(
                "[qc-02] ❌ Hash {} offered with content differing from the stored block",
                hash
            );
            return Err(StorageError::CorruptedStore { hash });
        }

        let operations = Self::stage_insert(&state, &record, data)?;
        state.kv_store.atomic_batch_write(operations)?;
        Self::apply_insert(&mut state, &record);

        #[cfg(feature = "tracing-log")]
        tracing::debug!(
            "[qc-02] ✓ Block {} stored (rank {}, parents: {}, deploys: {})",
            hash.short(),
            record.summary.main_rank(),
            record.summary.parent_hashes().len(),
            record.stats.deploy_count
        );

        Ok(())
    }

    fn get(&self, hash: &BlockHash) -> Result<Block, StorageError> {
        let state = self.state.read();
        Ok(self.read_record(&state, hash)?.block)
    }

    fn contains(&self, hash: &BlockHash) -> bool {
        self.state.read().hash_index.contains(hash)
    }

    fn get_summary(&self, hash: &BlockHash) -> Result<BlockSummary, StorageError> {
        let state = self.state.read();
        Ok(self.read_record(&state, hash)?.summary)
    }

    fn get_stats(&self, hash: &BlockHash) -> Result<BlockStats, StorageError> {
        let state = self.state.read();
        Ok(self.read_record(&state, hash)?.stats)
    }

    fn get_deploy_meta(&self, hash: &BlockHash) -> Result<DeployMeta, StorageError> {
        let state = self.state.read();
        Ok(self.read_record(&state, hash)?.deploy_meta)
    }

    fn children(&self, hash: &BlockHash) -> Vec<BlockHash> {
        self.state.read().child_index.children(hash)
    }

    fn resolve_prefix(&self, prefix: &str) -> Result<BlockHash, QueryError> {
        self.state
            .read()
            .hash_index
            .resolve(prefix, self.config.min_prefix_len)
    }

    fn blocks_by_main_rank(&self, start_rank: u64, limit: u64) -> Vec<BlockHash> {
        let limit = limit.min(self.config.max_rank_range) as usize;
        self.state.read().rank_index.range(start_rank, limit)
    }

    fn block_count(&self) -> usize {
        self.state.read().hash_index.len()
    }
}
