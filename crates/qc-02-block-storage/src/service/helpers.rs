//! # Block Storage Service - Helper Methods
//!
//! Private helper methods for the BlockStorageService.

use super::*;
use crate::domain::entities::{BlockSummary, StoredBlock};
use crate::domain::stats::StatsAggregator;
use crate::domain::types::KeyPrefix;
use crate::ports::outbound::BatchOperation;
use shared_types::{Block, BlockHash, DeployMeta};

pub(crate) fn encode_hash_list(hashes: &[BlockHash]) -> Result<Vec<u8>, StorageError> {
    bincode::serialize(hashes).map_err(|e| StorageError::SerializationError {
        message: e.to_string(),
    })
}

pub(crate) fn decode_hash_list(data: &[u8]) -> Result<Vec<BlockHash>, StorageError> {
    bincode::deserialize(data).map_err(|e| StorageError::SerializationError {
        message: e.to_string(),
    })
}

impl<KV, BS> BlockStorageService<KV, BS>
where
    KV: KeyValueStore,
    BS: BlockSerializer,
{
    /// Rebuild the in-memory indices from persisted records.
    pub(crate) fn load_state(kv_store: KV, serializer: &BS) -> Result<StoreState<KV>, StorageError> {
        let mut state = StoreState::empty(kv_store);

        for (key, value) in state.kv_store.prefix_scan(KeyPrefix::Block.as_bytes())? {
            let hash = KeyPrefix::Block
                .parse_hash_key(&key)
                .ok_or_else(|| StorageError::DatabaseError {
                    message: "Invalid block key format".to_string(),
                })?;
            let record = serializer.deserialize(&value)?;
            if record.block_hash() != hash {
                return Err(StorageError::CorruptedStore { hash });
            }
            state.hash_index.insert(hash);
        }

        if state.hash_index.is_empty() {
            #[cfg(feature = "tracing-log")]
            tracing::info!("[qc-02] No existing blocks found in storage");
            return Ok(state);
        }

        for (key, value) in state.kv_store.prefix_scan(KeyPrefix::Children.as_bytes())? {
            let parent = KeyPrefix::Children
                .parse_hash_key(&key)
                .ok_or_else(|| StorageError::DatabaseError {
                    message: "Invalid child-list key format".to_string(),
                })?;
            state.child_index.restore(parent, decode_hash_list(&value)?);
        }

        let mut rank_entries = Vec::new();
        for (key, value) in state.kv_store.prefix_scan(KeyPrefix::Rank.as_bytes())? {
            let (rank, seq) =
                KeyPrefix::parse_rank_key(&key).ok_or_else(|| StorageError::DatabaseError {
                    message: "Invalid rank key format".to_string(),
                })?;
            let hash: [u8; 32] = value
                .as_slice()
                .try_into()
                .map_err(|_| StorageError::DatabaseError {
                    message: "Invalid block hash format".to_string(),
                })?;
            rank_entries.push((rank, seq, BlockHash(hash)));
        }
        rank_entries.sort_by_key(|&(rank, seq, _)| (rank, seq));
        for (rank, seq, hash) in rank_entries {
            state.rank_index.insert(rank, hash);
            state.next_seq = state.next_seq.max(seq + 1);
        }

        #[cfg(feature = "tracing-log")]
        tracing::info!(
            "[qc-02] 💾 Loaded {} blocks from storage (max rank {:?}, {} parents with children)",
            state.hash_index.len(),
            state.rank_index.max_rank(),
            state.child_index.len()
        );

        Ok(state)
    }

    /// Build the persisted record: summary and stats are fixed here.
    pub(crate) fn build_record(
        &self,
        hash: BlockHash,
        block: Block,
        deploy_meta: DeployMeta,
    ) -> Result<StoredBlock, StorageError> {
        let stats = StatsAggregator::compute_stats(&block)?;
        if stats.block_size_bytes > self.config.max_block_size {
            return Err(StorageError::BlockTooLarge {
                size: stats.block_size_bytes,
                max_size: self.config.max_block_size,
            });
        }
        let summary = BlockSummary::new(hash, block.header.clone());
        Ok(StoredBlock::new(summary, stats, block, deploy_meta))
    }

    /// Batch committing `record` together with its index entries.
    pub(crate) fn stage_insert(
        state: &StoreState<KV>,
        record: &StoredBlock,
        data: Vec<u8>,
    ) -> Result<Vec<BatchOperation>, StorageError> {
        let hash = record.block_hash();
        let mut operations = vec![
            BatchOperation::put(KeyPrefix::block_key(&hash), data),
            BatchOperation::put(
                KeyPrefix::rank_key(record.summary.main_rank(), state.next_seq),
                hash.as_bytes().to_vec(),
            ),
        ];
        for (parent, children) in state.child_index.staged_lists(hash, &record.block) {
            operations.push(BatchOperation::put(
                KeyPrefix::children_key(&parent),
                encode_hash_list(&children)?,
            ));
        }
        Ok(operations)
    }

    /// Apply a committed insert to the in-memory indices.
    pub(crate) fn apply_insert(state: &mut StoreState<KV>, record: &StoredBlock) {
        let hash = record.block_hash();
        state.hash_index.insert(hash);
        state.child_index.on_insert(hash, &record.block);
        state.rank_index.insert(record.summary.main_rank(), hash);
        state.next_seq += 1;
    }

    /// Read and decode the record stored under `hash`.
    pub(crate) fn read_record(
        &self,
        state: &StoreState<KV>,
        hash: &BlockHash,
    ) -> Result<StoredBlock, StorageError> {
        let data = state
            .kv_store
            .get(&KeyPrefix::block_key(hash))?
            .ok_or(StorageError::BlockNotFound { hash: *hash })?;

        let record = self.serializer.deserialize(&data)?;
        if record.block_hash() != *hash {
            #[cfg(feature = "tracing-log")]
            tracing::error!(
                "[qc-02] Record under {} claims hash {}",
                hash,
                record.block_hash()
            );
            return Err(StorageError::CorruptedStore { hash: *hash });
        }
        Ok(record)
    }
}
