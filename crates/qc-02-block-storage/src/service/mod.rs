//! # Block Storage Service
//!
//! The main service implementing the Block Storage APIs.
//!
//! ## Architecture
//!
//! This service:
//! 1. Implements `BlockStoreApi` over an injected `KeyValueStore`
//! 2. Keeps the hash, child and rank indices in memory, rebuilt on open
//! 3. Serves `BlockQueryApi` through the cloneable `BlockQueryService`
//!
//! ## Locking
//!
//! The KV handle and every index sit behind one `RwLock`. An insert holds
//! the write lock from its duplicate check through the batch commit and the
//! index update. Queries hold the read lock while they resolve, fetch and
//! collect children, so each answer comes from one committed state.
//! Hashing and encoding of a new block happen before the lock is taken.

mod helpers;
mod query;
mod storage;

pub use query::BlockQueryService;

use crate::adapters::{BincodeBlockSerializer, InMemoryKVStore};
use crate::domain::children::ChildIndex;
use crate::domain::errors::StorageError;
use crate::domain::prefix::HashIndex;
use crate::domain::rank::RankIndex;
use crate::domain::types::StorageConfig;
use crate::ports::outbound::{BlockSerializer, KeyValueStore};
use parking_lot::RwLock;

/// Everything a committed insert changes.
pub(crate) struct StoreState<KV> {
    pub(crate) kv_store: KV,
    pub(crate) hash_index: HashIndex,
    pub(crate) child_index: ChildIndex,
    pub(crate) rank_index: RankIndex,
    /// Insertion counter, orders blocks sharing a rank.
    pub(crate) next_seq: u64,
}

impl<KV> StoreState<KV> {
    fn empty(kv_store: KV) -> Self {
        Self {
            kv_store,
            hash_index: HashIndex::new(),
            child_index: ChildIndex::new(),
            rank_index: RankIndex::new(),
            next_seq: 0,
        }
    }
}

/// The Block Storage Service.
pub struct BlockStorageService<KV, BS>
where
    KV: KeyValueStore,
    BS: BlockSerializer,
{
    /// KV handle and in-memory indices.
    pub(crate) state: RwLock<StoreState<KV>>,
    /// Record encoder for `b:` values.
    pub(crate) serializer: BS,
    /// Service configuration.
    pub(crate) config: StorageConfig,
}

/// Dependencies for BlockStorageService
pub struct BlockStorageDependencies<KV, BS> {
    pub kv_store: KV,
    pub serializer: BS,
}

impl<KV, BS> BlockStorageService<KV, BS>
where
    KV: KeyValueStore,
    BS: BlockSerializer,
{
    /// Open a Block Storage Service over existing (or empty) storage.
    ///
    /// Rebuilds the hash, child and rank indices from the KV store.
    pub fn new(
        deps: BlockStorageDependencies<KV, BS>,
        config: StorageConfig,
    ) -> Result<Self, StorageError> {
        let state = Self::load_state(deps.kv_store, &deps.serializer)?;
        Ok(Self {
            state: RwLock::new(state),
            serializer: deps.serializer,
            config,
        })
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Close the service and hand back the substrate.
    pub fn into_kv_store(self) -> KV {
        self.state.into_inner().kv_store
    }
}

impl BlockStorageService<InMemoryKVStore, BincodeBlockSerializer> {
    /// Empty service over an in-memory store.
    pub fn new_in_memory(config: StorageConfig) -> Self {
        Self {
            state: RwLock::new(StoreState::empty(InMemoryKVStore::new())),
            serializer: BincodeBlockSerializer,
            config,
        }
    }
}
