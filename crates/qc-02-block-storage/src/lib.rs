//! # Block Storage Engine (qc-02)
//!
//! Content-addressed storage for DAG-structured blocks, with the indices
//! needed to answer block queries.
//!
//! ## Components
//!
//! ```text
//!                     ┌──────────────────────────────┐
//!  ingestion ──put──→ │ BlockStorageService          │
//!                     │  ├─ KV store (b:/c:/r: keys) │
//!                     │  ├─ HashIndex   (prefixes)   │
//!                     │  ├─ ChildIndex  (backlinks)  │
//!                     │  └─ RankIndex   (main rank)  │
//!                     └──────────────┬───────────────┘
//!                                    │ Arc
//!  RPC ──get_block_info──→  BlockQueryService
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Content Addressing | One hash, one content; a conflicting re-insert is `CorruptedStore` |
//! | 2 | Atomic Insert | Record, child lists and rank entry commit in one batch |
//! | 3 | Exact Backlinks | children(H) = { C : H in C.parent_hashes } |
//! | 4 | Unambiguous Prefixes | A prefix resolves only if it matches exactly one hash |
//! | 5 | Frozen Derivations | Summary and stats are computed once, at insertion |
//! | 6 | Basic View | `Basic` queries never carry child hashes |
//!
//! Parents need not be present when a child arrives; the child index
//! records the backlink regardless.
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Pure domain logic (entities, indices, stats, errors)
//! - `ports/` - Port traits (inbound API, outbound SPI)
//! - `adapters/` - In-memory KV store, bincode serializer
//! - `service/` - Application services implementing the APIs
//!
//! ## Usage
//!
//! ```ignore
//! use qc_02_block_storage::{BlockQueryService, BlockStorageService, BlockView, StorageConfig};
//! use std::sync::Arc;
//!
//! let store = Arc::new(BlockStorageService::new_in_memory(StorageConfig::default()));
//! store.put(hash, block, deploy_meta)?;
//!
//! let queries = BlockQueryService::new(store.clone());
//! let info = queries.get_block_info(&hash.to_hex()[..8], BlockView::Full)?;
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export key types for convenience
pub use adapters::{BincodeBlockSerializer, InMemoryKVStore};
pub use domain::children::ChildIndex;
pub use domain::entities::{BlockInfo, BlockStats, BlockStatus, BlockSummary, BlockView, StoredBlock};
pub use domain::errors::{KVStoreError, QueryError, QueryStatus, SerializationError, StorageError};
pub use domain::prefix::{validate_query, HashIndex};
pub use domain::rank::RankIndex;
pub use domain::stats::StatsAggregator;
pub use domain::types::{KeyPrefix, StorageConfig};
pub use ports::inbound::{BlockQueryApi, BlockStoreApi};
pub use ports::outbound::{BatchOperation, BlockSerializer, KeyValueStore};
pub use service::{BlockQueryService, BlockStorageDependencies, BlockStorageService};
