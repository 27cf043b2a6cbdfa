//! # Outbound Ports (Driven Ports)
//!
//! Dependencies required by the Block Storage service.
//!
//! These are the interfaces the host application implements. Durability is
//! the substrate's concern; the service only relies on atomic batches.

use crate::domain::entities::StoredBlock;
use crate::domain::errors::{KVStoreError, SerializationError};

/// Result of a prefix scan: `(key, value)` pairs in no particular order.
pub type ScanResult = Vec<(Vec<u8>, Vec<u8>)>;

/// Abstract interface for key-value database operations.
///
/// Testing: `InMemoryKVStore` (adapters/storage/memory.rs)
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError>;

    /// Put a single key-value pair.
    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError>;

    /// Delete a key.
    fn delete(&mut self, key: &[u8]) -> Result<(), KVStoreError>;

    /// Execute an atomic batch write.
    ///
    /// Either ALL operations in the batch succeed, or NONE are applied.
    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError>;

    /// Check if a key exists.
    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError>;

    /// Iterate over keys with a prefix.
    fn prefix_scan(&self, prefix: &[u8]) -> Result<ScanResult, KVStoreError>;
}

/// Batch operation for atomic writes.
#[derive(Debug, Clone)]
pub enum BatchOperation {
    /// Put a key-value pair.
    Put { key: Vec<u8>, value: Vec<u8> },
    /// Delete a key.
    Delete { key: Vec<u8> },
}

impl BatchOperation {
    /// Create a Put operation.
    pub fn put(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        BatchOperation::Put {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a Delete operation.
    pub fn delete(key: impl Into<Vec<u8>>) -> Self {
        BatchOperation::Delete { key: key.into() }
    }
}

/// Abstract interface for record serialization.
///
/// Index values (child lists, rank entries) use fixed bincode encodings;
/// only the block record goes through this port.
pub trait BlockSerializer: Send + Sync {
    /// Serialize a StoredBlock to bytes.
    fn serialize(&self, block: &StoredBlock) -> Result<Vec<u8>, SerializationError>;

    /// Deserialize bytes to a StoredBlock.
    fn deserialize(&self, data: &[u8]) -> Result<StoredBlock, SerializationError>;
}
