//! # Domain Errors
//!
//! Error types for the Block Storage subsystem.
//!
//! ## Design Principles
//!
//! - Storage failures (`StorageError`) and query failures (`QueryError`) are
//!   separate enums; queries convert storage failures at the boundary.
//! - `CorruptedStore` is never folded into `NotFound`.
//! - No panics in domain logic (use Result instead)

use shared_types::{BlockHash, EncodingError};
use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Block with this hash was not found.
    #[error("Block not found: {hash}")]
    BlockNotFound { hash: BlockHash },

    /// The same hash was offered with different content.
    ///
    /// Under correct hashing this cannot happen; it signals a broken
    /// producer or a damaged store.
    #[error("Corrupted store: hash {hash} is already bound to different content")]
    CorruptedStore { hash: BlockHash },

    /// Block exceeds maximum size limit.
    #[error("Block too large: {size} bytes, max {max_size} bytes")]
    BlockTooLarge { size: u64, max_size: u64 },

    /// Database I/O error.
    #[error("Database error: {message}")]
    DatabaseError { message: String },

    /// Serialization/deserialization error.
    #[error("Serialization error: {message}")]
    SerializationError { message: String },
}

/// Errors returned by the query facade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Query string is not 4 to 64 lowercase hex characters.
    #[error("Invalid query {query:?}: {reason}")]
    InvalidQuery { query: String, reason: String },

    /// Well-formed query, nothing stored under it.
    #[error("{message}")]
    NotFound { message: String },

    /// Prefix matches more than one stored block.
    #[error("Ambiguous prefix {prefix:?}: matches more than one block")]
    AmbiguousPrefix { prefix: String },

    /// Store integrity failure surfaced while answering a query.
    #[error("Corrupted store: hash {hash} is bound to inconsistent content")]
    CorruptedStore { hash: BlockHash },

    /// Substrate failure (I/O, decoding) while answering a query.
    #[error("Storage failure: {0}")]
    Storage(String),
}

/// Transport-neutral status class for a query outcome.
///
/// Transports map these onto their own codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    InvalidArgument,
    NotFound,
    FailedPrecondition,
    Internal,
}

impl QueryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryStatus::InvalidArgument => "INVALID_ARGUMENT",
            QueryStatus::NotFound => "NOT_FOUND",
            QueryStatus::FailedPrecondition => "FAILED_PRECONDITION",
            QueryStatus::Internal => "INTERNAL",
        }
    }
}

impl QueryError {
    pub(crate) fn invalid_query(query: &str, reason: impl Into<String>) -> Self {
        QueryError::InvalidQuery {
            query: query.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn block_not_found(what: impl std::fmt::Display) -> Self {
        QueryError::NotFound {
            message: format!("Cannot find block matching {}", what),
        }
    }

    /// Status class a transport should report for this error.
    pub fn status(&self) -> QueryStatus {
        match self {
            QueryError::InvalidQuery { .. } => QueryStatus::InvalidArgument,
            QueryError::NotFound { .. } => QueryStatus::NotFound,
            QueryError::AmbiguousPrefix { .. } => QueryStatus::FailedPrecondition,
            QueryError::CorruptedStore { .. } | QueryError::Storage(_) => QueryStatus::Internal,
        }
    }
}

impl From<StorageError> for QueryError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::BlockNotFound { hash } => QueryError::block_not_found(hash),
            StorageError::CorruptedStore { hash } => QueryError::CorruptedStore { hash },
            other => QueryError::Storage(other.to_string()),
        }
    }
}

/// Key-value store errors.
#[derive(Debug, Clone, Error)]
pub enum KVStoreError {
    /// I/O error during read/write.
    #[error("KV store I/O error: {message}")]
    IOError { message: String },
    /// Data corruption in the store.
    #[error("KV store corruption: {message}")]
    CorruptionError { message: String },
}

impl From<KVStoreError> for StorageError {
    fn from(err: KVStoreError) -> Self {
        StorageError::DatabaseError {
            message: err.to_string(),
        }
    }
}

/// Serialization errors.
#[derive(Debug, Clone, Error)]
#[error("Serialization error: {message}")]
pub struct SerializationError {
    pub message: String,
}

impl From<SerializationError> for StorageError {
    fn from(err: SerializationError) -> Self {
        StorageError::SerializationError {
            message: err.message,
        }
    }
}

impl From<EncodingError> for StorageError {
    fn from(err: EncodingError) -> Self {
        StorageError::SerializationError { message: err.0 }
    }
}
