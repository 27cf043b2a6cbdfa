//! # Types Module
//!
//! Configuration and immutable value types.

mod config;


// Re-export public types
pub use config::{KeyPrefix, StorageConfig, MAX_PREFIX_LEN, MIN_PREFIX_LEN};
