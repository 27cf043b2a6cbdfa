//! # Adapters Module
//!
//! Adapter implementations of the outbound ports.
//!
//! ## Modules
//!
//! - `storage`: `KeyValueStore` implementations
//! - `serializer`: `BlockSerializer` implementations

pub mod serializer;
pub mod storage;

pub use serializer::BincodeBlockSerializer;
pub use storage::InMemoryKVStore;
