//! Storage Adapters
//!
//! Implementations of the `KeyValueStore` trait.

mod memory;

pub use memory::InMemoryKVStore;
