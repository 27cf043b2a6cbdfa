//! # Shared Types Crate
//!
//! Entities shared by the block store and the global-state key resolver.
//!
//! ## Design Principles
//!
//! - **Content addressing**: a block's identity is the BLAKE3 digest of its
//!   canonical (bincode) header bytes followed by its body bytes.
//! - **Immutability**: blocks are plain values; nothing here mutates a block
//!   after construction.
//! - **Ordering**: `BlockHash` orders byte-lexicographically, which is the
//!   same order as its lowercase hex encoding.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
