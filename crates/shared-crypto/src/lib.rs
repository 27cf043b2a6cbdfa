//! # Shared Crypto
//!
//! Hash primitives used for content addressing.
//!
//! | Use | Input | Output |
//! |-----|-------|--------|
//! | Block hash | canonical header bytes ++ body bytes | 256-bit digest |
//! | Local state key | 32-byte seed ++ remainder | 256-bit digest |
//!
//! All digests are BLAKE3 with the default 32-byte output.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod hashing;

pub use hashing::{blake3_hash, blake3_hash_many, Blake3Writer, Hash, HASH_LENGTH};
