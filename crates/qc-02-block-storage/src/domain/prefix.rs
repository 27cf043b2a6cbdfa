//! # Prefix Resolution
//!
//! Ordered index over stored block hashes answering partial-hex lookups.
//!
//! Hashes are kept in a `BTreeSet`. Because byte order equals hex order, all
//! hashes sharing a hex prefix form one contiguous run starting at the
//! prefix padded with `0`s. A lookup seeks to that bound and inspects at
//! most two entries, so cost is `O(log n)` in the store size.

use super::errors::QueryError;
use super::types::MAX_PREFIX_LEN;
use shared_types::BlockHash;
use std::collections::BTreeSet;

/// Check that `query` is lowercase hex of length `min_len..=64`.
pub fn validate_query(query: &str, min_len: usize) -> Result<(), QueryError> {
    if query.len() < min_len || query.len() > MAX_PREFIX_LEN {
        return Err(QueryError::invalid_query(
            query,
            format!(
                "expected {} to {} hex characters, got {}",
                min_len,
                MAX_PREFIX_LEN,
                query.len()
            ),
        ));
    }
    if !query.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
        return Err(QueryError::invalid_query(
            query,
            "expected lowercase hexadecimal characters only",
        ));
    }
    Ok(())
}

/// Does the hex encoding of `hash` start with `prefix`?
///
/// `prefix` must already be validated lowercase hex.
fn hash_has_prefix(hash: &BlockHash, prefix: &str) -> bool {
    hash.to_hex().starts_with(prefix)
}

/// Smallest hash whose hex encoding can start with `prefix`.
fn lower_bound(prefix: &str) -> Result<BlockHash, QueryError> {
    let padded = format!("{:0<width$}", prefix, width = MAX_PREFIX_LEN);
    BlockHash::from_hex(&padded).map_err(|e| QueryError::invalid_query(prefix, e.to_string()))
}

/// Sorted set of every stored block hash.
#[derive(Debug, Clone, Default)]
pub struct HashIndex {
    hashes: BTreeSet<BlockHash>,
}

impl HashIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the hash was already indexed.
    pub fn insert(&mut self, hash: BlockHash) -> bool {
        self.hashes.insert(hash)
    }

    pub fn contains(&self, hash: &BlockHash) -> bool {
        self.hashes.contains(hash)
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    /// Resolve a partial hex hash to the single stored hash it names.
    ///
    /// ## Errors
    ///
    /// - `InvalidQuery`: not lowercase hex of length `min_len..=64`
    /// - `NotFound`: no stored hash has this prefix
    /// - `AmbiguousPrefix`: two or more stored hashes have this prefix
    pub fn resolve(&self, prefix: &str, min_len: usize) -> Result<BlockHash, QueryError> {
        validate_query(prefix, min_len)?;

        let mut matches = self
            .hashes
            .range(lower_bound(prefix)?..)
            .take_while(|hash| hash_has_prefix(hash, prefix));

        match (matches.next(), matches.next()) {
            (Some(hash), None) => Ok(*hash),
            (None, _) => Err(QueryError::block_not_found(format!("prefix {}", prefix))),
            (Some(_), Some(_)) => Err(QueryError::AmbiguousPrefix {
                prefix: prefix.to_string(),
            }),
        }
    }
}
