//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Identity**: `Hash`, `BlockHash`, `PublicKey`
//! - **Block DAG**: `Block`, `BlockHeader`, `BlockBody`
//! - **Execution results**: `ProcessedDeploy`, `DeployMeta`

use serde::{Deserialize, Serialize};
use shared_crypto::Blake3Writer;
use std::collections::BTreeMap;
use std::fmt;

use crate::errors::{EncodingError, HashParseError};

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// A 32-byte digest.
pub type Hash = [u8; 32];

/// A 32-byte validator public key.
pub type PublicKey = [u8; 32];

/// Opaque per-deploy execution effects, keyed by deploy hash.
///
/// Stored next to the block it belongs to. The store never interprets it.
pub type DeployMeta = BTreeMap<Hash, Vec<u8>>;

/// Content-derived identifier of a block.
///
/// Ordering is byte-lexicographic, which matches the ordering of the
/// lowercase hex encoding. The prefix index relies on this.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct BlockHash(pub Hash);

impl BlockHash {
    /// Length of a block hash in bytes.
    pub const LENGTH: usize = 32;

    /// Length of a block hash in hex characters.
    pub const HEX_LENGTH: usize = Self::LENGTH * 2;

    /// Wrap raw digest bytes.
    pub const fn new(bytes: Hash) -> Self {
        Self(bytes)
    }

    /// Borrow the raw bytes.
    pub fn as_bytes(&self) -> &Hash {
        &self.0
    }

    /// Full lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// First 8 hex characters, for log lines.
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse a full 64-character hex hash.
    pub fn from_hex(value: &str) -> Result<Self, HashParseError> {
        let bytes = hex::decode(value).map_err(|e| HashParseError::InvalidHex(e.to_string()))?;
        let actual = bytes.len();
        let hash: Hash = bytes
            .try_into()
            .map_err(|_| HashParseError::InvalidLength {
                expected: Self::LENGTH,
                actual,
            })?;
        Ok(Self(hash))
    }
}

impl From<Hash> for BlockHash {
    fn from(bytes: Hash) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for BlockHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHash({})", self.to_hex())
    }
}

// =============================================================================
// CLUSTER B: THE BLOCK DAG
// =============================================================================

/// Semantic protocol version a block was produced under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct ProtocolVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ProtocolVersion {
    /// Protocol version 1.0.0.
    pub const V1_0_0: ProtocolVersion = ProtocolVersion {
        major: 1,
        minor: 0,
        patch: 0,
    };

    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// The header of a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BlockHeader {
    /// Blocks this block builds on, in the order the proposer listed them.
    pub parent_hashes: Vec<BlockHash>,
    /// Latest messages of other validators cited by the proposer.
    pub justifications: Vec<BlockHash>,
    /// Root of the global state after executing this block.
    pub global_state_hash: Hash,
    /// Position in the justification DAG.
    pub j_rank: u64,
    /// Position on the main chain.
    pub main_rank: u64,
    pub protocol_version: ProtocolVersion,
    /// Unix timestamp in milliseconds.
    pub timestamp: u64,
    pub chain_name: String,
    pub validator_public_key: PublicKey,
    /// Sequence number of this block among the validator's own blocks.
    pub validator_seq_num: u32,
    /// The validator's previous block, absent for its first one.
    pub validator_prev_block_hash: Option<BlockHash>,
}

/// A deploy after execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProcessedDeploy {
    pub deploy_hash: Hash,
    /// Opaque deploy payload (session code, arguments, approvals).
    pub payload: Vec<u8>,
    /// Executed cost in gas units.
    pub cost: u64,
    /// Price paid per gas unit.
    pub gas_price: u64,
    pub is_error: bool,
    pub error_message: String,
}

/// The body of a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BlockBody {
    pub deploys: Vec<ProcessedDeploy>,
}

/// A block as supplied by the ingestion path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Block {
    pub header: BlockHeader,
    pub body: BlockBody,
}

impl Block {
    pub fn new(header: BlockHeader, body: BlockBody) -> Self {
        Self { header, body }
    }

    /// Content hash: BLAKE3 over the canonical header bytes followed by the
    /// canonical body bytes.
    pub fn compute_hash(&self) -> Result<BlockHash, EncodingError> {
        let mut writer = Blake3Writer::new();
        bincode::serialize_into(&mut writer, &self.header)?;
        bincode::serialize_into(&mut writer, &self.body)?;
        Ok(BlockHash(writer.finalize()))
    }

    /// Canonical encoding of the whole block.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodingError> {
        Ok(bincode::serialize(self)?)
    }

    /// Exact length of [`Block::to_bytes`] without producing it.
    pub fn serialized_size(&self) -> Result<u64, EncodingError> {
        Ok(bincode::serialized_size(self)?)
    }

    pub fn parent_hashes(&self) -> &[BlockHash] {
        &self.header.parent_hashes
    }

    pub fn deploys(&self) -> &[ProcessedDeploy] {
        &self.body.deploys
    }
}
