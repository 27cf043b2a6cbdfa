//! Global state key model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::KeyError;

/// Length in bytes of every key payload.
pub const KEY_LENGTH: usize = 32;

/// Canonical address into the contract-state tree.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GlobalStateKey {
    Hash([u8; KEY_LENGTH]),
    URef([u8; KEY_LENGTH]),
    Address([u8; KEY_LENGTH]),
    /// BLAKE3 digest of `seed ++ rest`.
    Local([u8; KEY_LENGTH]),
}

impl GlobalStateKey {
    pub fn key_type(&self) -> KeyType {
        match self {
            Self::Hash(_) => KeyType::Hash,
            Self::URef(_) => KeyType::URef,
            Self::Address(_) => KeyType::Address,
            Self::Local(_) => KeyType::Local,
        }
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        match self {
            Self::Hash(bytes) | Self::URef(bytes) | Self::Address(bytes) | Self::Local(bytes) => {
                bytes
            }
        }
    }
}

impl fmt::Display for GlobalStateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.key_type(), hex::encode(self.as_bytes()))
    }
}

impl fmt::Debug for GlobalStateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GlobalStateKey({})", self)
    }
}

/// Key type tag accepted by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    Hash,
    URef,
    Address,
    Local,
}

impl KeyType {
    pub const ALL: [KeyType; 4] = [Self::Hash, Self::URef, Self::Address, Self::Local];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hash => "hash",
            Self::URef => "uref",
            Self::Address => "address",
            Self::Local => "local",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyType {
    type Err = KeyError;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(KeyType::as_str).collect();
                KeyError::unknown_key_type(s, &valid)
            })
    }
}
