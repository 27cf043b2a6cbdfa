//! # Error Types
//!
//! Errors raised while parsing or encoding shared entities.

use thiserror::Error;

/// Failure to parse a `BlockHash` from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashParseError {
    /// Input is not valid hex.
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Decoded bytes have the wrong length.
    #[error("Invalid hash length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Failure to produce the canonical encoding of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Encoding error: {0}")]
pub struct EncodingError(pub String);

impl From<bincode::Error> for EncodingError {
    fn from(err: bincode::Error) -> Self {
        EncodingError(err.to_string())
    }
}
