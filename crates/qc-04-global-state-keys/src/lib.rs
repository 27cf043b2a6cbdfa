//! # qc-04-global-state-keys
//!
//! Global state key resolution for Quantum-Chain.
//!
//! ## Role in System
//!
//! - **Addressing primitive**: turns a `(type, hex)` pair from the query
//!   surface into a canonical [`GlobalStateKey`] for the contract-state tree
//! - **Pure**: no storage, no shared state; safe to call from any thread
//!
//! ## Key Variants
//!
//! | Type | Input | Stored bytes |
//! |------|-------|--------------|
//! | `hash` | 64 hex chars | decoded 32 bytes |
//! | `uref` | 64 hex chars | decoded 32 bytes |
//! | `address` | 64 hex chars | decoded 32 bytes |
//! | `local` | `{seed}:{rest}` | BLAKE3(seed ++ rest) |
//!
//! ## Usage
//!
//! ```ignore
//! use qc_04_global_state_keys::{StateKeyApi, StateKeyResolver};
//!
//! let key = StateKeyResolver::new().resolve_key("Hash", &"ab".repeat(32))?;
//! assert_eq!(key.key_type(), KeyType::Hash);
//! ```

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::*;
pub use ports::*;
pub use service::StateKeyResolver;
