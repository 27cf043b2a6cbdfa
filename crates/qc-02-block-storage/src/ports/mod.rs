//! # Ports
//!
//! - `inbound`: APIs this crate offers (block store, block queries)
//! - `outbound`: substrates the host supplies (key-value store, serializer)

pub mod inbound;
pub mod outbound;
