//! # Domain Layer
//!
//! Pure domain logic for the Block Storage subsystem. Nothing here touches
//! the key-value substrate or takes locks.
//!
//! ## Modules
//!
//! - `entities` - Stored record, summary, stats and query views
//! - `prefix` - Sorted hash index and partial-hash resolution
//! - `children` - Reverse parent -> children index
//! - `rank` - Main-rank index for ranged listings
//! - `stats` - Per-block deploy statistics
//! - `types` - Configuration and key layout
//! - `errors` - Domain error types

pub mod children;
pub mod entities;
pub mod errors;
pub mod prefix;
pub mod rank;
pub mod stats;
pub mod types;
