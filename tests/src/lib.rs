//! # Quantum-Chain Block Storage Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/
//! │   ├── fixtures.rs        # Block and deploy builders shared by tests and benches
//! │   └── integration/       # Cross-crate scenarios
//! │       ├── block_queries.rs
//! │       ├── concurrency.rs
//! │       └── state_keys.rs
//! └── benches/
//!     └── prefix_resolution.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p qc-tests
//!
//! # With storage logs
//! RUST_LOG=qc_02_block_storage=debug cargo test -p qc-tests -- --nocapture
//!
//! # Benchmarks
//! cargo bench -p qc-tests
//! ```

pub mod fixtures;
