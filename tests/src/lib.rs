//! # ArbiterBridge Test Suite
//!
//! Unified test crate for cross-subsystem flows.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Shared evidence and transaction builders
//! └── integration/      # Cross-subsystem choreography
//!     ├── dispute_flow.rs       # evidence → verdict → claim
//!     └── projector_rebuild.rs  # replay equivalence
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ab-tests
//!
//! # By category
//! cargo test -p ab-tests integration::dispute_flow
//! cargo test -p ab-tests integration::projector_rebuild
//! ```

pub mod fixtures;
pub mod integration;
