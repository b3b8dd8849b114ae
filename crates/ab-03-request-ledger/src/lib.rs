//! # AB-03 Local Request Ledger
//!
//! Durable mapping from a dispute subject to its outstanding oracle
//! request, so a process restart does not lose track of an in-flight
//! verification, and so at most one active request exists per
//! `(transaction, oracle kind)` pair.
//!
//! ## Purpose
//!
//! Oracle requests are long-lived: evidence is submitted in one session
//! and the verdict may only arrive after a reload. The ledger records the
//! oracle-assigned request handle the moment it is known and keeps it
//! until the request reaches a terminal status. Storage is a flat
//! append-only list per oracle kind, persisted as JSON and loaded fully
//! into memory at open. The data set is bounded by per-transaction,
//! per-user evidence submissions, not by chain volume.
//!
//! ## Module Structure
//!
//! ```text
//! ab-03-request-ledger/
//! ├── domain/    # VerificationRequest, errors
//! ├── ports.rs   # RequestRepository
//! └── adapters/  # JSON file store, in-memory store
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::{InMemoryRepository, JsonFileRepository};
pub use domain::{LedgerError, VerificationRequest};
pub use ports::RequestRepository;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
