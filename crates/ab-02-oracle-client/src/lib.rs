//! # AB-02 Verification Oracle Client
//!
//! Drives an opaque off-chain verification oracle through
//! submit → poll → terminal verdict, for either oracle kind, with one
//! state-machine shape.
//!
//! ## Purpose
//!
//! Dispute evidence is verified off-chain by one of two independent
//! services: a zero-knowledge proof oracle (full transaction proofs) and
//! a signature-validation oracle (single signatures). Both expose the
//! same asynchronous contract: submit evidence, receive an opaque request
//! handle, poll until the oracle records a terminal verdict.
//!
//! The client decodes each oracle's raw response into the shared
//! [`OracleVerdict`] variant, so callers never branch on oracle kind.
//! Terminal verdicts are cached: once `Verified` or `Failed` is observed
//! for a request, every later poll returns the same value.
//!
//! ## State Machine
//!
//! ```text
//! Unknown ──submit──→ Verifying ──poll──→ Verified
//!                         │
//!                         └────poll──→ Failed
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! ab-02-oracle-client/
//! ├── domain/    # evidence payloads, verdict variant, decoders, errors
//! ├── ports/     # OracleClientApi (inbound), OracleRpc (outbound)
//! ├── adapters/  # scriptable mock RPC
//! ├── service/   # OracleClient, cancellable poller
//! └── config.rs  # poll interval
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::MockOracleRpc;
pub use config::OracleClientConfig;
pub use domain::{
    decode_signature_record, decode_zk_record, OracleError, OracleEvidence, OracleVerdict,
    SignatureAlgo, SignatureEvidence, SignatureVerificationRecord, VerifiedRecord,
    ZkProofEvidence, ZkVerificationRecord,
};
pub use ports::{OracleClientApi, OracleRpc};
pub use service::OracleClient;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    #[allow(clippy::const_is_empty)]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
