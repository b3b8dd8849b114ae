//! # AB-04 Compensation Claims
//!
//! Per-claim-type evidence preconditions and the claim attempt state
//! machine.
//!
//! ## Purpose
//!
//! A compensation claim against an arbitrator is an on-chain
//! transaction, but most claim types must first prove something off
//! chain. This crate decides, per claim type, which oracle verdict (if
//! any) must precede the claim, drives the oracle client to a terminal
//! verdict, and then submits the claim:
//!
//! | Claim type | Oracle required | Precondition |
//! |---|---|---|
//! | `Timeout` | none | always submittable |
//! | `ArbitratorFee` | none | always submittable |
//! | `IllegalSignature` | signature-validation | verdict `Verified` |
//! | `FailedArbitration` | zero-knowledge proof | verdict `Verified` |
//!
//! A `Failed` verdict is a dead end for the attempt: the claim is never
//! submitted and the caller may resubmit fresh evidence. A rejected or
//! reverted claim submission returns the attempt to `NotStarted`; nothing
//! retries automatically.
//!
//! ## Module Structure
//!
//! ```text
//! ab-04-compensation-claims/
//! ├── domain/    # ClaimPhase machine, attempt entity, errors
//! ├── ports/     # ClaimApi (inbound), ArbitrationLedger (outbound)
//! └── service.rs # ClaimOrchestrator
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use domain::{ClaimAttempt, ClaimError, ClaimOutcome, ClaimPhase, ClaimReceipt, ClaimRequest};
pub use ports::{ArbitrationLedger, ClaimApi, MockArbitrationLedger, SubmittedClaim};
pub use service::ClaimOrchestrator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
