//! # Ports
//!
//! Inbound claim API and the outbound arbitration ledger.

pub mod inbound;
pub mod outbound;

pub use inbound::ClaimApi;
pub use outbound::{ArbitrationLedger, MockArbitrationLedger, SubmittedClaim};
