//! # Request Ledger Domain
//!
//! Entities and errors for the local request ledger.

pub mod entities;
pub mod errors;

pub use entities::VerificationRequest;
pub use errors::LedgerError;
