//! # Domain Errors
//!
//! Error types for claim orchestration. Precondition failures are the
//! caller-facing vocabulary: "verdict pending" and "verdict failed" are
//! what the UI layer switches on.

use ab_02_oracle_client::OracleError;
use shared_types::{ClaimType, OracleKind, VerificationStatus};
use thiserror::Error;

/// Claim orchestration error types.
#[derive(Debug, Error)]
pub enum ClaimError {
    /// The required oracle has not reached a verdict; the claim must
    /// not be submitted yet.
    #[error("Oracle verdict pending (status {status}); cannot claim yet")]
    VerdictPending {
        /// Last observed verification status.
        status: VerificationStatus,
    },

    /// The oracle rejected the evidence; this attempt is dead. The
    /// caller may resubmit fresh evidence as a new attempt.
    #[error("Oracle rejected the evidence; claim cannot be submitted")]
    VerdictFailed,

    /// The claim type requires oracle evidence and none was provided or
    /// previously recorded.
    #[error("Claim type {claim_type} requires oracle evidence")]
    MissingEvidence {
        /// The claim type in question.
        claim_type: ClaimType,
    },

    /// Evidence was provided for the wrong oracle.
    #[error("Evidence for {provided} oracle does not satisfy {claim_type}")]
    EvidenceMismatch {
        /// The claim type in question.
        claim_type: ClaimType,
        /// Oracle kind the provided evidence addresses.
        provided: OracleKind,
    },

    /// The claim call needs an arbiter address.
    #[error("Claim type {claim_type} requires an arbiter address")]
    MissingArbiter {
        /// The claim type in question.
        claim_type: ClaimType,
    },

    /// Invalid claim phase transition.
    #[error("Invalid claim transition: {from} -> {to}")]
    InvalidTransition {
        /// Current phase.
        from: String,
        /// Attempted phase.
        to: String,
    },

    /// The ledger rejected or reverted the claim transaction. The
    /// attempt is back at `NotStarted`; nothing retries automatically.
    #[error("Claim submission failed: {0}")]
    Submission(String),

    /// Oracle client failure (submission rejection, transport,
    /// cancellation, duplicate request).
    #[error(transparent)]
    Oracle(#[from] OracleError),
}
