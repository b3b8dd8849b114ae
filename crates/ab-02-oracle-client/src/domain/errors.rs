//! # Domain Errors
//!
//! Error types for the oracle client. Submission rejections and terminal
//! failures are surfaced to the caller; nothing is retried automatically.

use ab_03_request_ledger::LedgerError;
use shared_types::RequestId;
use thiserror::Error;

/// Oracle client error types.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The oracle (or local payload validation) rejected the evidence
    /// synchronously. Not retried; the caller decides what to fix.
    #[error("Submission rejected: {0}")]
    SubmissionRejected(String),

    /// The oracle endpoint could not be reached or answered garbage.
    #[error("Oracle transport error: {0}")]
    Transport(String),

    /// The oracle does not know this request id.
    #[error("Unknown request id: {0}")]
    UnknownRequest(RequestId),

    /// The caller cancelled polling. Oracle-side state is untouched.
    #[error("Polling cancelled")]
    Cancelled,

    /// Request ledger rejected the operation.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
