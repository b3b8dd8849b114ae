//! # Domain Errors
//!
//! Error types for the local request ledger.

use shared_types::{OracleKind, TxId};
use thiserror::Error;

/// Request ledger error types.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// An active (non-terminal) request already exists for the key.
    /// Callers must poll it to a terminal status before resubmitting.
    #[error("Duplicate active request for {tx_id} ({oracle_kind})")]
    DuplicateActiveRequest {
        /// The dispute subject.
        tx_id: TxId,
        /// The oracle kind the key refers to.
        oracle_kind: OracleKind,
    },

    /// No recorded request for the key.
    #[error("No recorded request for {tx_id} ({oracle_kind})")]
    NotFound {
        /// The dispute subject.
        tx_id: TxId,
        /// The oracle kind the key refers to.
        oracle_kind: OracleKind,
    },

    /// The backing file could not be read or written.
    #[error("Ledger I/O error: {0}")]
    Io(String),

    /// The backing file does not parse as the expected JSON layout.
    #[error("Ledger corrupt: {0}")]
    Corrupt(String),

    /// Another process holds the ledger lock.
    #[error("Ledger locked by another process: {0}")]
    Locked(String),
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Io(err.to_string())
    }
}
