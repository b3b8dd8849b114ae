//! # Repository Port
//!
//! The request ledger is injected into the oracle client and the claim
//! orchestrator as an explicit repository object with its own lifecycle,
//! never reached through a process-wide singleton.

use crate::domain::{LedgerError, VerificationRequest};
use shared_types::{OracleKind, RequestId, TxId, VerificationStatus};

/// Durable store of oracle verification requests.
///
/// Implementations serialize all access internally; callers may share one
/// repository across concurrent dispute flows.
pub trait RequestRepository: Send + Sync {
    /// Most recent request recorded for the key, if any.
    fn lookup(&self, tx_id: TxId, kind: OracleKind) -> Option<VerificationRequest>;

    /// Record a newly assigned request handle.
    ///
    /// Append-only. Fails with [`LedgerError::DuplicateActiveRequest`]
    /// when the key already has a non-terminal entry.
    fn record(
        &self,
        tx_id: TxId,
        kind: OracleKind,
        request_id: RequestId,
    ) -> Result<(), LedgerError>;

    /// Update the last known poll outcome for the key's most recent entry.
    ///
    /// The request id is immutable; only the status changes, and only
    /// along valid transitions (terminal states absorb).
    fn mark_status(
        &self,
        tx_id: TxId,
        kind: OracleKind,
        status: VerificationStatus,
    ) -> Result<(), LedgerError>;

    /// All recorded requests for one oracle kind, in record order.
    fn all_requests(&self, kind: OracleKind) -> Vec<VerificationRequest>;

    /// Flush and release the store. Mutations after close fail; lookups
    /// return nothing.
    fn close(&self) -> Result<(), LedgerError>;
}
