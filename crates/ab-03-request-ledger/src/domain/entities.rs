//! # Domain Entities
//!
//! The persisted record of one oracle verification request.

use serde::{Deserialize, Serialize};
use shared_types::{OracleKind, RequestId, TxId, VerificationStatus};

/// One recorded oracle request.
///
/// `request_id` is immutable once assigned; `status` tracks the last
/// known poll outcome. Records are never deleted; a terminal status is
/// what frees the `(transaction, oracle kind)` key for a new request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    /// The dispute subject.
    pub transaction_id: TxId,
    /// Which oracle the evidence went to.
    pub oracle_kind: OracleKind,
    /// Oracle-assigned handle.
    pub request_id: RequestId,
    /// Last known poll outcome.
    #[serde(default)]
    pub status: VerificationStatus,
}

impl VerificationRequest {
    /// A freshly recorded request: handle assigned, never polled.
    pub fn new(transaction_id: TxId, oracle_kind: OracleKind, request_id: RequestId) -> Self {
        Self {
            transaction_id,
            oracle_kind,
            request_id,
            status: VerificationStatus::Unknown,
        }
    }

    /// Whether this entry still blocks a new request for its key.
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }
}
