//! # In-Memory Repository
//!
//! Volatile store for tests and short-lived tooling. Same semantics as
//! the durable store, minus persistence.

use crate::domain::{LedgerError, VerificationRequest};
use crate::ports::RequestRepository;
use parking_lot::RwLock;
use shared_types::{OracleKind, RequestId, TxId, VerificationStatus};

/// Volatile request store.
#[derive(Default)]
pub struct InMemoryRepository {
    entries: RwLock<Vec<VerificationRequest>>,
}

impl InMemoryRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RequestRepository for InMemoryRepository {
    fn lookup(&self, tx_id: TxId, kind: OracleKind) -> Option<VerificationRequest> {
        self.entries
            .read()
            .iter()
            .rev()
            .find(|r| r.transaction_id == tx_id && r.oracle_kind == kind)
            .cloned()
    }

    fn record(
        &self,
        tx_id: TxId,
        kind: OracleKind,
        request_id: RequestId,
    ) -> Result<(), LedgerError> {
        let mut entries = self.entries.write();
        let active = entries
            .iter()
            .rev()
            .find(|r| r.transaction_id == tx_id && r.oracle_kind == kind)
            .map(|r| r.is_active())
            .unwrap_or(false);
        if active {
            return Err(LedgerError::DuplicateActiveRequest {
                tx_id,
                oracle_kind: kind,
            });
        }
        entries.push(VerificationRequest::new(tx_id, kind, request_id));
        Ok(())
    }

    fn mark_status(
        &self,
        tx_id: TxId,
        kind: OracleKind,
        status: VerificationStatus,
    ) -> Result<(), LedgerError> {
        let mut entries = self.entries.write();
        let entry = entries
            .iter_mut()
            .rev()
            .find(|r| r.transaction_id == tx_id && r.oracle_kind == kind)
            .ok_or(LedgerError::NotFound {
                tx_id,
                oracle_kind: kind,
            })?;
        if entry.status.can_transition_to(status) {
            entry.status = status;
        }
        Ok(())
    }

    fn all_requests(&self, kind: OracleKind) -> Vec<VerificationRequest> {
        self.entries
            .read()
            .iter()
            .filter(|r| r.oracle_kind == kind)
            .cloned()
            .collect()
    }

    fn close(&self) -> Result<(), LedgerError> {
        Ok(())
    }
}
