//! # Inbound Port
//!
//! What callers (the claim orchestrator, UI glue) may ask of the oracle
//! client.

use crate::domain::{OracleError, OracleEvidence, OracleVerdict};
use async_trait::async_trait;
use shared_types::{OracleKind, RequestId, TxId};
use tokio::sync::watch;

/// Oracle client API - inbound port.
#[async_trait]
pub trait OracleClientApi: Send + Sync {
    /// Submit evidence for a dispute subject.
    ///
    /// Enforces at-most-one active request per `(subject, oracle kind)`
    /// through the request ledger, then records the oracle-assigned
    /// handle before returning it.
    async fn submit(
        &self,
        tx_id: TxId,
        evidence: OracleEvidence,
    ) -> Result<RequestId, OracleError>;

    /// Single status read for a request.
    async fn poll(
        &self,
        kind: OracleKind,
        request_id: RequestId,
    ) -> Result<OracleVerdict, OracleError>;

    /// Poll at the configured fixed interval until a terminal verdict or
    /// cancellation.
    ///
    /// Cancellation (the watch flipping to `true`, or its sender being
    /// dropped) stops local polling only; the ledger record and the
    /// oracle-side request are left intact.
    async fn poll_until_terminal(
        &self,
        kind: OracleKind,
        request_id: RequestId,
        cancel: watch::Receiver<bool>,
    ) -> Result<OracleVerdict, OracleError>;
}
