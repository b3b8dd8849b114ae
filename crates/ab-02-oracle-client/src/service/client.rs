//! # Oracle Client Service
//!
//! Ties the outbound RPC port, the request ledger, and the verdict
//! decoders into the caller-facing submit/poll API.

use crate::config::OracleClientConfig;
use crate::domain::{
    decode_signature_record, decode_zk_record, OracleError, OracleEvidence, OracleVerdict,
    SignatureAlgo, SignatureEvidence, ZkProofEvidence,
};
use crate::ports::{OracleClientApi, OracleRpc};
use ab_01_signature_codec::{is_valid_public_key, parse_transaction_bytes, to_transport_signature};
use ab_03_request_ledger::{LedgerError, RequestRepository};
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{OracleKind, RequestId, TxId};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info};

/// Verification oracle client.
///
/// Generic over the RPC transport and the request repository so tests
/// inject doubles and production injects the real endpoints.
pub struct OracleClient<R: OracleRpc, S: RequestRepository> {
    rpc: Arc<R>,
    requests: Arc<S>,
    config: OracleClientConfig,
    // Terminal verdicts never change; cache them so polling is monotone
    // even against a misbehaving transport.
    terminal: RwLock<HashMap<(OracleKind, RequestId), OracleVerdict>>,
}

impl<R: OracleRpc, S: RequestRepository> OracleClient<R, S> {
    /// Create a new client.
    pub fn new(rpc: Arc<R>, requests: Arc<S>, config: OracleClientConfig) -> Self {
        Self {
            rpc,
            requests,
            config,
            terminal: RwLock::new(HashMap::new()),
        }
    }

    /// The request repository this client records into.
    pub fn requests(&self) -> &Arc<S> {
        &self.requests
    }

    fn validate_evidence(evidence: &OracleEvidence) -> Result<(), OracleError> {
        match evidence {
            OracleEvidence::Signature(e) => {
                if !is_valid_public_key(&e.pub_key) {
                    return Err(OracleError::SubmissionRejected(
                        "public key is not a valid curve point".into(),
                    ));
                }
                Ok(())
            }
            OracleEvidence::ZkProof(e) => {
                if !is_valid_public_key(&e.pub_key) {
                    return Err(OracleError::SubmissionRejected(
                        "public key is not a valid curve point".into(),
                    ));
                }
                let tx = parse_transaction_bytes(&e.raw_tx)
                    .map_err(|err| OracleError::SubmissionRejected(err.to_string()))?;
                if e.input_index as usize >= tx.inputs.len() {
                    return Err(OracleError::SubmissionRejected(format!(
                        "input index {} out of range for {} inputs",
                        e.input_index,
                        tx.inputs.len()
                    )));
                }
                if e.utxos.is_empty() {
                    return Err(OracleError::SubmissionRejected("UTXO list is empty".into()));
                }
                Ok(())
            }
        }
    }

    /// Shape the wallet-native signature into the oracle's transport
    /// encoding: DER for ECDSA, raw 64 bytes for Schnorr.
    fn shape_signature(evidence: &SignatureEvidence) -> Result<Vec<u8>, OracleError> {
        match evidence.algo {
            SignatureAlgo::Ecdsa => to_transport_signature(&evidence.raw_signature)
                .map_err(|e| OracleError::SubmissionRejected(e.to_string())),
            SignatureAlgo::Schnorr => {
                if evidence.raw_signature.len() != 64 {
                    return Err(OracleError::SubmissionRejected(format!(
                        "Schnorr signature must be 64 bytes, got {}",
                        evidence.raw_signature.len()
                    )));
                }
                Ok(evidence.raw_signature.clone())
            }
        }
    }

    async fn submit_to_oracle(&self, evidence: &OracleEvidence) -> Result<RequestId, OracleError> {
        match evidence {
            OracleEvidence::Signature(e) => {
                let shaped = Self::shape_signature(e)?;
                self.rpc
                    .submit(e.msg_hash, e.algo, shaped, e.pub_key.clone())
                    .await
            }
            OracleEvidence::ZkProof(e) => {
                self.rpc
                    .submit_arbitration(
                        e.pub_key.clone(),
                        e.raw_tx.clone(),
                        e.utxos.clone(),
                        e.input_index,
                        e.signature_index,
                    )
                    .await
            }
        }
    }

    fn record_poll_outcome(&self, kind: OracleKind, request_id: RequestId, verdict: &OracleVerdict) {
        // The ledger is keyed by subject; resolve the subject from the
        // recorded handle. Requests submitted outside this ledger are
        // simply not tracked.
        let entry = self
            .requests
            .all_requests(kind)
            .into_iter()
            .find(|r| r.request_id == request_id);
        let Some(entry) = entry else {
            debug!(
                "[ab-02] Poll outcome for untracked request {} not recorded",
                request_id
            );
            return;
        };
        if let Err(e) = self
            .requests
            .mark_status(entry.transaction_id, kind, verdict.status())
        {
            debug!("[ab-02] Failed to record poll outcome: {}", e);
        }
    }
}

#[async_trait]
impl<R: OracleRpc, S: RequestRepository> OracleClientApi for OracleClient<R, S> {
    async fn submit(
        &self,
        tx_id: TxId,
        evidence: OracleEvidence,
    ) -> Result<RequestId, OracleError> {
        let kind = evidence.kind();
        Self::validate_evidence(&evidence)?;

        // Reject before submission; two live oracle requests for one
        // claim would be unresolvable.
        if let Some(existing) = self.requests.lookup(tx_id, kind) {
            if existing.is_active() {
                return Err(OracleError::Ledger(LedgerError::DuplicateActiveRequest {
                    tx_id,
                    oracle_kind: kind,
                }));
            }
        }

        let request_id = self.submit_to_oracle(&evidence).await?;
        self.requests.record(tx_id, kind, request_id)?;

        info!(
            "[ab-02] Submitted {} evidence for {}: request {}",
            kind, tx_id, request_id
        );
        Ok(request_id)
    }

    async fn poll(
        &self,
        kind: OracleKind,
        request_id: RequestId,
    ) -> Result<OracleVerdict, OracleError> {
        if let Some(verdict) = self.terminal.read().get(&(kind, request_id)) {
            return Ok(verdict.clone());
        }

        let verdict = match kind {
            OracleKind::SignatureValidation => {
                decode_signature_record(&self.rpc.get_verification_result(request_id).await?)
            }
            OracleKind::ZkProof => {
                decode_zk_record(&self.rpc.get_zk_verification(request_id).await?)
            }
        };

        self.record_poll_outcome(kind, request_id, &verdict);
        if verdict.is_terminal() {
            self.terminal
                .write()
                .insert((kind, request_id), verdict.clone());
        }
        Ok(verdict)
    }

    async fn poll_until_terminal(
        &self,
        kind: OracleKind,
        request_id: RequestId,
        mut cancel: watch::Receiver<bool>,
    ) -> Result<OracleVerdict, OracleError> {
        if *cancel.borrow() {
            return Err(OracleError::Cancelled);
        }

        let mut interval =
            tokio::time::interval(Duration::from_millis(self.config.poll_interval_ms));
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let verdict = self.poll(kind, request_id).await?;
                    if verdict.is_terminal() {
                        info!(
                            "[ab-02] Request {} reached terminal verdict: {}",
                            request_id,
                            verdict.status()
                        );
                        return Ok(verdict);
                    }
                    debug!("[ab-02] Request {} still verifying", request_id);
                }
                changed = cancel.changed() => {
                    // A dropped sender means the owning context is gone;
                    // treat it the same as an explicit cancel.
                    if changed.is_err() || *cancel.borrow() {
                        info!("[ab-02] Polling cancelled for request {}", request_id);
                        return Err(OracleError::Cancelled);
                    }
                }
            }
        }
    }
}
