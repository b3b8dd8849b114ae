//! # Claim Orchestrator
//!
//! Application service driving one claim attempt: evidence, verdict,
//! claim submission, confirmation. Verdict handling is uniform over
//! [`OracleVerdict`]; the only per-claim-type knowledge is the required
//! oracle kind and which ledger call to make.

use crate::domain::{ClaimAttempt, ClaimError, ClaimOutcome, ClaimPhase, ClaimRequest};
use crate::ports::{ArbitrationLedger, ClaimApi};
use ab_02_oracle_client::{OracleClientApi, OracleVerdict};
use ab_03_request_ledger::RequestRepository;
use async_trait::async_trait;
use shared_types::{ClaimType, OracleKind, RequestId, VerificationStatus};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};

/// Compensation claim orchestrator.
///
/// Generic over the oracle client, the arbitration ledger, and the
/// request repository; all three are injected.
pub struct ClaimOrchestrator<O, L, S> {
    oracle: Arc<O>,
    ledger: Arc<L>,
    requests: Arc<S>,
}

impl<O, L, S> ClaimOrchestrator<O, L, S>
where
    O: OracleClientApi,
    L: ArbitrationLedger,
    S: RequestRepository,
{
    /// Create a new orchestrator.
    pub fn new(oracle: Arc<O>, ledger: Arc<L>, requests: Arc<S>) -> Self {
        Self {
            oracle,
            ledger,
            requests,
        }
    }

    /// Find or create the oracle request backing this claim.
    ///
    /// A recorded request that is still live (or already verified) is
    /// reused, which is what lets a reloaded session resume polling
    /// instead of double-submitting. Only a failed (or absent) record
    /// consumes the fresh evidence from the request.
    async fn ensure_evidence_request(
        &self,
        request: &ClaimRequest,
        kind: OracleKind,
    ) -> Result<RequestId, ClaimError> {
        if let Some(entry) = self.requests.lookup(request.tx_id, kind) {
            if entry.status != VerificationStatus::Failed {
                info!(
                    "[ab-04] Reusing recorded {} request {} for {}",
                    kind, entry.request_id, request.tx_id
                );
                return Ok(entry.request_id);
            }
        }

        let evidence = request
            .evidence
            .clone()
            .ok_or(ClaimError::MissingEvidence {
                claim_type: request.claim_type,
            })?;
        if evidence.kind() != kind {
            return Err(ClaimError::EvidenceMismatch {
                claim_type: request.claim_type,
                provided: evidence.kind(),
            });
        }
        Ok(self.oracle.submit(request.tx_id, evidence).await?)
    }

    /// Dispatch to the claim call matching the claim type.
    async fn submit_claim_transaction(
        &self,
        request: &ClaimRequest,
        evidence: Option<RequestId>,
    ) -> Result<crate::domain::ClaimReceipt, ClaimError> {
        match request.claim_type {
            ClaimType::Timeout => self.ledger.claim_timeout_compensation(request.tx_id).await,
            ClaimType::ArbitratorFee => self.ledger.claim_arbitrator_fee(request.tx_id).await,
            ClaimType::IllegalSignature => {
                let arbiter = request.arbiter.ok_or(ClaimError::MissingArbiter {
                    claim_type: request.claim_type,
                })?;
                let evidence = evidence.ok_or(ClaimError::MissingEvidence {
                    claim_type: request.claim_type,
                })?;
                self.ledger
                    .claim_illegal_signature_compensation(arbiter, evidence)
                    .await
            }
            ClaimType::FailedArbitration => {
                let evidence = evidence.ok_or(ClaimError::MissingEvidence {
                    claim_type: request.claim_type,
                })?;
                self.ledger
                    .claim_failed_arbitration_compensation(evidence)
                    .await
            }
        }
    }

    /// Submit the claim and observe its confirmation, restarting the
    /// attempt on any failure.
    async fn submit_and_confirm(
        &self,
        request: &ClaimRequest,
        attempt: &mut ClaimAttempt,
        evidence: Option<RequestId>,
    ) -> Result<ClaimOutcome, ClaimError> {
        let receipt = match self.submit_claim_transaction(request, evidence).await {
            Ok(receipt) => receipt,
            Err(e) => {
                warn!(
                    "[ab-04] {} claim for {} rejected: {}",
                    request.claim_type, request.tx_id, e
                );
                attempt.restart();
                return Err(e);
            }
        };
        attempt.transition_to(ClaimPhase::ClaimSubmitted)?;

        if let Err(e) = self.ledger.await_confirmation(&receipt).await {
            warn!(
                "[ab-04] {} claim for {} did not confirm: {}",
                request.claim_type, request.tx_id, e
            );
            attempt.restart();
            return Err(e);
        }
        attempt.transition_to(ClaimPhase::ClaimConfirmed)?;

        info!(
            "[ab-04] {} claim for {} confirmed",
            request.claim_type, request.tx_id
        );
        Ok(ClaimOutcome { receipt, evidence })
    }
}

#[async_trait]
impl<O, L, S> ClaimApi for ClaimOrchestrator<O, L, S>
where
    O: OracleClientApi,
    L: ArbitrationLedger,
    S: RequestRepository,
{
    async fn execute(
        &self,
        request: ClaimRequest,
        cancel: watch::Receiver<bool>,
    ) -> Result<ClaimOutcome, ClaimError> {
        let mut attempt = ClaimAttempt::new(request.tx_id, request.claim_type);

        let evidence = match request.claim_type.required_oracle() {
            None => None,
            Some(kind) => {
                let request_id = self.ensure_evidence_request(&request, kind).await?;
                attempt.transition_to(ClaimPhase::EvidenceSubmitted)?;
                attempt.request_id = Some(request_id);

                attempt.transition_to(ClaimPhase::Polling)?;
                match self
                    .oracle
                    .poll_until_terminal(kind, request_id, cancel)
                    .await?
                {
                    OracleVerdict::Verified(_) => {
                        attempt.transition_to(ClaimPhase::Verified)?;
                        Some(request_id)
                    }
                    OracleVerdict::Failed => {
                        attempt.transition_to(ClaimPhase::Failed)?;
                        return Err(ClaimError::VerdictFailed);
                    }
                    OracleVerdict::Verifying => {
                        return Err(ClaimError::VerdictPending {
                            status: VerificationStatus::Verifying,
                        });
                    }
                }
            }
        };

        self.submit_and_confirm(&request, &mut attempt, evidence)
            .await
    }

    async fn try_claim(&self, request: &ClaimRequest) -> Result<ClaimOutcome, ClaimError> {
        let mut attempt = ClaimAttempt::new(request.tx_id, request.claim_type);

        let evidence = match request.claim_type.required_oracle() {
            None => None,
            Some(kind) => {
                let entry = self.requests.lookup(request.tx_id, kind).ok_or(
                    ClaimError::VerdictPending {
                        status: VerificationStatus::Unknown,
                    },
                )?;
                match self.oracle.poll(kind, entry.request_id).await? {
                    OracleVerdict::Verified(_) => {
                        attempt.transition_to(ClaimPhase::EvidenceSubmitted)?;
                        attempt.transition_to(ClaimPhase::Polling)?;
                        attempt.transition_to(ClaimPhase::Verified)?;
                        Some(entry.request_id)
                    }
                    OracleVerdict::Verifying => {
                        return Err(ClaimError::VerdictPending {
                            status: VerificationStatus::Verifying,
                        });
                    }
                    OracleVerdict::Failed => return Err(ClaimError::VerdictFailed),
                }
            }
        };

        self.submit_and_confirm(request, &mut attempt, evidence)
            .await
    }
}
