//! # Domain Entities
//!
//! The claim request, the attempt tracking one run of the state
//! machine, and the submission receipt.

use super::errors::ClaimError;
use super::phase::ClaimPhase;
use ab_02_oracle_client::OracleEvidence;
use serde::{Deserialize, Serialize};
use shared_types::{ClaimType, EvmAddress, Hash, RequestId, TxId};

/// What a caller asks the orchestrator to do.
#[derive(Clone, Debug)]
pub struct ClaimRequest {
    /// The dispute subject.
    pub tx_id: TxId,
    /// Category of compensation requested.
    pub claim_type: ClaimType,
    /// Arbitrator being claimed against, where the claim call needs it.
    pub arbiter: Option<EvmAddress>,
    /// Fresh oracle evidence, when the claim type requires one and no
    /// recorded request can be reused.
    pub evidence: Option<OracleEvidence>,
}

impl ClaimRequest {
    /// A claim with no oracle evidence attached.
    pub fn bare(tx_id: TxId, claim_type: ClaimType) -> Self {
        Self {
            tx_id,
            claim_type,
            arbiter: None,
            evidence: None,
        }
    }
}

/// Receipt of a submitted claim transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimReceipt {
    /// Hash of the submission transaction.
    pub submission_hash: Hash,
}

/// Result of a confirmed claim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimOutcome {
    /// Receipt of the confirmed submission.
    pub receipt: ClaimReceipt,
    /// Oracle request that served as evidence, when one was required.
    pub evidence: Option<RequestId>,
}

/// One run of the claim state machine.
#[derive(Clone, Debug)]
pub struct ClaimAttempt {
    /// The dispute subject.
    pub tx_id: TxId,
    /// Category of compensation requested.
    pub claim_type: ClaimType,
    /// Current phase.
    pub phase: ClaimPhase,
    /// Oracle request backing this attempt, once assigned.
    pub request_id: Option<RequestId>,
}

impl ClaimAttempt {
    /// Start a fresh attempt.
    pub fn new(tx_id: TxId, claim_type: ClaimType) -> Self {
        Self {
            tx_id,
            claim_type,
            phase: ClaimPhase::NotStarted,
            request_id: None,
        }
    }

    /// Transition to a new phase.
    pub fn transition_to(&mut self, next: ClaimPhase) -> Result<(), ClaimError> {
        if !self.phase.can_transition_to(next) {
            return Err(ClaimError::InvalidTransition {
                from: format!("{:?}", self.phase),
                to: format!("{:?}", next),
            });
        }
        self.phase = next;
        Ok(())
    }

    /// A failed submission returns the attempt to `NotStarted`; the
    /// assigned oracle request (if any) stays usable for a retry.
    pub fn restart(&mut self) {
        self.phase = ClaimPhase::NotStarted;
    }
}
