//! # Outbound Port
//!
//! The arbitration ledger's claim surface. `evidence` parameters are the
//! oracle request id; the contract reads the oracle's verdict for that
//! handle on-chain.

use crate::domain::{ClaimError, ClaimReceipt};
use async_trait::async_trait;
use shared_types::{EvmAddress, RequestId, TxId};

/// Arbitration ledger claim calls - outbound port.
#[async_trait]
pub trait ArbitrationLedger: Send + Sync {
    /// Claim compensation for an arbitrator timeout.
    async fn claim_timeout_compensation(&self, tx_id: TxId) -> Result<ClaimReceipt, ClaimError>;

    /// Claim the arbitrator's fee.
    async fn claim_arbitrator_fee(&self, tx_id: TxId) -> Result<ClaimReceipt, ClaimError>;

    /// Claim compensation for an illegal arbitrator signature.
    async fn claim_illegal_signature_compensation(
        &self,
        arbiter: EvmAddress,
        evidence: RequestId,
    ) -> Result<ClaimReceipt, ClaimError>;

    /// Claim compensation for a failed arbitration.
    async fn claim_failed_arbitration_compensation(
        &self,
        evidence: RequestId,
    ) -> Result<ClaimReceipt, ClaimError>;

    /// Observe the confirmation of a submitted claim.
    async fn await_confirmation(&self, receipt: &ClaimReceipt) -> Result<(), ClaimError>;
}

// =============================================================================
// Mock Implementation for Testing
// =============================================================================

/// A claim call the mock ledger accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmittedClaim {
    /// `claim_timeout_compensation` call.
    Timeout(TxId),
    /// `claim_arbitrator_fee` call.
    ArbitratorFee(TxId),
    /// `claim_illegal_signature_compensation` call.
    IllegalSignature {
        /// Arbitrator claimed against.
        arbiter: EvmAddress,
        /// Oracle request used as evidence.
        evidence: RequestId,
    },
    /// `claim_failed_arbitration_compensation` call.
    FailedArbitration {
        /// Oracle request used as evidence.
        evidence: RequestId,
    },
}

#[derive(Default)]
struct MockLedgerState {
    reject_reason: Option<String>,
    fail_confirmation: bool,
    submitted: Vec<SubmittedClaim>,
    next_hash: u8,
}

/// Mock arbitration ledger for testing.
#[derive(Default)]
pub struct MockArbitrationLedger {
    state: parking_lot::Mutex<MockLedgerState>,
}

impl MockArbitrationLedger {
    /// Ledger that accepts and confirms every claim.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger that rejects every claim submission.
    pub fn rejecting(reason: &str) -> Self {
        let ledger = Self::default();
        ledger.state.lock().reject_reason = Some(reason.to_string());
        ledger
    }

    /// Ledger that accepts submissions but never confirms them.
    pub fn failing_confirmation() -> Self {
        let ledger = Self::default();
        ledger.state.lock().fail_confirmation = true;
        ledger
    }

    /// Claim calls that reached the ledger, in order.
    pub fn submissions(&self) -> Vec<SubmittedClaim> {
        self.state.lock().submitted.clone()
    }

    fn accept(&self, claim: SubmittedClaim) -> Result<ClaimReceipt, ClaimError> {
        let mut state = self.state.lock();
        if let Some(reason) = &state.reject_reason {
            return Err(ClaimError::Submission(reason.clone()));
        }
        state.next_hash += 1;
        state.submitted.push(claim);
        Ok(ClaimReceipt {
            submission_hash: [state.next_hash; 32],
        })
    }
}

#[async_trait]
impl ArbitrationLedger for MockArbitrationLedger {
    async fn claim_timeout_compensation(&self, tx_id: TxId) -> Result<ClaimReceipt, ClaimError> {
        self.accept(SubmittedClaim::Timeout(tx_id))
    }

    async fn claim_arbitrator_fee(&self, tx_id: TxId) -> Result<ClaimReceipt, ClaimError> {
        self.accept(SubmittedClaim::ArbitratorFee(tx_id))
    }

    async fn claim_illegal_signature_compensation(
        &self,
        arbiter: EvmAddress,
        evidence: RequestId,
    ) -> Result<ClaimReceipt, ClaimError> {
        self.accept(SubmittedClaim::IllegalSignature { arbiter, evidence })
    }

    async fn claim_failed_arbitration_compensation(
        &self,
        evidence: RequestId,
    ) -> Result<ClaimReceipt, ClaimError> {
        self.accept(SubmittedClaim::FailedArbitration { evidence })
    }

    async fn await_confirmation(&self, _receipt: &ClaimReceipt) -> Result<(), ClaimError> {
        if self.state.lock().fail_confirmation {
            return Err(ClaimError::Submission("transaction reverted".into()));
        }
        Ok(())
    }
}
