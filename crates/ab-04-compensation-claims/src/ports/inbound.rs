//! # Inbound Port
//!
//! What callers may ask of the claim orchestrator.

use crate::domain::{ClaimError, ClaimOutcome, ClaimRequest};
use async_trait::async_trait;
use tokio::sync::watch;

/// Claim orchestration API - inbound port.
#[async_trait]
pub trait ClaimApi: Send + Sync {
    /// Drive a claim end to end: submit evidence if the claim type
    /// requires an oracle (reusing a recorded request where one is
    /// still live), poll to a terminal verdict, then submit the claim
    /// and wait for its confirmation.
    ///
    /// Cancellation stops local polling only.
    async fn execute(
        &self,
        request: ClaimRequest,
        cancel: watch::Receiver<bool>,
    ) -> Result<ClaimOutcome, ClaimError>;

    /// Submit the claim right now if its precondition currently holds:
    /// one status read, no polling loop. Fails with
    /// [`ClaimError::VerdictPending`] while the oracle is still
    /// verifying (or no evidence was ever submitted) and
    /// [`ClaimError::VerdictFailed`] after a failed verdict.
    async fn try_claim(&self, request: &ClaimRequest) -> Result<ClaimOutcome, ClaimError>;
}
