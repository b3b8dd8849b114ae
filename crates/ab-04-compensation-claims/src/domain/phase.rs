//! # Claim Attempt Phases
//!
//! One claim attempt walks `NotStarted → EvidenceSubmitted → Polling →
//! Verified → ClaimSubmitted → ClaimConfirmed`. Claim types with no
//! oracle requirement short-circuit `NotStarted → ClaimSubmitted`. A
//! `Failed` oracle verdict dead-ends the attempt; a rejected or reverted
//! claim submission returns it to `NotStarted`.

use serde::{Deserialize, Serialize};

/// Phase of one claim attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimPhase {
    /// Nothing submitted yet.
    #[default]
    NotStarted,
    /// Evidence handed to the oracle, handle assigned.
    EvidenceSubmitted,
    /// Waiting for the oracle's terminal verdict.
    Polling,
    /// Oracle confirmed the evidence; claim may be submitted.
    Verified,
    /// Claim transaction sent to the ledger.
    ClaimSubmitted,
    /// Ledger confirmed the claim.
    ClaimConfirmed,
    /// Oracle rejected the evidence. Dead end for this attempt.
    Failed,
}

impl ClaimPhase {
    /// Check if transition is valid.
    pub fn can_transition_to(&self, next: ClaimPhase) -> bool {
        match (self, next) {
            (Self::NotStarted, Self::EvidenceSubmitted) => true,
            // Oracle-free claim types skip straight to submission.
            (Self::NotStarted, Self::ClaimSubmitted) => true,
            (Self::EvidenceSubmitted, Self::Polling) => true,
            (Self::EvidenceSubmitted, Self::Failed) => true,
            (Self::Polling, Self::Verified) => true,
            (Self::Polling, Self::Failed) => true,
            (Self::Verified, Self::ClaimSubmitted) => true,
            (Self::ClaimSubmitted, Self::ClaimConfirmed) => true,
            // A rejected or reverted submission restarts the attempt.
            (Self::Verified, Self::NotStarted) => true,
            (Self::ClaimSubmitted, Self::NotStarted) => true,
            _ => false,
        }
    }

    /// Check if terminal for this attempt.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::ClaimConfirmed | Self::Failed)
    }
}
