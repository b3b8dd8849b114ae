//! # Projected Entities
//!
//! Current-state views derived from the event log. All fields are
//! last-write-wins under ordered replay; `CompensationClaim.withdrawn`
//! is additionally monotone false→true.

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use shared_types::{ClaimType, EvmAddress, Hash};

/// Registration status of a dapp, driven solely by ledger events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DAppStatus {
    /// Never seen a status-bearing event.
    #[default]
    None,
    /// Registered, awaiting authorization.
    Pending,
    /// Authorized and operating.
    Active,
    /// Suspended by the protocol.
    Suspended,
    /// Deregistered.
    Terminated,
}

/// A dapp registered with the protocol.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DApp {
    /// Contract address (natural key).
    pub address: EvmAddress,
    /// Owner, once a registration event has been seen.
    pub owner: Option<EvmAddress>,
    /// Current status.
    pub status: DAppStatus,
}

/// A compensation claim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationClaim {
    /// Claim id (natural key).
    pub id: Hash,
    /// Category; unknown until the claim event has been seen.
    pub claim_type: Option<ClaimType>,
    /// Who claims.
    pub claimer: Option<EvmAddress>,
    /// Arbitrator claimed against.
    pub arbiter: Option<EvmAddress>,
    /// Monotone false→true, never reverts.
    pub withdrawn: bool,
    /// Amount awarded.
    pub amount: U256,
}

/// A protocol configuration value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    /// Config key (natural key).
    pub key: String,
    /// Current value; last write wins.
    pub value: u64,
}

/// Ownership of one arbitrator-position NFT.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftOwnership {
    /// Token id (natural key).
    pub token_id: U256,
    /// Current owner; one at a time.
    pub owner: EvmAddress,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dapp_defaults() {
        let dapp = DApp::default();
        assert_eq!(dapp.status, DAppStatus::None);
        assert!(dapp.owner.is_none());
    }

    #[test]
    fn test_claim_defaults() {
        let claim = CompensationClaim::default();
        assert!(claim.claim_type.is_none());
        assert!(!claim.withdrawn);
        assert_eq!(claim.amount, U256::zero());
    }
}
