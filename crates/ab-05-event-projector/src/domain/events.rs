//! # Ledger Events
//!
//! The closed set of events the arbitration ledger emits, wrapped in an
//! ordering envelope. Ordering is load-bearing: entity state is
//! last-write-wins, so events must apply in emission order.

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use shared_types::{ClaimType, EvmAddress, Hash};

/// Position of an event in the log: block height, then in-block index.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EventPosition {
    /// Block the event was emitted in.
    pub block_height: u64,
    /// Index of the event within that block.
    pub log_index: u32,
}

impl EventPosition {
    /// Create a position.
    pub fn new(block_height: u64, log_index: u32) -> Self {
        Self {
            block_height,
            log_index,
        }
    }
}

impl std::fmt::Display for EventPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.block_height, self.log_index)
    }
}

/// One event at its position in the log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedEvent {
    /// Emission position.
    pub position: EventPosition,
    /// The event payload.
    pub event: LedgerEvent,
}

impl OrderedEvent {
    /// Wrap an event at a position.
    pub fn new(position: EventPosition, event: LedgerEvent) -> Self {
        Self { position, event }
    }
}

/// The arbitration ledger's event vocabulary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    /// A dapp registered with the protocol; it starts pending review.
    DAppRegistered {
        /// The dapp's contract address.
        dapp: EvmAddress,
        /// The registering owner.
        owner: EvmAddress,
    },
    /// A pending dapp was authorized.
    DAppAuthorized {
        /// The dapp's contract address.
        dapp: EvmAddress,
    },
    /// An active dapp was suspended.
    DAppSuspended {
        /// The dapp's contract address.
        dapp: EvmAddress,
    },
    /// A dapp left the protocol.
    DAppDeregistered {
        /// The dapp's contract address.
        dapp: EvmAddress,
    },
    /// A compensation claim was opened.
    CompensationClaimed {
        /// Claim id assigned by the ledger.
        id: Hash,
        /// Category of the claim.
        claim_type: ClaimType,
        /// Who claims.
        claimer: EvmAddress,
        /// Arbitrator claimed against.
        arbiter: EvmAddress,
        /// Amount awarded.
        amount: U256,
    },
    /// A claim's compensation was withdrawn.
    CompensationWithdrawn {
        /// Claim id assigned by the ledger.
        id: Hash,
    },
    /// A protocol config value changed.
    ConfigUpdated {
        /// Config key.
        key: String,
        /// New value; last write wins.
        value: u64,
    },
    /// An arbitrator-position NFT changed hands.
    Transfer {
        /// Token id.
        token_id: U256,
        /// Previous owner.
        from: EvmAddress,
        /// New owner.
        to: EvmAddress,
    },
}
