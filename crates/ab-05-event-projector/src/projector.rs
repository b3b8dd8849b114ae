//! # Projection Store
//!
//! Entity tables plus the single event dispatcher. One writer applies
//! events in order; readers query concurrently through the shared lock.

use crate::domain::{
    CompensationClaim, ConfigEntry, DApp, DAppStatus, EventPosition, LedgerEvent, NftOwnership,
    OrderedEvent, ProjectionError,
};
use parking_lot::RwLock;
use primitive_types::U256;
use shared_types::{EvmAddress, Hash};
use std::collections::HashMap;
use tracing::{debug, warn};

/// All projected state at a point in the log.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectionSnapshot {
    /// Dapps by address.
    pub dapps: HashMap<EvmAddress, DApp>,
    /// Claims by id.
    pub claims: HashMap<Hash, CompensationClaim>,
    /// Config entries by key.
    pub config: HashMap<String, ConfigEntry>,
    /// NFT ownership by token id.
    pub nfts: HashMap<U256, NftOwnership>,
    /// Last applied position.
    pub last_position: Option<EventPosition>,
}

/// The event-sourced read model.
#[derive(Default)]
pub struct ProjectionStore {
    inner: RwLock<ProjectionSnapshot>,
}

impl ProjectionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event.
    ///
    /// Events must arrive in emission order. An event at the last
    /// applied position is treated as an at-least-once redelivery and
    /// reapplied (all upserts are idempotent); an event behind it is
    /// fatal for the replay pass and leaves the store at the last
    /// successfully applied event.
    pub fn apply(&self, event: &OrderedEvent) -> Result<(), ProjectionError> {
        let mut tables = self.inner.write();
        if let Some(last) = tables.last_position {
            if event.position < last {
                warn!(
                    "[ab-05] Halting replay: event at {} behind {}",
                    event.position, last
                );
                return Err(ProjectionError::OutOfOrder {
                    last,
                    got: event.position,
                });
            }
        }

        Self::dispatch(&mut tables, &event.event);
        tables.last_position = Some(event.position);
        debug!("[ab-05] Applied event at {}", event.position);
        Ok(())
    }

    /// Replay a sequence of events, halting on the first error.
    ///
    /// Starting from an empty store this is the full rebuild; starting
    /// from a populated one it is an incremental batch. Any batching of
    /// the same ordered log produces the same snapshot.
    pub fn replay<I>(&self, events: I) -> Result<usize, ProjectionError>
    where
        I: IntoIterator<Item = OrderedEvent>,
    {
        let mut applied = 0;
        for event in events {
            self.apply(&event)?;
            applied += 1;
        }
        Ok(applied)
    }

    /// Clone the full projected state.
    pub fn snapshot(&self) -> ProjectionSnapshot {
        self.inner.read().clone()
    }

    /// Last applied position, if any event has been applied.
    pub fn last_position(&self) -> Option<EventPosition> {
        self.inner.read().last_position
    }

    /// A dapp by address.
    pub fn dapp(&self, address: &EvmAddress) -> Option<DApp> {
        self.inner.read().dapps.get(address).cloned()
    }

    /// A dapp's status; `None` status when the address is unknown.
    pub fn dapp_status(&self, address: &EvmAddress) -> DAppStatus {
        self.inner
            .read()
            .dapps
            .get(address)
            .map(|d| d.status)
            .unwrap_or_default()
    }

    /// A claim by id.
    pub fn claim(&self, id: &Hash) -> Option<CompensationClaim> {
        self.inner.read().claims.get(id).cloned()
    }

    /// A config value by key.
    pub fn config_value(&self, key: &str) -> Option<u64> {
        self.inner.read().config.get(key).map(|c| c.value)
    }

    /// An NFT's current owner.
    pub fn nft_owner(&self, token_id: U256) -> Option<EvmAddress> {
        self.inner.read().nfts.get(&token_id).map(|n| n.owner)
    }

    // =========================================================================
    // DISPATCH + UPSERTS
    // =========================================================================

    /// Route one event to its entity upsert. Every arm follows the same
    /// contract: create the entity with defaults if absent, then apply
    /// the event's field updates in place.
    fn dispatch(tables: &mut ProjectionSnapshot, event: &LedgerEvent) {
        match event {
            LedgerEvent::DAppRegistered { dapp, owner } => {
                let entry = Self::upsert_dapp(tables, *dapp);
                entry.owner = Some(*owner);
                entry.status = DAppStatus::Pending;
            }
            LedgerEvent::DAppAuthorized { dapp } => {
                Self::upsert_dapp(tables, *dapp).status = DAppStatus::Active;
            }
            LedgerEvent::DAppSuspended { dapp } => {
                Self::upsert_dapp(tables, *dapp).status = DAppStatus::Suspended;
            }
            LedgerEvent::DAppDeregistered { dapp } => {
                Self::upsert_dapp(tables, *dapp).status = DAppStatus::Terminated;
            }
            LedgerEvent::CompensationClaimed {
                id,
                claim_type,
                claimer,
                arbiter,
                amount,
            } => {
                let entry = Self::upsert_claim(tables, *id);
                entry.claim_type = Some(*claim_type);
                entry.claimer = Some(*claimer);
                entry.arbiter = Some(*arbiter);
                entry.amount = *amount;
            }
            LedgerEvent::CompensationWithdrawn { id } => {
                Self::upsert_claim(tables, *id).withdrawn = true;
            }
            LedgerEvent::ConfigUpdated { key, value } => {
                tables
                    .config
                    .entry(key.clone())
                    .and_modify(|c| c.value = *value)
                    .or_insert_with(|| ConfigEntry {
                        key: key.clone(),
                        value: *value,
                    });
            }
            LedgerEvent::Transfer { token_id, to, .. } => {
                tables
                    .nfts
                    .entry(*token_id)
                    .and_modify(|n| n.owner = *to)
                    .or_insert_with(|| NftOwnership {
                        token_id: *token_id,
                        owner: *to,
                    });
            }
        }
    }

    fn upsert_dapp(tables: &mut ProjectionSnapshot, address: EvmAddress) -> &mut DApp {
        tables.dapps.entry(address).or_insert_with(|| DApp {
            address,
            ..DApp::default()
        })
    }

    fn upsert_claim(tables: &mut ProjectionSnapshot, id: Hash) -> &mut CompensationClaim {
        tables.claims.entry(id).or_insert_with(|| CompensationClaim {
            id,
            ..CompensationClaim::default()
        })
    }
}
