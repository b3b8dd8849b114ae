//! # AB-05 Event Projector
//!
//! Replays the arbitration ledger's ordered, append-only event log into
//! queryable entities: dapp status, compensation claims, protocol
//! config, and NFT ownership.
//!
//! ## Purpose
//!
//! The EVM ledger is the source of truth, but it only exposes an event
//! stream. This crate folds that stream - in strict emission order,
//! deterministically and idempotently - into current-state tables:
//!
//! - events apply through one dispatcher over a closed event enum;
//! - every event upserts: create the entity with type-appropriate
//!   defaults, then apply the event's field updates;
//! - replaying the identical event twice yields the same state, so
//!   at-least-once delivery is safe;
//! - an out-of-order event is fatal for the replay pass - skipping
//!   events would silently corrupt last-write-wins entity state.
//!
//! Full rebuild from the first event is the correctness baseline: any
//! batching of the same ordered log must produce the same snapshot.
//!
//! ## Module Structure
//!
//! ```text
//! ab-05-event-projector/
//! ├── domain/       # event enum, entities, errors
//! └── projector.rs  # ProjectionStore: dispatcher, upserts, queries
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod projector;

// Re-exports
pub use domain::{
    CompensationClaim, ConfigEntry, DApp, DAppStatus, EventPosition, LedgerEvent, NftOwnership,
    OrderedEvent, ProjectionError,
};
pub use projector::{ProjectionSnapshot, ProjectionStore};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
