//! # Projector Domain
//!
//! The closed event vocabulary, the projected entities, and errors.

pub mod entities;
pub mod errors;
pub mod events;

pub use entities::{CompensationClaim, ConfigEntry, DApp, DAppStatus, NftOwnership};
pub use errors::ProjectionError;
pub use events::{EventPosition, LedgerEvent, OrderedEvent};
