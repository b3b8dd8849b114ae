//! # Integration Flows
//!
//! Cross-subsystem choreography: evidence submission through oracle
//! verdicts to on-chain claims, and projector replay equivalence.

pub mod dispute_flow;
pub mod projector_rebuild;
