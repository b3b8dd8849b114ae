//! # Ports
//!
//! Inbound API for callers and outbound trait for the oracle RPC
//! endpoints.

pub mod inbound;
pub mod outbound;

pub use inbound::OracleClientApi;
pub use outbound::OracleRpc;
