//! # Adapters
//!
//! Concrete implementations of the outbound oracle RPC port.

pub mod mock_rpc;

pub use mock_rpc::MockOracleRpc;
