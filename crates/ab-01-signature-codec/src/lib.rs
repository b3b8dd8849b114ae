//! # AB-01 Signature Codec
//!
//! Lossless, deterministic conversion between wallet-native and
//! chain-native Bitcoin signature and transaction encodings.
//!
//! ## Purpose
//!
//! Wallets produce raw fixed-width `R‖S` signatures; the chain consumes
//! DER-encoded ones. Co-signers must sign the exact witness digest the
//! consensus rules derive from a transaction input. This crate converts
//! between the two worlds:
//!
//! - Raw `R‖S` → DER transport signature (and back, for verification)
//! - Raw transaction hex → parsed transaction
//! - Parsed transaction + input context → witness signing digest
//! - Pure validators for addresses, public keys, and transaction hashes
//! - The explicit endianness bridge between display-order and
//!   chain-boundary transaction ids
//!
//! Pure functions only: no I/O, no hidden state.
//!
//! ## Module Structure
//!
//! ```text
//! ab-01-signature-codec/
//! ├── bytes.rs        # double-SHA-256, endianness bridge
//! ├── der.rs          # raw R‖S <-> DER transport signature
//! ├── transaction.rs  # raw transaction decoder
//! ├── sighash.rs      # witness signing digest
//! └── validate.rs     # address / pubkey / tx-hash predicates
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bytes;
pub mod der;
pub mod errors;
pub mod sighash;
pub mod transaction;
pub mod validate;

// Re-exports
pub use bytes::{chain_order_to_display, display_to_chain_order, double_sha256, reverse_bytes};
pub use der::{parse_transport_signature, to_transport_signature};
pub use errors::CodecError;
pub use sighash::{witness_signing_digest, SighashBase, SighashType};
pub use transaction::{
    parse_transaction, parse_transaction_bytes, OutPoint, ParsedTransaction, TxInput, TxOutput,
};
pub use validate::{is_valid_address, is_valid_public_key, is_valid_tx_hash};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
