//! # Byte Utilities
//!
//! Double-SHA-256 and the endianness bridge between Bitcoin's
//! little-endian display convention and the big-endian byte order used at
//! the chain boundary.
//!
//! Every value that crosses the chain boundary goes through
//! [`display_to_chain_order`] / [`chain_order_to_display`] exactly once.
//! Reversing in place of converting (or converting twice) is the most
//! common correctness bug in this codec, which is why the conversion is
//! named rather than open-coded.

use crate::errors::CodecError;
use sha2::{Digest, Sha256};
use shared_types::Hash;

/// Compute SHA-256(SHA-256(data)).
pub fn double_sha256(data: &[u8]) -> Hash {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&second);
    hash
}

/// Reverse a byte sequence.
pub fn reverse_bytes(data: &[u8]) -> Vec<u8> {
    data.iter().rev().copied().collect()
}

/// Convert a display-order (little-endian convention) transaction id hex
/// string into chain-boundary byte order.
pub fn display_to_chain_order(display_hex: &str) -> Result<Hash, CodecError> {
    let s = display_hex.strip_prefix("0x").unwrap_or(display_hex);
    if s.len() != 64 {
        return Err(CodecError::MalformedTransaction(format!(
            "txid hex must be 64 chars, got {}",
            s.len()
        )));
    }
    let bytes = hex::decode(s)
        .map_err(|_| CodecError::MalformedTransaction("txid is not valid hex".into()))?;
    let mut hash = [0u8; 32];
    for (i, b) in bytes.iter().rev().enumerate() {
        hash[i] = *b;
    }
    Ok(hash)
}

/// Render a chain-boundary hash in Bitcoin's display order.
pub fn chain_order_to_display(hash: &Hash) -> String {
    hex::encode(reverse_bytes(hash))
}
