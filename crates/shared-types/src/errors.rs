//! # Error Types
//!
//! Errors shared across subsystem boundaries.

use thiserror::Error;

/// Errors parsing a fixed-width identifier from its hex form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIdError {
    /// Wrong number of hex characters for the identifier width.
    #[error("Bad identifier length: got {got} hex chars, expected 64")]
    BadLength {
        /// Hex characters received.
        got: usize,
    },

    /// Non-hexadecimal input.
    #[error("Identifier is not valid hex")]
    BadHex,
}
