//! # Codec Errors
//!
//! Input errors caught at the codec boundary. Always reported to the
//! caller without side effects.

use thiserror::Error;

/// Signature/transaction codec error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Raw signature is not the 64-byte `R‖S` concatenation.
    #[error("Invalid raw signature length: got {got} bytes, expected 64")]
    InvalidLength {
        /// Bytes received.
        got: usize,
    },

    /// A signature component is outside the encodable 32..33 byte range
    /// after sign padding.
    #[error("Invalid {component} component length: {len} bytes")]
    InvalidComponentLength {
        /// Which component (`R` or `S`).
        component: &'static str,
        /// Component length after padding.
        len: usize,
    },

    /// DER transport signature does not parse as a two-integer SEQUENCE.
    #[error("Malformed transport signature: {0}")]
    MalformedSignature(String),

    /// Raw transaction bytes are structurally invalid.
    #[error("Malformed transaction: {0}")]
    MalformedTransaction(String),

    /// Requested input does not exist in the transaction.
    #[error("Input index {index} out of range: transaction has {inputs} inputs")]
    InputIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of inputs in the transaction.
        inputs: usize,
    },
}
