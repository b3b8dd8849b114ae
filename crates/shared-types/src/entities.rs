//! # Core Vocabulary Types
//!
//! Identifiers and enums shared by the codec, oracle client, request
//! ledger, claim orchestrator, and event projector.
//!
//! ## Clusters
//!
//! - **Identity**: `Hash`, `TxId`, `RequestId`, `EvmAddress`
//! - **Arbitration**: `OracleKind`, `ClaimType`

use crate::errors::ParseIdError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// Re-export U256 from primitive-types for use across all subsystems
pub use primitive_types::U256;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// A 32-byte hash (SHA-256 family).
pub type Hash = [u8; 32];

/// A 20-byte EVM-ledger address.
pub type EvmAddress = [u8; 20];

/// The dispute subject: the Bitcoin transaction under arbitration,
/// identified by its 32-byte transaction id in chain-boundary byte order.
///
/// Immutable once created by the ledger. Serializes as a hex string so
/// persisted records and RPC payloads stay human-readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TxId(pub Hash);

impl TxId {
    /// Parse from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, ParseIdError> {
        Ok(Self(parse_hash(s)?))
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &Hash {
        &self.0
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Serialize for TxId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> Deserialize<'de> for TxId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        TxId::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Opaque oracle-assigned request handle.
///
/// The oracles return it as a bytes32 in a submission-receipt log event and
/// later accept it back verbatim in status queries and as claim evidence.
/// Immutable once assigned. Serializes as a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RequestId(pub Hash);

impl RequestId {
    /// Parse from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, ParseIdError> {
        Ok(Self(parse_hash(s)?))
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &Hash {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Serialize for RequestId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> Deserialize<'de> for RequestId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        RequestId::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

fn parse_hash(s: &str) -> Result<Hash, ParseIdError> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    if s.len() != 64 {
        return Err(ParseIdError::BadLength { got: s.len() });
    }
    let bytes = hex::decode(s).map_err(|_| ParseIdError::BadHex)?;
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&bytes);
    Ok(hash)
}

// =============================================================================
// CLUSTER B: ARBITRATION
// =============================================================================

/// The two independent off-chain verification services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OracleKind {
    /// Zero-knowledge proof oracle: verifies a full transaction proof
    /// (public key, raw transaction, UTXO set, input/signature index).
    ZkProof,
    /// Signature-validation oracle: verifies a single signature against a
    /// message hash and public key.
    SignatureValidation,
}

impl fmt::Display for OracleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OracleKind::ZkProof => write!(f, "zk-proof"),
            OracleKind::SignatureValidation => write!(f, "signature-validation"),
        }
    }
}

/// Lifecycle of a verification request against an oracle.
///
/// `Verified` and `Failed` are terminal: once observed, the status of a
/// request never changes again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerificationStatus {
    /// No request exists, or its status was never fetched.
    #[default]
    Unknown,
    /// A request handle exists and the oracle has not produced a final value.
    Verifying,
    /// The oracle confirmed the evidence.
    Verified,
    /// The oracle rejected the evidence.
    Failed,
}

impl VerificationStatus {
    /// Check if terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Verified | Self::Failed)
    }

    /// Check if transition is valid. Terminal states absorb.
    pub fn can_transition_to(&self, next: VerificationStatus) -> bool {
        match self {
            Self::Unknown => true,
            Self::Verifying => next != Self::Unknown,
            Self::Verified => next == Self::Verified,
            Self::Failed => next == Self::Failed,
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationStatus::Unknown => write!(f, "unknown"),
            VerificationStatus::Verifying => write!(f, "verifying"),
            VerificationStatus::Verified => write!(f, "verified"),
            VerificationStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Category of compensation being requested.
///
/// Each claim type carries its own evidentiary precondition: the oracle
/// kind (if any) that must report a verified verdict before the on-chain
/// claim may be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimType {
    /// Arbitrator failed to respond within the deadline.
    Timeout,
    /// Arbitrator signed a transaction it was not authorized to sign.
    IllegalSignature,
    /// Arbitration completed but produced an invalid result.
    FailedArbitration,
    /// Fee owed to the arbitrator for completed work.
    ArbitratorFee,
}

impl ClaimType {
    /// The oracle whose verified verdict must precede an on-chain claim,
    /// or `None` when the claim is submittable with no prior oracle step.
    pub fn required_oracle(&self) -> Option<OracleKind> {
        match self {
            ClaimType::Timeout | ClaimType::ArbitratorFee => None,
            ClaimType::IllegalSignature => Some(OracleKind::SignatureValidation),
            ClaimType::FailedArbitration => Some(OracleKind::ZkProof),
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimType::Timeout => write!(f, "timeout"),
            ClaimType::IllegalSignature => write!(f, "illegal-signature"),
            ClaimType::FailedArbitration => write!(f, "failed-arbitration"),
            ClaimType::ArbitratorFee => write!(f, "arbitrator-fee"),
        }
    }
}
