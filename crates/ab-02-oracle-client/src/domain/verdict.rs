//! # Oracle Verdicts
//!
//! The two oracles answer status queries with differently shaped
//! records. One decoder per kind maps them onto the shared
//! [`OracleVerdict`] variant so downstream code never branches on
//! oracle kind.
//!
//! Decoding precedence, identical for both kinds: a request with no
//! recorded digest is still `Verifying`; a recorded digest that the
//! oracle explicitly marked verified is `Verified`; any other recorded
//! digest is `Failed`. "Digest absent" and "failed" are distinct cases
//! and must never be collapsed.

use serde::{Deserialize, Serialize};
use shared_types::{Hash, VerificationStatus};

const ZERO_HASH: Hash = [0u8; 32];

/// Raw status record of the signature-validation oracle.
///
/// A zero `msg_hash` means the oracle has not recorded a digest yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureVerificationRecord {
    /// Whether the oracle confirmed the signature.
    pub verified: bool,
    /// Digest the oracle verified against; zero while verifying.
    pub msg_hash: Hash,
    /// Signature material the oracle examined.
    pub signature: Vec<u8>,
    /// Public key the oracle examined.
    pub pub_key: Vec<u8>,
}

impl SignatureVerificationRecord {
    /// Record of a request the oracle has not resolved yet.
    pub fn pending() -> Self {
        Self::default()
    }

    /// Record of a confirmed signature.
    pub fn confirmed(msg_hash: Hash, signature: Vec<u8>, pub_key: Vec<u8>) -> Self {
        Self {
            verified: true,
            msg_hash,
            signature,
            pub_key,
        }
    }

    /// Record of a rejected signature.
    pub fn rejected(msg_hash: Hash) -> Self {
        Self {
            verified: false,
            msg_hash,
            ..Self::default()
        }
    }
}

/// Raw status record of the zero-knowledge proof oracle.
///
/// `status == 0` and a zero `tx_hash` both mean the proof run has not
/// recorded a digest yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZkVerificationRecord {
    /// Oracle-internal progress marker; zero while unset.
    pub status: u32,
    /// Public key the proof covers.
    pub pub_key: Vec<u8>,
    /// Digest of the transaction the proof covers; zero while verifying.
    pub tx_hash: Hash,
    /// Signature material the proof covers.
    pub signature: Vec<u8>,
    /// Whether the proof checked out.
    pub verified: bool,
    /// UTXO set the proof was evaluated against.
    pub utxos: Vec<Vec<u8>>,
}

impl ZkVerificationRecord {
    /// Record of a proof run that has not resolved yet.
    pub fn pending() -> Self {
        Self::default()
    }

    /// Record of a proof that checked out.
    pub fn confirmed(tx_hash: Hash, signature: Vec<u8>, pub_key: Vec<u8>) -> Self {
        Self {
            status: 2,
            pub_key,
            tx_hash,
            signature,
            verified: true,
            utxos: Vec::new(),
        }
    }

    /// Record of a proof that did not check out.
    pub fn rejected(tx_hash: Hash) -> Self {
        Self {
            status: 2,
            tx_hash,
            verified: false,
            ..Self::default()
        }
    }
}

/// Material the oracle committed to alongside a verified verdict.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedRecord {
    /// Digest the oracle verified.
    pub digest: Hash,
    /// Signature material it examined.
    pub signature: Vec<u8>,
    /// Public key it examined.
    pub pub_key: Vec<u8>,
}

/// Terminal-or-not verdict shared by both oracle kinds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OracleVerdict {
    /// No final value yet; keep polling.
    Verifying,
    /// Evidence confirmed. Terminal.
    Verified(VerifiedRecord),
    /// Evidence rejected. Terminal.
    Failed,
}

impl OracleVerdict {
    /// Whether polling may stop.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, OracleVerdict::Verifying)
    }

    /// The verification status this verdict maps to.
    pub fn status(&self) -> VerificationStatus {
        match self {
            OracleVerdict::Verifying => VerificationStatus::Verifying,
            OracleVerdict::Verified(_) => VerificationStatus::Verified,
            OracleVerdict::Failed => VerificationStatus::Failed,
        }
    }
}

/// Decode a signature-validation oracle record.
pub fn decode_signature_record(record: &SignatureVerificationRecord) -> OracleVerdict {
    if record.msg_hash == ZERO_HASH {
        return OracleVerdict::Verifying;
    }
    if record.verified {
        OracleVerdict::Verified(VerifiedRecord {
            digest: record.msg_hash,
            signature: record.signature.clone(),
            pub_key: record.pub_key.clone(),
        })
    } else {
        OracleVerdict::Failed
    }
}

/// Decode a proof oracle record.
pub fn decode_zk_record(record: &ZkVerificationRecord) -> OracleVerdict {
    if record.status == 0 || record.tx_hash == ZERO_HASH {
        return OracleVerdict::Verifying;
    }
    if record.verified {
        OracleVerdict::Verified(VerifiedRecord {
            digest: record.tx_hash,
            signature: record.signature.clone(),
            pub_key: record.pub_key.clone(),
        })
    } else {
        OracleVerdict::Failed
    }
}
