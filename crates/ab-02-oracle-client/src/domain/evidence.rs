//! # Evidence Payloads
//!
//! What each oracle kind needs to verify a claim.

use serde::{Deserialize, Serialize};
use shared_types::{Hash, OracleKind};

/// Signature scheme the signature-validation oracle should apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignatureAlgo {
    /// secp256k1 ECDSA.
    Ecdsa,
    /// BIP-340 Schnorr.
    Schnorr,
}

/// Evidence for the signature-validation oracle.
///
/// `raw_signature` is the wallet-native fixed-width form; the client
/// shapes it into the oracle's transport encoding on submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureEvidence {
    /// The digest the signer committed to.
    pub msg_hash: Hash,
    /// Signature scheme.
    pub algo: SignatureAlgo,
    /// Wallet-native 64-byte `R‖S` signature.
    pub raw_signature: Vec<u8>,
    /// Signer's public key (SEC1 encoded).
    pub pub_key: Vec<u8>,
}

/// Evidence for the zero-knowledge proof oracle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZkProofEvidence {
    /// Signer's public key (SEC1 encoded).
    pub pub_key: Vec<u8>,
    /// Raw transaction under dispute, wire serialization.
    pub raw_tx: Vec<u8>,
    /// Serialized UTXOs referenced by the transaction.
    pub utxos: Vec<Vec<u8>>,
    /// Index of the disputed input.
    pub input_index: u32,
    /// Index of the disputed signature within that input's witness.
    pub signature_index: u32,
}

/// Evidence tagged by the oracle kind it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OracleEvidence {
    /// For the proof oracle.
    ZkProof(ZkProofEvidence),
    /// For the signature-validation oracle.
    Signature(SignatureEvidence),
}

impl OracleEvidence {
    /// The oracle this evidence is addressed to.
    pub fn kind(&self) -> OracleKind {
        match self {
            OracleEvidence::ZkProof(_) => OracleKind::ZkProof,
            OracleEvidence::Signature(_) => OracleKind::SignatureValidation,
        }
    }
}
