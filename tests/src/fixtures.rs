//! # Shared Fixtures
//!
//! Evidence and transaction builders used across the integration flows.

use ab_02_oracle_client::{
    OracleEvidence, SignatureAlgo, SignatureEvidence, ZkProofEvidence,
};
use shared_types::Hash;

/// Compressed secp256k1 generator point; a valid public key for tests.
pub const PUB_KEY_HEX: &str =
    "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

/// Valid public key bytes.
pub fn pub_key() -> Vec<u8> {
    hex::decode(PUB_KEY_HEX).expect("fixture pubkey is valid hex")
}

/// A minimal well-formed legacy transaction: one input, one output.
pub fn sample_raw_tx() -> Vec<u8> {
    let mut tx = Vec::new();
    tx.extend_from_slice(&1u32.to_le_bytes());
    tx.push(1);
    tx.extend_from_slice(&[0xAB; 32]);
    tx.extend_from_slice(&0u32.to_le_bytes());
    tx.push(0);
    tx.extend_from_slice(&0xFFFF_FFFFu32.to_le_bytes());
    tx.push(1);
    tx.extend_from_slice(&50_000u64.to_le_bytes());
    tx.push(1);
    tx.push(0x51);
    tx.extend_from_slice(&0u32.to_le_bytes());
    tx
}

/// Proof-oracle evidence over the sample transaction.
pub fn zk_evidence() -> OracleEvidence {
    OracleEvidence::ZkProof(ZkProofEvidence {
        pub_key: pub_key(),
        raw_tx: sample_raw_tx(),
        utxos: vec![vec![0u8; 34]],
        input_index: 0,
        signature_index: 0,
    })
}

/// Signature-oracle evidence over an arbitrary digest.
pub fn signature_evidence(msg_hash: Hash) -> OracleEvidence {
    let mut raw = vec![0x11u8; 64];
    raw[0] = 0x7F;
    OracleEvidence::Signature(SignatureEvidence {
        msg_hash,
        algo: SignatureAlgo::Ecdsa,
        raw_signature: raw,
        pub_key: pub_key(),
    })
}
