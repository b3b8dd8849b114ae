//! # Oracle Client Domain
//!
//! Evidence payloads, the shared verdict variant, the per-oracle
//! response decoders, and errors.

pub mod errors;
pub mod evidence;
pub mod verdict;

pub use errors::OracleError;
pub use evidence::{OracleEvidence, SignatureAlgo, SignatureEvidence, ZkProofEvidence};
pub use verdict::{
    decode_signature_record, decode_zk_record, OracleVerdict, SignatureVerificationRecord,
    VerifiedRecord, ZkVerificationRecord,
};
