//! # Outbound Port
//!
//! The raw RPC surface of the two verification oracles. Submissions are
//! ledger transactions on the oracle's side; the request id is recovered
//! from the "stored/submitted" log event on the submission receipt, not
//! from the call's direct return value - adapters do that extraction and
//! hand the id back directly.

use crate::domain::{
    OracleError, SignatureAlgo, SignatureVerificationRecord, ZkVerificationRecord,
};
use async_trait::async_trait;
use shared_types::{Hash, RequestId};

/// Verification oracle RPC - outbound port.
#[async_trait]
pub trait OracleRpc: Send + Sync {
    /// Submit signature evidence to the signature-validation oracle.
    ///
    /// `signature` is already in the oracle's transport encoding.
    async fn submit(
        &self,
        msg_hash: Hash,
        algo: SignatureAlgo,
        signature: Vec<u8>,
        pub_key: Vec<u8>,
    ) -> Result<RequestId, OracleError>;

    /// Submit transaction-proof evidence to the proof oracle.
    async fn submit_arbitration(
        &self,
        pub_key: Vec<u8>,
        raw_tx: Vec<u8>,
        utxos: Vec<Vec<u8>>,
        input_index: u32,
        signature_index: u32,
    ) -> Result<RequestId, OracleError>;

    /// Read the signature-validation oracle's record for a request.
    async fn get_verification_result(
        &self,
        request_id: RequestId,
    ) -> Result<SignatureVerificationRecord, OracleError>;

    /// Read the proof oracle's record for a request.
    async fn get_zk_verification(
        &self,
        request_id: RequestId,
    ) -> Result<ZkVerificationRecord, OracleError>;
}
