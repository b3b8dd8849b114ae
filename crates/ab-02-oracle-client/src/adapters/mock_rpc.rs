//! # Mock Oracle RPC
//!
//! Scriptable in-memory oracle for unit and integration tests. Each
//! request id carries a queue of records; polls consume the queue and
//! the last record sticks, which models an oracle whose terminal answer
//! never changes.

use crate::domain::{
    OracleError, SignatureAlgo, SignatureVerificationRecord, ZkVerificationRecord,
};
use crate::ports::OracleRpc;
use async_trait::async_trait;
use parking_lot::Mutex;
use shared_types::{Hash, RequestId};
use std::collections::{HashMap, VecDeque};

#[derive(Default)]
struct MockState {
    next_id: u8,
    reject_reason: Option<String>,
    sig_scripts: HashMap<RequestId, VecDeque<SignatureVerificationRecord>>,
    zk_scripts: HashMap<RequestId, VecDeque<ZkVerificationRecord>>,
    last_signature_payload: Option<Vec<u8>>,
    submissions: usize,
}

/// Scriptable oracle double.
#[derive(Default)]
pub struct MockOracleRpc {
    state: Mutex<MockState>,
}

impl MockOracleRpc {
    /// Oracle that accepts submissions and answers "pending" until
    /// scripted otherwise.
    pub fn new() -> Self {
        Self::default()
    }

    /// Oracle that synchronously rejects every submission.
    pub fn rejecting(reason: &str) -> Self {
        let mock = Self::default();
        mock.state.lock().reject_reason = Some(reason.to_string());
        mock
    }

    /// Queue signature-oracle records for a request. Polls consume the
    /// queue; the final record repeats forever.
    pub fn stage_signature_records(
        &self,
        request_id: RequestId,
        records: Vec<SignatureVerificationRecord>,
    ) {
        self.state
            .lock()
            .sig_scripts
            .insert(request_id, records.into());
    }

    /// Queue proof-oracle records for a request.
    pub fn stage_zk_records(&self, request_id: RequestId, records: Vec<ZkVerificationRecord>) {
        self.state
            .lock()
            .zk_scripts
            .insert(request_id, records.into());
    }

    /// The id the next submission will be assigned.
    pub fn peek_next_request_id(&self) -> RequestId {
        RequestId([self.state.lock().next_id + 1; 32])
    }

    /// How many submissions reached the oracle.
    pub fn submission_count(&self) -> usize {
        self.state.lock().submissions
    }

    /// The signature bytes of the most recent signature submission.
    pub fn last_signature_payload(&self) -> Option<Vec<u8>> {
        self.state.lock().last_signature_payload.clone()
    }

    fn assign_id(state: &mut MockState) -> Result<RequestId, OracleError> {
        if let Some(reason) = &state.reject_reason {
            return Err(OracleError::SubmissionRejected(reason.clone()));
        }
        state.next_id += 1;
        state.submissions += 1;
        Ok(RequestId([state.next_id; 32]))
    }

    fn next_record<T: Clone + Default>(
        scripts: &mut HashMap<RequestId, VecDeque<T>>,
        request_id: RequestId,
    ) -> T {
        match scripts.get_mut(&request_id) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or_default(),
            Some(queue) => queue.front().cloned().unwrap_or_default(),
            None => T::default(),
        }
    }
}

#[async_trait]
impl OracleRpc for MockOracleRpc {
    async fn submit(
        &self,
        _msg_hash: Hash,
        _algo: SignatureAlgo,
        signature: Vec<u8>,
        _pub_key: Vec<u8>,
    ) -> Result<RequestId, OracleError> {
        let mut state = self.state.lock();
        state.last_signature_payload = Some(signature);
        Self::assign_id(&mut state)
    }

    async fn submit_arbitration(
        &self,
        _pub_key: Vec<u8>,
        _raw_tx: Vec<u8>,
        _utxos: Vec<Vec<u8>>,
        _input_index: u32,
        _signature_index: u32,
    ) -> Result<RequestId, OracleError> {
        let mut state = self.state.lock();
        Self::assign_id(&mut state)
    }

    async fn get_verification_result(
        &self,
        request_id: RequestId,
    ) -> Result<SignatureVerificationRecord, OracleError> {
        let mut state = self.state.lock();
        Ok(Self::next_record(&mut state.sig_scripts, request_id))
    }

    async fn get_zk_verification(
        &self,
        request_id: RequestId,
    ) -> Result<ZkVerificationRecord, OracleError> {
        let mut state = self.state.lock();
        Ok(Self::next_record(&mut state.zk_scripts, request_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unstaged_request_reads_pending() {
        let mock = MockOracleRpc::new();
        let record = mock
            .get_verification_result(RequestId([1u8; 32]))
            .await
            .unwrap();
        assert_eq!(record, SignatureVerificationRecord::pending());
    }

    #[tokio::test]
    async fn test_queue_drains_and_last_record_sticks() {
        let mock = MockOracleRpc::new();
        let id = RequestId([1u8; 32]);
        mock.stage_signature_records(
            id,
            vec![
                SignatureVerificationRecord::pending(),
                SignatureVerificationRecord::rejected([7u8; 32]),
            ],
        );

        let first = mock.get_verification_result(id).await.unwrap();
        assert_eq!(first.msg_hash, [0u8; 32]);

        for _ in 0..3 {
            let next = mock.get_verification_result(id).await.unwrap();
            assert_eq!(next.msg_hash, [7u8; 32]);
        }
    }

    #[tokio::test]
    async fn test_rejecting_mock() {
        let mock = MockOracleRpc::rejecting("malformed evidence");
        let err = mock
            .submit([0u8; 32], SignatureAlgo::Ecdsa, vec![], vec![])
            .await
            .unwrap_err();
        assert!(matches!(err, OracleError::SubmissionRejected(_)));
        assert_eq!(mock.submission_count(), 0);
    }

    #[tokio::test]
    async fn test_request_ids_are_sequential() {
        let mock = MockOracleRpc::new();
        let predicted = mock.peek_next_request_id();
        let assigned = mock
            .submit([0u8; 32], SignatureAlgo::Ecdsa, vec![], vec![])
            .await
            .unwrap();
        assert_eq!(predicted, assigned);
    }
}
