//! # Dispute Flow Tests
//!
//! The full claim choreography:
//!
//! ```text
//! [Caller] ──evidence──→ [Oracle Client (02)] ──record──→ [Request Ledger (03)]
//!                              │ poll × N
//!                              ↓
//!                        OracleVerdict
//!                              │ Verified
//!                              ↓
//!                   [Claim Orchestrator (04)] ──claim──→ [Arbitration Ledger]
//! ```
//!
//! Covers the evidence precondition per claim type, the survival of
//! in-flight requests across a process restart, and the codec feeding
//! the signature-oracle payload.

#[cfg(test)]
mod tests {
    use crate::fixtures::{pub_key, sample_raw_tx, signature_evidence, zk_evidence};
    use ab_01_signature_codec::{
        parse_transaction_bytes, witness_signing_digest, SighashType,
    };
    use ab_02_oracle_client::{
        MockOracleRpc, OracleClient, OracleClientApi, OracleClientConfig, OracleVerdict,
        SignatureVerificationRecord, ZkVerificationRecord,
    };
    use ab_03_request_ledger::{InMemoryRepository, JsonFileRepository, RequestRepository};
    use ab_04_compensation_claims::{
        ClaimApi, ClaimError, ClaimOrchestrator, ClaimRequest, MockArbitrationLedger,
        SubmittedClaim,
    };
    use shared_types::{ClaimType, OracleKind, TxId, VerificationStatus};
    use std::sync::Arc;
    use tokio::sync::watch;

    type TestOrchestrator<S> =
        ClaimOrchestrator<OracleClient<MockOracleRpc, S>, MockArbitrationLedger, S>;

    fn build<S: RequestRepository>(
        repo: Arc<S>,
    ) -> (Arc<MockOracleRpc>, Arc<MockArbitrationLedger>, Arc<OracleClient<MockOracleRpc, S>>, TestOrchestrator<S>) {
        let rpc = Arc::new(MockOracleRpc::new());
        let ledger = Arc::new(MockArbitrationLedger::new());
        let oracle = Arc::new(OracleClient::new(
            Arc::clone(&rpc),
            Arc::clone(&repo),
            OracleClientConfig::for_testing(),
        ));
        let orchestrator =
            ClaimOrchestrator::new(Arc::clone(&oracle), Arc::clone(&ledger), repo);
        (rpc, ledger, oracle, orchestrator)
    }

    #[tokio::test]
    async fn test_failed_arbitration_end_to_end() {
        let repo = Arc::new(InMemoryRepository::new());
        let (rpc, ledger, oracle, orchestrator) = build(Arc::clone(&repo));
        let tx = TxId([0xAB; 32]);

        // Evidence goes in; the oracle stays busy for two polls.
        let request_id = oracle.submit(tx, zk_evidence()).await.unwrap();
        rpc.stage_zk_records(
            request_id,
            vec![
                ZkVerificationRecord::pending(),
                ZkVerificationRecord::pending(),
                ZkVerificationRecord::confirmed([9u8; 32], vec![1], pub_key()),
            ],
        );

        let request = ClaimRequest::bare(tx, ClaimType::FailedArbitration);

        // While the verdict is pending, every claim attempt is rejected.
        for _ in 0..2 {
            let err = orchestrator.try_claim(&request).await.unwrap_err();
            assert!(matches!(
                err,
                ClaimError::VerdictPending {
                    status: VerificationStatus::Verifying
                }
            ));
            assert!(ledger.submissions().is_empty());
        }

        // The next poll observes Verified; the claim goes through.
        let outcome = orchestrator.try_claim(&request).await.unwrap();
        assert_eq!(outcome.evidence, Some(request_id));
        assert_eq!(
            ledger.submissions(),
            vec![SubmittedClaim::FailedArbitration {
                evidence: request_id
            }]
        );

        // The ledger's record reflects the terminal status.
        let entry = repo.lookup(tx, OracleKind::ZkProof).unwrap();
        assert_eq!(entry.status, VerificationStatus::Verified);
    }

    #[tokio::test]
    async fn test_oracle_free_claims_skip_straight_to_submission() {
        let repo = Arc::new(InMemoryRepository::new());
        let (rpc, ledger, _oracle, orchestrator) = build(repo);
        let tx = TxId([0x01; 32]);

        let (_guard, cancel) = watch::channel(false);
        orchestrator
            .execute(ClaimRequest::bare(tx, ClaimType::Timeout), cancel)
            .await
            .unwrap();

        let (_guard, cancel) = watch::channel(false);
        orchestrator
            .execute(ClaimRequest::bare(tx, ClaimType::ArbitratorFee), cancel)
            .await
            .unwrap();

        assert_eq!(
            ledger.submissions(),
            vec![
                SubmittedClaim::Timeout(tx),
                SubmittedClaim::ArbitratorFee(tx)
            ]
        );
        assert_eq!(rpc.submission_count(), 0);
    }

    #[tokio::test]
    async fn test_in_flight_request_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let tx = TxId([0x42; 32]);

        // Session one: submit evidence, then the process goes away.
        let request_id = {
            let repo = Arc::new(JsonFileRepository::open(dir.path()).unwrap());
            let (_rpc, _ledger, oracle, _orchestrator) = build(Arc::clone(&repo));
            let id = oracle.submit(tx, zk_evidence()).await.unwrap();
            repo.close().unwrap();
            id
        };

        // Session two: a fresh stack over the same directory picks the
        // recorded request back up instead of double-submitting.
        let repo = Arc::new(JsonFileRepository::open(dir.path()).unwrap());
        let (rpc, ledger, _oracle, orchestrator) = build(Arc::clone(&repo));
        rpc.stage_zk_records(
            request_id,
            vec![ZkVerificationRecord::confirmed([9u8; 32], vec![1], pub_key())],
        );

        let (_guard, cancel) = watch::channel(false);
        let outcome = orchestrator
            .execute(ClaimRequest::bare(tx, ClaimType::FailedArbitration), cancel)
            .await
            .unwrap();

        assert_eq!(outcome.evidence, Some(request_id));
        assert_eq!(rpc.submission_count(), 0);
        assert_eq!(
            ledger.submissions(),
            vec![SubmittedClaim::FailedArbitration {
                evidence: request_id
            }]
        );
    }

    #[tokio::test]
    async fn test_codec_digest_feeds_signature_evidence() {
        // The digest a co-signer must sign, computed by the codec, is
        // the message hash the signature oracle verifies against.
        let tx_bytes = sample_raw_tx();
        let parsed = parse_transaction_bytes(&tx_bytes).unwrap();
        let digest =
            witness_signing_digest(&parsed, 0, &[0x51], 50_000, SighashType::ALL).unwrap();

        let repo = Arc::new(InMemoryRepository::new());
        let (rpc, ledger, oracle, orchestrator) = build(repo);
        let tx = TxId([0x07; 32]);

        let request_id = oracle.submit(tx, signature_evidence(digest)).await.unwrap();
        rpc.stage_signature_records(
            request_id,
            vec![SignatureVerificationRecord::confirmed(
                digest,
                vec![1],
                pub_key(),
            )],
        );

        // The verdict carries the digest back.
        match oracle
            .poll(OracleKind::SignatureValidation, request_id)
            .await
            .unwrap()
        {
            OracleVerdict::Verified(record) => assert_eq!(record.digest, digest),
            other => panic!("expected Verified, got {:?}", other),
        }

        let request = ClaimRequest {
            tx_id: tx,
            claim_type: ClaimType::IllegalSignature,
            arbiter: Some([0xEE; 20]),
            evidence: None,
        };
        let outcome = orchestrator.try_claim(&request).await.unwrap();
        assert_eq!(outcome.evidence, Some(request_id));
        assert_eq!(ledger.submissions().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_verdict_requires_fresh_evidence() {
        let repo = Arc::new(InMemoryRepository::new());
        let (rpc, ledger, oracle, orchestrator) = build(Arc::clone(&repo));
        let tx = TxId([0x55; 32]);

        let first = oracle.submit(tx, zk_evidence()).await.unwrap();
        rpc.stage_zk_records(first, vec![ZkVerificationRecord::rejected([9u8; 32])]);

        let request = ClaimRequest::bare(tx, ClaimType::FailedArbitration);
        let err = orchestrator.try_claim(&request).await.unwrap_err();
        assert!(matches!(err, ClaimError::VerdictFailed));
        assert!(ledger.submissions().is_empty());

        // A new attempt with fresh evidence gets a new request.
        let request = ClaimRequest {
            tx_id: tx,
            claim_type: ClaimType::FailedArbitration,
            arbiter: None,
            evidence: Some(zk_evidence()),
        };
        let second = rpc.peek_next_request_id();
        rpc.stage_zk_records(
            second,
            vec![ZkVerificationRecord::confirmed([9u8; 32], vec![1], pub_key())],
        );

        let (_guard, cancel) = watch::channel(false);
        let outcome = orchestrator.execute(request, cancel).await.unwrap();
        assert_eq!(outcome.evidence, Some(second));
        assert_ne!(first, second);
    }
}
