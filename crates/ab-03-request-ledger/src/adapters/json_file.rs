//! # JSON File Repository
//!
//! Durable store: one JSON array of request records per oracle kind,
//! under well-known file names in a configured directory. The full
//! content is loaded into memory at open; every mutation rewrites the
//! owning file through a temp-file rename so a crash mid-write leaves
//! the previous content intact. An advisory lock is held for the life of
//! the repository so two processes cannot interleave rewrites.

use crate::domain::{LedgerError, VerificationRequest};
use crate::ports::RequestRepository;
use fs2::FileExt;
use parking_lot::Mutex;
use shared_types::{OracleKind, RequestId, TxId, VerificationStatus};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Well-known storage name per oracle kind.
fn storage_file_name(kind: OracleKind) -> &'static str {
    match kind {
        OracleKind::ZkProof => "zk-proof-requests.json",
        OracleKind::SignatureValidation => "signature-requests.json",
    }
}

#[derive(Debug)]
struct Inner {
    zk: Vec<VerificationRequest>,
    signature: Vec<VerificationRequest>,
    closed: bool,
}

impl Inner {
    fn list(&self, kind: OracleKind) -> &Vec<VerificationRequest> {
        match kind {
            OracleKind::ZkProof => &self.zk,
            OracleKind::SignatureValidation => &self.signature,
        }
    }

    fn list_mut(&mut self, kind: OracleKind) -> &mut Vec<VerificationRequest> {
        match kind {
            OracleKind::ZkProof => &mut self.zk,
            OracleKind::SignatureValidation => &mut self.signature,
        }
    }
}

/// Durable request store backed by flat JSON files.
#[derive(Debug)]
pub struct JsonFileRepository {
    dir: PathBuf,
    // Held open for the fs2 advisory lock; released on close/drop.
    lock_file: Mutex<Option<File>>,
    inner: Mutex<Inner>,
}

impl JsonFileRepository {
    /// Open (or create) the store in `dir`, loading all records eagerly.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, LedgerError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;

        let lock_path = dir.join("requests.lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;
        lock_file
            .try_lock_exclusive()
            .map_err(|e| LedgerError::Locked(e.to_string()))?;

        let zk = load_list(&dir.join(storage_file_name(OracleKind::ZkProof)))?;
        let signature = load_list(&dir.join(storage_file_name(OracleKind::SignatureValidation)))?;

        info!(
            "[ab-03] Opened request ledger at {:?}: {} zk-proof, {} signature records",
            dir,
            zk.len(),
            signature.len()
        );

        Ok(Self {
            dir,
            lock_file: Mutex::new(Some(lock_file)),
            inner: Mutex::new(Inner {
                zk,
                signature,
                closed: false,
            }),
        })
    }

    fn persist(&self, kind: OracleKind, list: &[VerificationRequest]) -> Result<(), LedgerError> {
        let path = self.dir.join(storage_file_name(kind));
        let tmp = self.dir.join(format!("{}.tmp", storage_file_name(kind)));
        let json = serde_json::to_string_pretty(list)
            .map_err(|e| LedgerError::Io(e.to_string()))?;
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        debug!("[ab-03] Persisted {} records to {:?}", list.len(), path);
        Ok(())
    }

    fn ensure_open(inner: &Inner) -> Result<(), LedgerError> {
        if inner.closed {
            return Err(LedgerError::Io("repository closed".into()));
        }
        Ok(())
    }
}

fn load_list(path: &Path) -> Result<Vec<VerificationRequest>, LedgerError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&content)
        .map_err(|e| LedgerError::Corrupt(format!("{:?}: {}", path, e)))
}

impl RequestRepository for JsonFileRepository {
    fn lookup(&self, tx_id: TxId, kind: OracleKind) -> Option<VerificationRequest> {
        let inner = self.inner.lock();
        if inner.closed {
            return None;
        }
        inner
            .list(kind)
            .iter()
            .rev()
            .find(|r| r.transaction_id == tx_id && r.oracle_kind == kind)
            .cloned()
    }

    fn record(
        &self,
        tx_id: TxId,
        kind: OracleKind,
        request_id: RequestId,
    ) -> Result<(), LedgerError> {
        let mut inner = self.inner.lock();
        Self::ensure_open(&inner)?;

        let active = inner
            .list(kind)
            .iter()
            .rev()
            .find(|r| r.transaction_id == tx_id)
            .map(|r| r.is_active())
            .unwrap_or(false);
        if active {
            return Err(LedgerError::DuplicateActiveRequest {
                tx_id,
                oracle_kind: kind,
            });
        }

        inner
            .list_mut(kind)
            .push(VerificationRequest::new(tx_id, kind, request_id));
        self.persist(kind, inner.list(kind))
    }

    fn mark_status(
        &self,
        tx_id: TxId,
        kind: OracleKind,
        status: VerificationStatus,
    ) -> Result<(), LedgerError> {
        let mut inner = self.inner.lock();
        Self::ensure_open(&inner)?;

        let entry = inner
            .list_mut(kind)
            .iter_mut()
            .rev()
            .find(|r| r.transaction_id == tx_id)
            .ok_or(LedgerError::NotFound {
                tx_id,
                oracle_kind: kind,
            })?;
        if !entry.status.can_transition_to(status) {
            // Terminal statuses absorb stale reports.
            return Ok(());
        }
        if entry.status == status {
            return Ok(());
        }
        entry.status = status;
        self.persist(kind, inner.list(kind))
    }

    fn all_requests(&self, kind: OracleKind) -> Vec<VerificationRequest> {
        let inner = self.inner.lock();
        if inner.closed {
            return Vec::new();
        }
        inner.list(kind).clone()
    }

    fn close(&self) -> Result<(), LedgerError> {
        let mut inner = self.inner.lock();
        if inner.closed {
            return Ok(());
        }
        inner.closed = true;
        if let Some(file) = self.lock_file.lock().take() {
            let _ = fs2::FileExt::unlock(&file);
        }
        info!("[ab-03] Closed request ledger at {:?}", self.dir);
        Ok(())
    }
}

impl Drop for JsonFileRepository {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(n: u8) -> TxId {
        TxId([n; 32])
    }

    fn req(n: u8) -> RequestId {
        RequestId([n; 32])
    }

    #[test]
    fn test_open_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::open(dir.path()).unwrap();
        assert!(repo.lookup(tx(1), OracleKind::ZkProof).is_none());
        assert!(repo.all_requests(OracleKind::SignatureValidation).is_empty());
    }

    #[test]
    fn test_records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let repo = JsonFileRepository::open(dir.path()).unwrap();
            repo.record(tx(1), OracleKind::ZkProof, req(9)).unwrap();
            repo.mark_status(tx(1), OracleKind::ZkProof, VerificationStatus::Verifying)
                .unwrap();
            repo.close().unwrap();
        }

        let repo = JsonFileRepository::open(dir.path()).unwrap();
        let found = repo.lookup(tx(1), OracleKind::ZkProof).unwrap();
        assert_eq!(found.request_id, req(9));
        assert_eq!(found.status, VerificationStatus::Verifying);
    }

    #[test]
    fn test_kinds_persist_to_separate_files() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::open(dir.path()).unwrap();
        repo.record(tx(1), OracleKind::ZkProof, req(9)).unwrap();
        repo.record(tx(2), OracleKind::SignatureValidation, req(10))
            .unwrap();
        repo.close().unwrap();

        assert!(dir.path().join("zk-proof-requests.json").exists());
        assert!(dir.path().join("signature-requests.json").exists());
    }

    #[test]
    fn test_duplicate_active_rejected_after_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let repo = JsonFileRepository::open(dir.path()).unwrap();
            repo.record(tx(1), OracleKind::ZkProof, req(9)).unwrap();
            repo.close().unwrap();
        }

        let repo = JsonFileRepository::open(dir.path()).unwrap();
        let err = repo.record(tx(1), OracleKind::ZkProof, req(10)).unwrap_err();
        assert!(matches!(err, LedgerError::DuplicateActiveRequest { .. }));
    }

    #[test]
    fn test_corrupt_file_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("zk-proof-requests.json"), "{not json").unwrap();

        let err = JsonFileRepository::open(dir.path()).unwrap_err();
        assert!(matches!(err, LedgerError::Corrupt(_)));
    }

    #[test]
    fn test_second_open_while_locked_fails() {
        let dir = tempfile::tempdir().unwrap();
        let _repo = JsonFileRepository::open(dir.path()).unwrap();

        let err = JsonFileRepository::open(dir.path()).unwrap_err();
        assert!(matches!(err, LedgerError::Locked(_)));
    }

    #[test]
    fn test_mutation_after_close_fails() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::open(dir.path()).unwrap();
        repo.close().unwrap();

        assert!(repo.record(tx(1), OracleKind::ZkProof, req(9)).is_err());
        assert!(repo.lookup(tx(1), OracleKind::ZkProof).is_none());
    }

    #[test]
    fn test_on_disk_layout_is_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::open(dir.path()).unwrap();
        repo.record(tx(0xAB), OracleKind::ZkProof, req(0xCD)).unwrap();
        repo.close().unwrap();

        let content = fs::read_to_string(dir.path().join("zk-proof-requests.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        let records = parsed.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0]["transactionId"].as_str().unwrap(),
            "ab".repeat(32)
        );
        assert_eq!(records[0]["requestId"].as_str().unwrap(), "cd".repeat(32));
    }
}
