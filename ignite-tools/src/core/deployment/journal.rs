// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ignite-rs/blob/main/licenses/COPYRIGHT.md

//! Execution journal for deployment modules.
//!
//! Every step transition (submitted, confirmed, failed) is persisted, keyed
//! by module name and future id. Re-running a module consults the journal and
//! skips steps that already confirmed; submitted-but-unconfirmed and failed
//! steps are retried.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use alloy::primitives::{Address, TxHash};
use serde::{Deserialize, Serialize};

use crate::core::module::FutureId;

/// Lifecycle state of a journaled deployment step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    Submitted,
    Confirmed,
    Failed,
}

impl std::fmt::Display for StepState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(match self {
            Self::Submitted => "submitted",
            Self::Confirmed => "confirmed",
            Self::Failed => "failed",
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    pub artifact: String,
    pub state: StepState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<TxHash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

impl StepRecord {
    pub fn submitted(artifact: &str, tx_hash: TxHash) -> Self {
        Self {
            artifact: artifact.to_string(),
            state: StepState::Submitted,
            tx_hash: Some(tx_hash),
            address: None,
        }
    }

    pub fn confirmed(artifact: &str, tx_hash: TxHash, address: Address) -> Self {
        Self {
            artifact: artifact.to_string(),
            state: StepState::Confirmed,
            tx_hash: Some(tx_hash),
            address: Some(address),
        }
    }

    pub fn failed(artifact: &str, tx_hash: TxHash) -> Self {
        Self {
            artifact: artifact.to_string(),
            state: StepState::Failed,
            tx_hash: Some(tx_hash),
            address: None,
        }
    }
}

/// File-backed journal of module executions.
#[derive(Debug)]
pub struct Journal {
    path: PathBuf,
    entries: BTreeMap<String, BTreeMap<String, StepRecord>>,
}

impl Journal {
    /// Opens the journal at `path`. A missing file is an empty journal; the
    /// file is only created once a record is written.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, JournalError> {
        let path = path.into();
        let entries = if path.exists() {
            serde_json::from_str(&fs::read_to_string(&path)?).map_err(|source| {
                JournalError::Malformed {
                    path: path.clone(),
                    source,
                }
            })?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records a step transition and persists the journal.
    pub fn record(
        &mut self,
        module: &str,
        future: &FutureId,
        record: StepRecord,
    ) -> Result<(), JournalError> {
        self.entries
            .entry(module.to_string())
            .or_default()
            .insert(future.as_str().to_string(), record);
        self.save()
    }

    /// The confirmed deployment for a step, if any.
    pub fn confirmed(&self, module: &str, future: &FutureId) -> Option<(&StepRecord, Address)> {
        let record = self.entries.get(module)?.get(future.as_str())?;
        match (record.state, record.address) {
            (StepState::Confirmed, Some(address)) => Some((record, address)),
            _ => None,
        }
    }

    /// All journaled steps of a module, keyed by future id.
    pub fn module_entries<'a>(
        &'a self,
        module: &str,
    ) -> impl Iterator<Item = (&'a str, &'a StepRecord)> + 'a {
        self.entries
            .get(module)
            .into_iter()
            .flat_map(|steps| steps.iter().map(|(id, record)| (id.as_str(), record)))
    }

    /// Removes all journaled steps of a module, returning how many were
    /// dropped.
    pub fn wipe_module(&mut self, module: &str) -> Result<usize, JournalError> {
        let removed = self.entries.remove(module).map_or(0, |steps| steps.len());
        if removed > 0 {
            self.save()?;
        }
        Ok(removed)
    }

    fn save(&self) -> Result<(), JournalError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.entries)?)?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed journal {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::module::build_module;

    fn future_id() -> FutureId {
        let module = build_module("TokenModule", |m| [("token", m.contract("Token", &[]))])
            .unwrap();
        module.steps()[0].id().clone()
    }

    #[test]
    fn missing_file_is_empty_journal() {
        let dir = tempfile::tempdir().unwrap();
        let journal = Journal::open(dir.path().join("journal.json")).unwrap();
        assert!(journal.confirmed("TokenModule", &future_id()).is_none());
    }

    #[test]
    fn confirmed_record_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployments/journal.json");
        let id = future_id();

        let mut journal = Journal::open(&path).unwrap();
        let tx_hash = TxHash::with_last_byte(1);
        let address = Address::with_last_byte(2);
        journal
            .record(
                "TokenModule",
                &id,
                StepRecord::confirmed("Token", tx_hash, address),
            )
            .unwrap();

        let reopened = Journal::open(&path).unwrap();
        let (record, found) = reopened.confirmed("TokenModule", &id).unwrap();
        assert_eq!(found, address);
        assert_eq!(record.tx_hash, Some(tx_hash));
        assert_eq!(record.artifact, "Token");
    }

    #[test]
    fn submitted_and_failed_records_do_not_satisfy_confirmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.json");
        let id = future_id();
        let tx_hash = TxHash::with_last_byte(3);

        let mut journal = Journal::open(&path).unwrap();
        journal
            .record("TokenModule", &id, StepRecord::submitted("Token", tx_hash))
            .unwrap();
        assert!(journal.confirmed("TokenModule", &id).is_none());

        journal
            .record("TokenModule", &id, StepRecord::failed("Token", tx_hash))
            .unwrap();
        assert!(journal.confirmed("TokenModule", &id).is_none());
        assert_eq!(journal.module_entries("TokenModule").count(), 1);
    }

    #[test]
    fn wipe_removes_module_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.json");
        let id = future_id();

        let mut journal = Journal::open(&path).unwrap();
        journal
            .record(
                "TokenModule",
                &id,
                StepRecord::confirmed(
                    "Token",
                    TxHash::with_last_byte(1),
                    Address::with_last_byte(2),
                ),
            )
            .unwrap();

        assert_eq!(journal.wipe_module("TokenModule").unwrap(), 1);
        assert_eq!(journal.wipe_module("TokenModule").unwrap(), 0);
        assert!(journal.confirmed("TokenModule", &id).is_none());

        let reopened = Journal::open(&path).unwrap();
        assert!(reopened.confirmed("TokenModule", &id).is_none());
    }
}
