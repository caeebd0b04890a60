// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ignite-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts.
//!
//! An artifact is a JSON file named after the contract, holding its ABI and
//! deployment bytecode. Artifacts are produced by the contract build
//! pipeline; this module only reads them.

use std::fs;
use std::path::PathBuf;

use alloy::json_abi::{Constructor, JsonAbi};
use alloy::primitives::Bytes;
use serde::Deserialize;

/// On-disk artifact layout.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    contract_name: String,
    abi: JsonAbi,
    bytecode: String,
}

/// A compiled contract: ABI plus deployment bytecode.
#[derive(Debug)]
pub struct Artifact {
    pub contract_name: String,
    pub abi: JsonAbi,
    pub bytecode: Bytes,
}

impl Artifact {
    pub fn constructor(&self) -> Option<&Constructor> {
        self.abi.constructor()
    }
}

/// Loads artifacts by contract name from a project directory.
#[derive(Debug)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    pub fn load(&self, name: &str) -> Result<Artifact, ArtifactError> {
        let path = self.path(name);
        if !path.exists() {
            return Err(ArtifactError::NotFound {
                name: name.to_string(),
                dir: self.dir.clone(),
            });
        }
        let raw: RawArtifact =
            serde_json::from_str(&fs::read_to_string(&path)?).map_err(|source| {
                ArtifactError::Malformed {
                    name: name.to_string(),
                    source,
                }
            })?;
        let bytecode = decode_bytecode(name, &raw.bytecode)?;
        if bytecode.is_empty() {
            return Err(ArtifactError::EmptyBytecode(name.to_string()));
        }
        Ok(Artifact {
            contract_name: raw.contract_name,
            abi: raw.abi,
            bytecode,
        })
    }
}

fn decode_bytecode(name: &str, bytecode: &str) -> Result<Bytes, ArtifactError> {
    let text = bytecode.trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(text)
        .map(Bytes::from)
        .map_err(|source| ArtifactError::InvalidBytecode {
            name: name.to_string(),
            source,
        })
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact {name:?} not found under {}", .dir.display())]
    NotFound { name: String, dir: PathBuf },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed artifact {name:?}: {source}")]
    Malformed {
        name: String,
        source: serde_json::Error,
    },
    #[error("artifact {name:?} bytecode is not hex: {source}")]
    InvalidBytecode {
        name: String,
        source: hex::FromHexError,
    },
    #[error("artifact {0:?} has no bytecode")]
    EmptyBytecode(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write_artifact(dir: &Path, name: &str, json: &str) {
        fs::write(dir.join(format!("{name}.json")), json).unwrap();
    }

    #[test]
    fn loads_artifact() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(
            dir.path(),
            "Token",
            r#"{
                "contractName": "Token",
                "abi": [
                    {
                        "type": "constructor",
                        "stateMutability": "nonpayable",
                        "inputs": [{"name": "supply", "type": "uint256"}]
                    }
                ],
                "bytecode": "0x6080604052"
            }"#,
        );

        let store = ArtifactStore::new(dir.path());
        let artifact = store.load("Token").unwrap();
        assert_eq!(artifact.contract_name, "Token");
        assert_eq!(artifact.bytecode.as_ref(), [0x60, 0x80, 0x60, 0x40, 0x52]);
        assert_eq!(artifact.constructor().unwrap().inputs.len(), 1);
    }

    #[test]
    fn missing_artifact_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        let err = store.load("Nope").unwrap_err();
        assert!(matches!(err, ArtifactError::NotFound { name, .. } if name == "Nope"));
    }

    #[test]
    fn rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "Broken", "{ not json");
        let store = ArtifactStore::new(dir.path());
        let err = store.load("Broken").unwrap_err();
        assert!(matches!(err, ArtifactError::Malformed { .. }));
    }

    #[test]
    fn rejects_empty_bytecode() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(
            dir.path(),
            "Header",
            r#"{"contractName": "Header", "abi": [], "bytecode": "0x"}"#,
        );
        let store = ArtifactStore::new(dir.path());
        let err = store.load("Header").unwrap_err();
        assert!(matches!(err, ArtifactError::EmptyBytecode(_)));
    }
}
