// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ignite-rs/blob/main/licenses/COPYRIGHT.md

/// The default endpoint for connections to a node.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8547";

/// Directory searched for contract artifacts.
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// Location of the deployment journal.
pub const DEFAULT_JOURNAL_PATH: &str = "deployments/journal.json";
