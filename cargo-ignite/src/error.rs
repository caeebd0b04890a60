// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ignite-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

pub type CargoIgniteResult = Result<(), CargoIgniteError>;

#[derive(Debug)]
pub struct CargoIgniteError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl CargoIgniteError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for CargoIgniteError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for CargoIgniteError {
    fn from(err: std::io::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eyre::Error> for CargoIgniteError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<ignite_tools::Error> for CargoIgniteError {
    fn from(err: ignite_tools::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<ignite_tools::ModuleError> for CargoIgniteError {
    fn from(err: ignite_tools::ModuleError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<ignite_tools::core::artifact::ArtifactError> for CargoIgniteError {
    fn from(err: ignite_tools::core::artifact::ArtifactError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<ignite_tools::core::deployment::DeploymentError> for CargoIgniteError {
    fn from(err: ignite_tools::core::deployment::DeploymentError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<ignite_tools::core::deployment::journal::JournalError> for CargoIgniteError {
    fn from(err: ignite_tools::core::deployment::journal::JournalError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<ignite_tools::core::execution::ExecutionError> for CargoIgniteError {
    fn from(err: ignite_tools::core::execution::ExecutionError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}
