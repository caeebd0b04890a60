// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ignite-rs/blob/main/licenses/COPYRIGHT.md

use ignite_tools::{build_module, Module, ModuleError};

/// Deploys the StreakTracker contract with no constructor arguments.
pub fn module() -> Result<Module, ModuleError> {
    build_module("StreakTrackerModule", |m| {
        let streak_tracker = m.contract("StreakTracker", &[]);
        [("streakTracker", streak_tracker)]
    })
}
