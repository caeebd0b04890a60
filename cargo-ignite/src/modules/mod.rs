// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ignite-rs/blob/main/licenses/COPYRIGHT.md

//! The project's deployment modules.
//!
//! Each module lives in its own file and is registered in [`registry`].

use ignite_tools::{ModuleRegistry, Result};

pub mod streak_tracker;

/// Builds the registry of all deployment modules known to the project.
pub fn registry() -> Result<ModuleRegistry> {
    let mut registry = ModuleRegistry::new();
    registry.register(streak_tracker::module()?)?;
    Ok(registry)
}
