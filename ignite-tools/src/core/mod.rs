// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ignite-rs/blob/main/licenses/COPYRIGHT.md

//! Core functionality for declarative deployment modules.

pub mod artifact;
pub mod chain;
pub mod deployment;
pub mod execution;
pub mod module;
pub mod registry;
