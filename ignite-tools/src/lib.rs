// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ignite-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for defining and executing declarative contract deployment modules.
//!
//! A deployment module names a set of contract deployments and the handles it
//! exposes to its consumers. Modules are plain data: authoring one performs no
//! I/O. All side effects happen when a module is executed against an
//! [`alloy`] provider, at which point every step is journaled so re-running a
//! module never redeploys a contract that already confirmed.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod utils;

pub use crate::core::execution::{execute_module, ExecutionConfig, ModuleResults};
pub use crate::core::module::{build_module, ContractFuture, Module, ModuleBuilder, ModuleError};
pub use crate::core::registry::ModuleRegistry;
pub use error::{Error, Result};
