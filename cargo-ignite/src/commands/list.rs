// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ignite-rs/blob/main/licenses/COPYRIGHT.md

use ignite_tools::utils::color::Color;

use crate::{error::CargoIgniteResult, modules};

#[derive(Debug, clap::Args)]
pub struct Args {}

pub fn exec(_args: Args) -> CargoIgniteResult {
    let registry = modules::registry()?;
    for module in registry.iter() {
        println!("{}", module.name().mint());
        for step in module.steps() {
            let args = step.constructor_args().join(", ");
            println!("  {} <- {}({args})", step.id(), step.artifact());
        }
        for (name, future) in module.returns() {
            println!("  returns {name} = {future}");
        }
    }
    Ok(())
}
