// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ignite-rs/blob/main/licenses/COPYRIGHT.md

use ignite_tools::core::deployment::journal::Journal;
use ignite_tools::utils::color::Color;

use crate::{common_args::ProjectArgs, error::CargoIgniteResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Name of the module whose journal entries to remove.
    module: String,

    #[command(flatten)]
    project: ProjectArgs,
}

pub fn exec(args: Args) -> CargoIgniteResult {
    let mut journal = Journal::open(args.project.journal())?;
    let removed = journal.wipe_module(&args.module)?;
    println!(
        "{}",
        format!("wiped {removed} journaled deployment(s) of {}", args.module).grey()
    );
    Ok(())
}
