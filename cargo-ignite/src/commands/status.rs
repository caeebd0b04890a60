// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ignite-rs/blob/main/licenses/COPYRIGHT.md

use ignite_tools::core::deployment::journal::Journal;
use ignite_tools::utils::color::Color;

use crate::{common_args::ProjectArgs, error::CargoIgniteResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Name of the module to inspect.
    module: String,

    #[command(flatten)]
    project: ProjectArgs,
}

pub fn exec(args: Args) -> CargoIgniteResult {
    let journal = Journal::open(args.project.journal())?;
    let mut entries = journal.module_entries(&args.module).peekable();
    if entries.peek().is_none() {
        println!("{}", format!("no journaled deployments for {}", args.module).grey());
        return Ok(());
    }
    for (future, record) in entries {
        let mut line = format!("{future}: {}", record.state);
        if let Some(address) = record.address {
            line.push_str(&format!(" at {address}"));
        }
        if let Some(tx_hash) = record.tx_hash {
            line.push_str(&format!(" (tx {tx_hash})"));
        }
        println!("{}", line.grey());
    }
    Ok(())
}
