// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ignite-rs/blob/main/licenses/COPYRIGHT.md

use eyre::eyre;
use ignite_tools::core::deployment::journal::Journal;
use ignite_tools::execute_module;
use ignite_tools::utils::color::Color;

use crate::{
    common_args::{AuthArgs, ProjectArgs, ProviderArgs},
    error::CargoIgniteResult,
    modules,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Name of the module to run.
    module: String,
    /// Only perform gas estimation.
    #[arg(long)]
    estimate_gas: bool,
    /// Wipe the module's journal entries before deploying.
    #[arg(long)]
    reset: bool,

    /// Wallet source to use.
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    project: ProjectArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> CargoIgniteResult {
    let registry = modules::registry()?;
    let module = registry
        .get(&args.module)
        .ok_or_else(|| eyre!("unknown module: {}", args.module))?;

    if args.reset {
        let mut journal = Journal::open(args.project.journal())?;
        journal.wipe_module(module.name())?;
    }

    let config = args.project.config(&args.auth, args.estimate_gas)?;
    let provider = args.provider.build_provider_with_wallet(&args.auth).await?;
    let results = execute_module(module, &config, &provider).await?;

    for (name, contract) in results.iter() {
        let line = format!("{} ({name}) - {}", contract.future(), contract.address());
        println!("{}", line.mint());
    }
    Ok(())
}
