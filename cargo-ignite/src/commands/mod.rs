// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ignite-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::CargoIgniteResult;

mod deploy;
mod list;
mod status;
mod wipe;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Run a deployment module
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// List the project's deployment modules
    #[clap(visible_alias = "l")]
    List(list::Args),
    /// Show journaled deployment state for a module
    #[clap(visible_alias = "s")]
    Status(status::Args),
    /// Remove journaled deployment state for a module
    Wipe(wipe::Args),
}

pub async fn exec(cmd: Command) -> CargoIgniteResult {
    match cmd {
        Command::Deploy(args) => deploy::exec(args).await,
        Command::List(args) => list::exec(args),
        Command::Status(args) => status::exec(args),
        Command::Wipe(args) => wipe::exec(args),
    }
}
