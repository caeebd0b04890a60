// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ignite-rs/blob/main/licenses/COPYRIGHT.md

//! Execution of deployment modules.

use std::path::PathBuf;

use alloy::{
    primitives::{Address, TxHash, U256},
    providers::{Provider, WalletProvider},
};
use indexmap::IndexMap;
use typed_builder::TypedBuilder;

use crate::{
    core::{
        artifact::{ArtifactError, ArtifactStore},
        chain::ChainConfig,
        deployment::{
            init_code,
            journal::{Journal, JournalError, StepRecord},
            DeploymentError, DeploymentRequest,
        },
        module::{ContractFuture, FutureId, Module},
    },
    utils::{color::DebugColor, format_gas},
};

/// Configuration for executing a deployment module.
#[derive(Debug, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct ExecutionConfig {
    /// Directory holding contract artifacts.
    #[builder(default = "artifacts".into())]
    pub artifacts_dir: PathBuf,
    /// Path of the execution journal.
    #[builder(default = "deployments/journal.json".into())]
    pub journal_path: PathBuf,
    /// Optional max fee per gas in wei; the chain's gas price otherwise.
    #[builder(default)]
    pub max_fee_per_gas_wei: Option<u128>,
    /// Only estimate gas, do not submit transactions.
    #[builder(default = false)]
    pub estimate_gas: bool,
    #[builder(default)]
    pub chain: ChainConfig,
}

/// A contract deployed (or reused from the journal) by a module execution.
#[derive(Debug, Clone)]
pub struct DeployedContract {
    future: FutureId,
    artifact: String,
    address: Address,
    tx_hash: Option<TxHash>,
    newly_deployed: bool,
}

impl DeployedContract {
    pub fn future(&self) -> &FutureId {
        &self.future
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn tx_hash(&self) -> Option<TxHash> {
        self.tx_hash
    }

    /// False when the journal already held a confirmed deployment and the
    /// step was skipped.
    pub fn newly_deployed(&self) -> bool {
        self.newly_deployed
    }
}

/// Results of a successful module execution: the module's logical result
/// names mapped to deployed contracts, in declaration order.
#[derive(Debug)]
pub struct ModuleResults {
    module: String,
    contracts: IndexMap<String, DeployedContract>,
}

impl ModuleResults {
    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn get(&self, name: &str) -> Option<&DeployedContract> {
        self.contracts.get(name)
    }

    /// Resolves a future handle to its deployed address. Fails for handles
    /// that are not part of this execution's result set.
    pub fn address_of(&self, future: &ContractFuture) -> Result<Address, ExecutionError> {
        self.contracts
            .values()
            .find(|contract| contract.future == *future.id())
            .map(DeployedContract::address)
            .ok_or_else(|| ExecutionError::UnresolvedFuture {
                module: self.module.clone(),
                future: future.id().clone(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DeployedContract)> {
        self.contracts
            .iter()
            .map(|(name, contract)| (name.as_str(), contract))
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    #[error("{0}")]
    Artifact(#[from] ArtifactError),
    #[error("{0}")]
    Deployment(#[from] DeploymentError),
    #[error("{0}")]
    Journal(#[from] JournalError),
    #[error("future {future} is not part of the results of module {module:?}")]
    UnresolvedFuture { module: String, future: FutureId },
}

/// Executes a deployment module against a provider with an attached wallet.
///
/// Steps run in declaration order. A step whose future id has a confirmed
/// journal entry is not redeployed; its recorded address is reused. With
/// `estimate_gas` set, gas is estimated and reported for each pending step
/// and nothing is submitted.
pub async fn execute_module(
    module: &Module,
    config: &ExecutionConfig,
    provider: &(impl Provider + WalletProvider),
) -> Result<ModuleResults, ExecutionError> {
    let artifacts = ArtifactStore::new(&config.artifacts_dir);
    let mut journal = Journal::open(&config.journal_path)?;
    let sender = provider.default_signer_address();
    debug!(@grey, "sender address: {}", sender.debug_lavender());

    let mut deployed: IndexMap<FutureId, DeployedContract> = IndexMap::new();
    for step in module.steps() {
        if let Some((record, address)) = journal.confirmed(module.name(), step.id()) {
            info!(@grey, "{} already deployed at {}, skipping", step.id(), address.debug_lavender());
            deployed.insert(
                step.id().clone(),
                DeployedContract {
                    future: step.id().clone(),
                    artifact: step.artifact().to_string(),
                    address,
                    tx_hash: record.tx_hash,
                    newly_deployed: false,
                },
            );
            continue;
        }

        let artifact = artifacts.load(step.artifact())?;
        let code = init_code(&artifact, step.constructor_args(), &config.chain)?;
        let request = DeploymentRequest::new(sender, code, config.max_fee_per_gas_wei);

        let gas = request.estimate_gas(provider).await?;
        let gas_price = request.fee_per_gas(provider).await?;
        if config.estimate_gas {
            info!(
                @grey,
                "{} estimated at {} with gas price {} wei",
                step.id(),
                format_gas(gas),
                gas_price
            );
            continue;
        }

        let required = U256::from(gas) * U256::from(gas_price);
        let balance = provider
            .get_balance(sender)
            .await
            .map_err(|_| DeploymentError::FailedToGetBalance)?;
        if balance < required {
            return Err(DeploymentError::NotEnoughFunds {
                from_address: sender,
                balance,
                required,
            }
            .into());
        }

        let pending = request.submit(provider).await?;
        journal.record(
            module.name(),
            step.id(),
            StepRecord::submitted(step.artifact(), pending.tx_hash()),
        )?;

        let receipt = match pending.confirm().await {
            Ok(receipt) => receipt,
            Err(err) => {
                if let DeploymentError::Reverted { tx_hash } = err {
                    journal.record(
                        module.name(),
                        step.id(),
                        StepRecord::failed(step.artifact(), tx_hash),
                    )?;
                }
                return Err(err.into());
            }
        };

        let address =
            receipt
                .contract_address
                .ok_or(DeploymentError::NoContractAddress {
                    tx_hash: receipt.transaction_hash,
                })?;
        journal.record(
            module.name(),
            step.id(),
            StepRecord::confirmed(step.artifact(), receipt.transaction_hash, address),
        )?;

        info!(@grey, "deployed {} at address: {}", step.id(), address.debug_lavender());
        debug!(@grey, "gas used: {}", format_gas(receipt.gas_used));
        info!(@grey, "deployment tx hash: {}", receipt.transaction_hash.debug_lavender());

        deployed.insert(
            step.id().clone(),
            DeployedContract {
                future: step.id().clone(),
                artifact: step.artifact().to_string(),
                address,
                tx_hash: Some(receipt.transaction_hash),
                newly_deployed: true,
            },
        );
    }

    let mut contracts = IndexMap::new();
    for (name, future) in module.returns() {
        // estimate-only runs leave pending steps unresolved
        if let Some(contract) = deployed.get(future) {
            contracts.insert(name.clone(), contract.clone());
        }
    }
    Ok(ModuleResults {
        module: module.name().to_string(),
        contracts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::module::build_module;

    fn results_for(module: &Module, address: Address) -> ModuleResults {
        let mut contracts = IndexMap::new();
        for (name, future) in module.returns() {
            contracts.insert(
                name.clone(),
                DeployedContract {
                    future: future.clone(),
                    artifact: "Token".to_string(),
                    address,
                    tx_hash: Some(TxHash::with_last_byte(9)),
                    newly_deployed: true,
                },
            );
        }
        ModuleResults {
            module: module.name().to_string(),
            contracts,
        }
    }

    #[test]
    fn resolves_own_futures_only() {
        let mut handle = None;
        let module = build_module("TokenModule", |m| {
            let token = m.contract("Token", &[]);
            handle = Some(token.clone());
            [("token", token)]
        })
        .unwrap();
        let handle = handle.unwrap();

        let address = Address::with_last_byte(7);
        let results = results_for(&module, address);
        assert_eq!(results.module(), "TokenModule");
        assert_eq!(results.address_of(&handle).unwrap(), address);
        assert_eq!(results.get("token").unwrap().address(), address);

        let mut other_handle = None;
        build_module("Other", |m| {
            let c = m.contract("Token", &[]);
            other_handle = Some(c.clone());
            [("token", c)]
        })
        .unwrap();
        let err = results.address_of(&other_handle.unwrap()).unwrap_err();
        assert!(matches!(err, ExecutionError::UnresolvedFuture { .. }));
    }

    #[test]
    fn builds_execution_config_with_defaults() {
        let config = ExecutionConfig::builder().build();
        assert_eq!(config.artifacts_dir, PathBuf::from("artifacts"));
        assert_eq!(config.journal_path, PathBuf::from("deployments/journal.json"));
        assert_eq!(config.max_fee_per_gas_wei, None);
        assert!(!config.estimate_gas);

        let config = ExecutionConfig::builder()
            .artifacts_dir("out")
            .journal_path("state.json")
            .max_fee_per_gas_wei(Some(2_000_000_000))
            .estimate_gas(true)
            .build();
        assert_eq!(config.artifacts_dir, PathBuf::from("out"));
        assert!(config.estimate_gas);
    }
}
