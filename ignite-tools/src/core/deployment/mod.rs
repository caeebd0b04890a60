// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ignite-rs/blob/main/licenses/COPYRIGHT.md

//! Contract deployment over an alloy provider.

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt, Specifier},
    json_abi::Constructor,
    network::{Ethereum, TransactionBuilder},
    primitives::{Address, TxHash, U256},
    providers::{PendingTransactionBuilder, Provider},
    rpc::types::{TransactionReceipt, TransactionRequest},
};
use eyre::Context;

use crate::{
    core::{artifact::Artifact, chain::ChainConfig},
    utils::color::{Color, DebugColor},
};

pub mod journal;

/// Deployment transaction for a single module step.
#[derive(Debug)]
pub struct DeploymentRequest {
    tx: TransactionRequest,
    max_fee_per_gas_wei: Option<u128>,
}

impl DeploymentRequest {
    pub fn new(sender: Address, init_code: Vec<u8>, max_fee_per_gas_wei: Option<u128>) -> Self {
        Self {
            tx: TransactionRequest::default()
                .with_from(sender)
                .with_deploy_code(init_code),
            max_fee_per_gas_wei,
        }
    }

    pub async fn estimate_gas(&self, provider: &impl Provider) -> Result<u64, DeploymentError> {
        Ok(provider.estimate_gas(self.tx.clone()).await?)
    }

    pub async fn fee_per_gas(&self, provider: &impl Provider) -> Result<u128, DeploymentError> {
        match self.max_fee_per_gas_wei {
            Some(wei) => Ok(wei),
            None => Ok(provider.get_gas_price().await?),
        }
    }

    /// Fills gas and fees, then submits the transaction.
    pub async fn submit(
        self,
        provider: &impl Provider,
    ) -> Result<PendingDeployment, DeploymentError> {
        let gas = self.estimate_gas(provider).await?;
        let max_fee_per_gas = self.fee_per_gas(provider).await?;

        let mut tx = self.tx;
        tx.gas = Some(gas);
        tx.max_fee_per_gas = Some(max_fee_per_gas);
        tx.max_priority_fee_per_gas = Some(0);

        let pending = provider.send_transaction(tx).await?;
        debug!(@grey, "sent deploy tx: {}", pending.tx_hash().debug_lavender());
        Ok(PendingDeployment { inner: pending })
    }

    /// Submits the transaction and waits for its receipt.
    pub async fn exec(
        self,
        provider: &impl Provider,
    ) -> Result<TransactionReceipt, DeploymentError> {
        self.submit(provider).await?.confirm().await
    }
}

/// A submitted deployment transaction awaiting confirmation.
pub struct PendingDeployment {
    inner: PendingTransactionBuilder<Ethereum>,
}

impl PendingDeployment {
    pub fn tx_hash(&self) -> TxHash {
        *self.inner.tx_hash()
    }

    pub async fn confirm(self) -> Result<TransactionReceipt, DeploymentError> {
        let tx_hash = self.tx_hash();
        let receipt = self
            .inner
            .get_receipt()
            .await
            .or(Err(DeploymentError::FailedToComplete))?;
        if !receipt.status() {
            return Err(DeploymentError::Reverted { tx_hash });
        }
        Ok(receipt)
    }
}

/// Assembles init code for an artifact: deployment bytecode followed by the
/// ABI-encoded constructor arguments.
///
/// The argument list must match the artifact's constructor exactly; mismatches
/// are rejected here, before any transaction is built.
pub fn init_code(
    artifact: &Artifact,
    constructor_args: &[String],
    chain: &ChainConfig,
) -> Result<Vec<u8>, DeploymentError> {
    let mut code = artifact.bytecode.to_vec();
    match artifact.constructor() {
        None => {
            if !constructor_args.is_empty() {
                return Err(DeploymentError::InvalidConstructor(format!(
                    "artifact {} has no constructor (got {} args)",
                    artifact.contract_name,
                    constructor_args.len(),
                )));
            }
        }
        Some(constructor) => {
            if constructor_args.len() != constructor.inputs.len() {
                return Err(DeploymentError::InvalidConstructor(format!(
                    "mismatch number of constructor arguments (want {:?} ({}); got {})",
                    constructor.inputs,
                    constructor.inputs.len(),
                    constructor_args.len(),
                )));
            }
            let encoded = encode_constructor_args(constructor, constructor_args)
                .map_err(|err| DeploymentError::InvalidConstructor(err.to_string()))?;
            code.extend(encoded);
        }
    }
    if code.len() as u64 > chain.max_init_code_size {
        return Err(DeploymentError::InitCodeTooLarge {
            size: code.len(),
            max: chain.max_init_code_size,
        });
    }
    Ok(code)
}

fn encode_constructor_args(constructor: &Constructor, args: &[String]) -> eyre::Result<Vec<u8>> {
    let mut arg_values = Vec::<DynSolValue>::with_capacity(args.len());
    for (arg, param) in args.iter().zip(constructor.inputs.iter()) {
        let ty = param
            .resolve()
            .wrap_err_with(|| format!("could not resolve constructor arg: {param}"))?;
        let value = ty
            .coerce_str(arg)
            .wrap_err_with(|| format!("could not parse constructor arg: {param}"))?;
        arg_values.push(value);
    }
    Ok(constructor.abi_encode_input_raw(&arg_values)?)
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),

    #[error("tx failed to complete")]
    FailedToComplete,
    #[error("failed to get balance")]
    FailedToGetBalance,
    #[error(
        "not enough funds in account {} to cover the deployment fee\nbalance {} < {}",
        .from_address.red(),
        .balance.red(),
        format!("{} wei", .required).red(),
    )]
    NotEnoughFunds {
        from_address: Address,
        balance: U256,
        required: U256,
    },
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("missing contract address in receipt for tx {}", .tx_hash.debug_red())]
    NoContractAddress { tx_hash: TxHash },
    #[error("invalid constructor: {0}")]
    InvalidConstructor(String),
    #[error("init code is {size} bytes, exceeding the {max} byte limit")]
    InitCodeTooLarge { size: usize, max: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{json_abi::JsonAbi, primitives::Bytes};

    fn artifact(abi_json: &str, bytecode: &[u8]) -> Artifact {
        Artifact {
            contract_name: "Test".to_string(),
            abi: serde_json::from_str::<JsonAbi>(abi_json).unwrap(),
            bytecode: Bytes::copy_from_slice(bytecode),
        }
    }

    const CTOR_UINT: &str = r#"[
        {
            "type": "constructor",
            "stateMutability": "nonpayable",
            "inputs": [{"name": "supply", "type": "uint256"}]
        }
    ]"#;

    #[test]
    fn plain_bytecode_without_constructor() {
        let artifact = artifact("[]", &[0x60, 0x80]);
        let code = init_code(&artifact, &[], &ChainConfig::default()).unwrap();
        assert_eq!(code, [0x60, 0x80]);
    }

    #[test]
    fn appends_encoded_constructor_args() {
        let artifact = artifact(CTOR_UINT, &[0x60, 0x80]);
        let code = init_code(&artifact, &["5".to_string()], &ChainConfig::default()).unwrap();
        assert_eq!(code.len(), 2 + 32);
        assert_eq!(code[..2], [0x60, 0x80]);
        assert_eq!(code[code.len() - 1], 5);
    }

    #[test]
    fn rejects_arity_mismatch() {
        let artifact = artifact(CTOR_UINT, &[0x60, 0x80]);
        let err = init_code(&artifact, &[], &ChainConfig::default()).unwrap_err();
        assert!(matches!(err, DeploymentError::InvalidConstructor(_)));
    }

    #[test]
    fn rejects_args_for_missing_constructor() {
        let artifact = artifact("[]", &[0x60, 0x80]);
        let err = init_code(&artifact, &["5".to_string()], &ChainConfig::default()).unwrap_err();
        assert!(matches!(err, DeploymentError::InvalidConstructor(_)));
    }

    #[test]
    fn rejects_uncoercible_args() {
        let artifact = artifact(CTOR_UINT, &[0x60, 0x80]);
        let err =
            init_code(&artifact, &["not a number".to_string()], &ChainConfig::default())
                .unwrap_err();
        assert!(matches!(err, DeploymentError::InvalidConstructor(_)));
    }

    #[test]
    fn enforces_init_code_size_cap() {
        let artifact = artifact("[]", &[0u8; 64]);
        let chain = ChainConfig {
            max_init_code_size: 32,
        };
        let err = init_code(&artifact, &[], &chain).unwrap_err();
        assert!(matches!(
            err,
            DeploymentError::InitCodeTooLarge { size: 64, max: 32 }
        ));
    }
}
