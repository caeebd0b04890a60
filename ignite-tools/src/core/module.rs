// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ignite-rs/blob/main/licenses/COPYRIGHT.md

//! Declarative deployment modules.
//!
//! A module is authored with [`build_module`]: the build closure receives a
//! [`ModuleBuilder`] and declares contract deployments with
//! [`ModuleBuilder::contract`], each of which yields a [`ContractFuture`].
//! The closure returns the futures the module exposes to consumers, keyed by
//! logical name. The resulting [`Module`] is immutable; nothing touches the
//! network until it is handed to
//! [`execute_module`](crate::core::execution::execute_module).

use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;

/// Identifier of a single deployment step, stable across runs.
///
/// Rendered as `"<Module>#<Artifact>"`, with a numeric suffix when a module
/// deploys the same artifact more than once. Used as the journal key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FutureId(String);

impl FutureId {
    fn new(module: &str, artifact: &str, occurrence: usize) -> Self {
        if occurrence <= 1 {
            Self(format!("{module}#{artifact}"))
        } else {
            Self(format!("{module}#{artifact}_{occurrence}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FutureId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unresolved handle to a contract deployed by a module step.
///
/// Holds no address. It resolves against the
/// [`ModuleResults`](crate::core::execution::ModuleResults) of a successful
/// execution; resolving it anywhere else fails.
#[derive(Debug, Clone)]
pub struct ContractFuture {
    id: FutureId,
    artifact: String,
}

impl ContractFuture {
    pub fn id(&self) -> &FutureId {
        &self.id
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }
}

/// A single contract deployment within a module.
#[derive(Debug, Clone)]
pub struct DeploymentStep {
    id: FutureId,
    artifact: String,
    constructor_args: Vec<String>,
}

impl DeploymentStep {
    pub fn id(&self) -> &FutureId {
        &self.id
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    /// Constructor arguments, coerced against the artifact ABI at execution.
    pub fn constructor_args(&self) -> &[String] {
        &self.constructor_args
    }
}

/// An immutable, named set of deployment steps and the handles it exposes.
#[derive(Debug)]
pub struct Module {
    name: String,
    steps: Vec<DeploymentStep>,
    returns: IndexMap<String, FutureId>,
}

impl Module {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Deployment steps in declaration order.
    pub fn steps(&self) -> &[DeploymentStep] {
        &self.steps
    }

    /// Logical result names mapped to their steps, in declaration order.
    pub fn returns(&self) -> &IndexMap<String, FutureId> {
        &self.returns
    }
}

/// Builder capability handed to the module build closure.
#[derive(Debug)]
pub struct ModuleBuilder {
    module_name: String,
    steps: Vec<DeploymentStep>,
    occurrences: HashMap<String, usize>,
}

impl ModuleBuilder {
    fn new(module_name: &str) -> Self {
        Self {
            module_name: module_name.to_string(),
            steps: Vec::new(),
            occurrences: HashMap::new(),
        }
    }

    /// Declares the deployment of `artifact` with the given constructor
    /// arguments and returns a future handle to the deployed contract.
    pub fn contract(&mut self, artifact: &str, constructor_args: &[&str]) -> ContractFuture {
        let occurrence = self
            .occurrences
            .entry(artifact.to_string())
            .and_modify(|n| *n += 1)
            .or_insert(1);
        let id = FutureId::new(&self.module_name, artifact, *occurrence);
        self.steps.push(DeploymentStep {
            id: id.clone(),
            artifact: artifact.to_string(),
            constructor_args: constructor_args.iter().map(ToString::to_string).collect(),
        });
        ContractFuture {
            id,
            artifact: artifact.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    #[error("invalid module name {0:?}")]
    InvalidName(String),
    #[error("module {0:?} is already registered")]
    DuplicateModule(String),
    #[error("module {module:?} returns {name:?} more than once")]
    DuplicateResultName { module: String, name: String },
    #[error("future {future} returned by module {module:?} was built elsewhere")]
    ForeignFuture { module: String, future: FutureId },
}

/// Builds a deployment module.
///
/// `name` must be a non-empty identifier, unique within the project. The
/// closure declares the module's steps and returns its result mapping.
pub fn build_module<F, R, K>(name: &str, build: F) -> Result<Module, ModuleError>
where
    F: FnOnce(&mut ModuleBuilder) -> R,
    R: IntoIterator<Item = (K, ContractFuture)>,
    K: Into<String>,
{
    if !is_valid_name(name) {
        return Err(ModuleError::InvalidName(name.to_string()));
    }

    let mut builder = ModuleBuilder::new(name);
    let returned = build(&mut builder);

    let mut returns = IndexMap::new();
    for (key, future) in returned {
        let key = key.into();
        if !builder.steps.iter().any(|step| step.id == future.id) {
            return Err(ModuleError::ForeignFuture {
                module: name.to_string(),
                future: future.id,
            });
        }
        if returns.insert(key.clone(), future.id).is_some() {
            return Err(ModuleError::DuplicateResultName {
                module: name.to_string(),
                name: key,
            });
        }
    }

    Ok(Module {
        name: builder.module_name,
        steps: builder.steps,
        returns,
    })
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_single_step_module() {
        let module = build_module("TokenModule", |m| {
            let token = m.contract("Token", &[]);
            [("token", token)]
        })
        .unwrap();

        assert_eq!(module.name(), "TokenModule");
        assert_eq!(module.steps().len(), 1);
        assert_eq!(module.steps()[0].artifact(), "Token");
        assert!(module.steps()[0].constructor_args().is_empty());
        assert_eq!(module.returns().len(), 1);
        assert_eq!(
            module.returns().get("token").unwrap().as_str(),
            "TokenModule#Token"
        );
    }

    #[test]
    fn steps_keep_declaration_order() {
        let module = build_module("Pair", |m| {
            let a = m.contract("TokenA", &["1000"]);
            let b = m.contract("TokenB", &["2000"]);
            [("a", a), ("b", b)]
        })
        .unwrap();

        let ids: Vec<_> = module.steps().iter().map(|s| s.id().as_str()).collect();
        assert_eq!(ids, ["Pair#TokenA", "Pair#TokenB"]);
        assert_eq!(module.steps()[0].constructor_args(), ["1000"]);
        let keys: Vec<_> = module.returns().keys().collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn repeated_artifact_gets_suffixed_id() {
        let module = build_module("Multi", |m| {
            let first = m.contract("Vault", &[]);
            let second = m.contract("Vault", &[]);
            [("first", first), ("second", second)]
        })
        .unwrap();

        let ids: Vec<_> = module.steps().iter().map(|s| s.id().as_str()).collect();
        assert_eq!(ids, ["Multi#Vault", "Multi#Vault_2"]);
    }

    #[test]
    fn rejects_invalid_names() {
        for name in ["", "1Module", "My Module", "Mod-ule"] {
            let err = build_module(name, |m| [("c", m.contract("C", &[]))]).unwrap_err();
            assert!(matches!(err, ModuleError::InvalidName(_)), "{name:?}");
        }
    }

    #[test]
    fn rejects_duplicate_result_names() {
        let err = build_module("Dup", |m| {
            let a = m.contract("A", &[]);
            let b = m.contract("B", &[]);
            [("same", a), ("same", b)]
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ModuleError::DuplicateResultName { ref name, .. } if name == "same"
        ));
    }

    #[test]
    fn rejects_futures_from_other_modules() {
        let mut stray = None;
        build_module("Original", |m| {
            let c = m.contract("C", &[]);
            stray = Some(c.clone());
            [("c", c)]
        })
        .unwrap();

        let stray = stray.unwrap();
        let err = build_module("Imposter", |_| [("c", stray)]).unwrap_err();
        assert!(matches!(err, ModuleError::ForeignFuture { .. }));
    }
}
