//! Contract registry
//!
//! Builds the ordered list of contract descriptors for one deployment run.
//! The execution environment is fixed when the registry is built: in the
//! local environment the beacon state verifier and block roots slots resolve
//! to their mock artifacts, and nothing else changes.

pub mod contracts;
pub mod strategy;

pub use contracts::{NetworkContract, NETWORK_CONTRACT_COUNT};
pub use strategy::InstantiationStrategy;

use tracing::{debug, info, warn};

use crate::artifacts::{ArtifactProvider, ContractArtifact};
use crate::config::ExecutionEnvironment;
use crate::errors::UpgradeError;

/// Deployable contract slot
#[derive(Debug, Clone)]
pub struct ContractDescriptor {
    pub contract: NetworkContract,
    pub artifact: ContractArtifact,
    pub strategy: InstantiationStrategy,
}

impl ContractDescriptor {
    /// Whether this slot resolved to a test double
    pub fn is_mock(&self) -> bool {
        self.contract.mock_artifact_name() == Some(self.artifact.contract_name.as_str())
    }
}

/// Ordered contract registry
#[derive(Debug, Clone)]
pub struct Registry {
    environment: ExecutionEnvironment,
    entries: Vec<ContractDescriptor>,
}

impl Registry {
    /// Resolve every contract slot through `provider`
    ///
    /// Fails with a configuration error on the first missing artifact, before
    /// anything has been deployed.
    pub fn build(
        provider: &dyn ArtifactProvider,
        environment: ExecutionEnvironment,
    ) -> Result<Self, UpgradeError> {
        let mut entries = Vec::with_capacity(NETWORK_CONTRACT_COUNT);

        for contract in NetworkContract::ALL {
            let artifact_name = contract.artifact_for(environment);
            if artifact_name != contract.artifact_name() {
                warn!(
                    "Using {} in place of {} ({} environment)",
                    artifact_name,
                    contract.artifact_name(),
                    environment
                );
            }

            let artifact = provider.load(artifact_name).map_err(|e| {
                UpgradeError::Configuration(format!(
                    "Missing definition for {}: {}",
                    contract, e
                ))
            })?;
            debug!(
                "Registered {} ({} ABI entries)",
                contract,
                artifact.abi.len()
            );

            entries.push(ContractDescriptor {
                contract,
                artifact,
                strategy: InstantiationStrategy::for_contract(contract, environment),
            });
        }

        info!(
            "Contract registry built: {} contracts, {} environment",
            entries.len(),
            environment
        );
        Ok(Self {
            environment,
            entries,
        })
    }

    pub fn environment(&self) -> ExecutionEnvironment {
        self.environment
    }

    /// Descriptors in deployment order
    pub fn entries(&self) -> &[ContractDescriptor] {
        &self.entries
    }

    pub fn get(&self, contract: NetworkContract) -> Option<&ContractDescriptor> {
        self.entries.iter().find(|entry| entry.contract == contract)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
