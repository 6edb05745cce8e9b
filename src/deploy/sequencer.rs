//! Deployment sequencer
//!
//! Deploys the registry entries strictly in order, awaiting each one before
//! issuing the next, and configures the upgrade contract once every
//! dependency exists. The first failure aborts the run; contracts deployed
//! before it are left in place.

use tracing::{debug, error, info};

use crate::chain::ChainDeployer;
use crate::config::DeploymentParameters;
use crate::deploy::plan::PlannedStep;
use crate::deploy::results::{DeployedContract, DeploymentResults};
use crate::deploy::upgrade::{UpgradeArguments, UPGRADE_SET_FUNCTION};
use crate::errors::UpgradeError;
use crate::registry::{ContractDescriptor, Registry};

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct DeploymentOutcome {
    pub results: DeploymentResults,
    /// The configured upgrade contract
    pub upgrade: DeployedContract,
}

/// Upgrade deployment orchestrator
pub struct UpgradeDeployer<'a> {
    registry: &'a Registry,
    params: DeploymentParameters,
    chain: &'a dyn ChainDeployer,
}

impl<'a> UpgradeDeployer<'a> {
    pub fn new(
        registry: &'a Registry,
        params: DeploymentParameters,
        chain: &'a dyn ChainDeployer,
    ) -> Self {
        Self {
            registry,
            params,
            chain,
        }
    }

    /// Deploy every contract and configure the upgrade contract
    pub async fn run(&self) -> Result<DeploymentOutcome, UpgradeError> {
        let mut results = DeploymentResults::new();
        let upgrade = self.deploy_into(&mut results).await?;
        Ok(DeploymentOutcome { results, upgrade })
    }

    /// Deploy every contract, recording each into `results` as it lands
    ///
    /// On failure `results` holds exactly the contracts deployed before the
    /// failing one.
    pub async fn deploy_into(
        &self,
        results: &mut DeploymentResults,
    ) -> Result<DeployedContract, UpgradeError> {
        info!(
            "Deploying {} contracts ({} environment, storage {})",
            self.registry.len(),
            self.registry.environment(),
            self.params.storage_address
        );

        let mut upgrade = None;
        for descriptor in self.registry.entries() {
            let deployed = self.deploy_one(descriptor, results).await?;
            if descriptor.strategy.configures_upgrade() {
                upgrade = Some(deployed.clone());
            }
            results.push(deployed)?;
        }

        let upgrade = upgrade.ok_or_else(|| {
            UpgradeError::Configuration("Registry has no upgrade contract".to_string())
        })?;
        info!(
            "Upgrade deployment complete: {} contracts, upgrade contract at {}",
            results.len(),
            upgrade.address
        );
        Ok(upgrade)
    }

    async fn deploy_one(
        &self,
        descriptor: &ContractDescriptor,
        results: &DeploymentResults,
    ) -> Result<DeployedContract, UpgradeError> {
        let step = PlannedStep::for_descriptor(descriptor, &self.params);
        debug!(
            "Deploying {} via {} with {} args: {:?}",
            step.contract,
            step.method,
            step.args.len(),
            step.args
        );

        let address = self
            .chain
            .deploy(&descriptor.artifact, step.method, &step.args)
            .await
            .map_err(|source| {
                error!("Deployment of {} failed: {}", step.contract, source);
                UpgradeError::Deployment {
                    contract: step.contract.to_string(),
                    source,
                }
            })?;
        info!(
            "Deployed {} ({}) at {}",
            step.contract, step.artifact_name, address
        );

        if descriptor.strategy.configures_upgrade() {
            let arguments = UpgradeArguments::assemble(results)?;
            self.chain
                .send(&address, UPGRADE_SET_FUNCTION, &arguments.to_tokens())
                .await
                .map_err(|source| {
                    error!("Configuring {} failed: {}", step.contract, source);
                    UpgradeError::Deployment {
                        contract: step.contract.to_string(),
                        source,
                    }
                })?;
            info!(
                "Configured {} with {} contracts",
                step.contract,
                arguments.len()
            );
        }

        Ok(DeployedContract {
            contract: descriptor.contract,
            artifact_name: step.artifact_name,
            address,
            abi: descriptor.artifact.abi.clone(),
        })
    }
}
