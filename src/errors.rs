//! Upgrade orchestration errors
//!
//! Every failure is fatal for the run: nothing here is retried, and contracts
//! deployed before the failure stay deployed.

use thiserror::Error;

use crate::chain::DeployError;

/// Orchestrator errors
#[derive(Debug, Error)]
pub enum UpgradeError {
    /// Missing artifact or invalid configuration, raised before any deployment
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The chain rejected a deployment or the upgrade configuration call
    #[error("Deployment of {contract} failed: {source}")]
    Deployment {
        contract: String,
        #[source]
        source: DeployError,
    },

    /// An ABI could not be serialized, compressed or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The upgrade contract references a contract that has not been deployed
    #[error("Upgrade dependency {0} has not been deployed")]
    MissingDependency(String),

    /// A contract was recorded twice in the deployment results
    #[error("Contract {0} already has a deployment result")]
    DuplicateResult(String),
}
