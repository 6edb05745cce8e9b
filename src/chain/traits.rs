//! Chain deployer traits and interfaces
//!
//! Defines the narrow capability set the orchestrator needs from whatever
//! talks to the chain (a JSON-RPC client, a test harness, a simulator).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::artifacts::ContractArtifact;
use crate::chain::types::{Address, Token};

/// How a contract instance is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeployMethod {
    /// Fresh copy of an artifact that may already be deployed elsewhere
    Clone,
    /// Plain constructor deployment
    New,
}

impl fmt::Display for DeployMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeployMethod::Clone => f.write_str("clone"),
            DeployMethod::New => f.write_str("new"),
        }
    }
}

/// Errors raised by a chain deployer
#[derive(Debug, Error)]
pub enum DeployError {
    /// The chain rejected the deployment or call (revert, bad arguments)
    #[error("Rejected by chain: {0}")]
    Rejected(String),

    /// The deployer could not reach the chain
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Chain deployer trait
///
/// Every operation is awaited to completion by the orchestrator before the
/// next one is issued. Implementations own their own latency and timeout
/// behaviour; the orchestrator never retries.
#[async_trait]
pub trait ChainDeployer: Send + Sync {
    /// Deploy a new instance of `artifact` with the given constructor arguments
    async fn deploy(
        &self,
        artifact: &ContractArtifact,
        method: DeployMethod,
        args: &[Token],
    ) -> Result<Address, DeployError>;

    /// Send a state-changing call to an already deployed contract
    async fn send(&self, target: &Address, function: &str, args: &[Token])
        -> Result<(), DeployError>;
}
