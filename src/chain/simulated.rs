//! In-process simulated chain
//!
//! Deterministic [`ChainDeployer`] used for dry runs and tests. Addresses are
//! derived from the deployer address and a nonce, every deployment and call is
//! recorded, and deployments of a chosen artifact can be made to fail.

use async_trait::async_trait;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tokio::sync::Mutex;
use tracing::debug;

use crate::artifacts::ContractArtifact;
use crate::chain::traits::{ChainDeployer, DeployError, DeployMethod};
use crate::chain::types::{Address, Token, ADDRESS_LENGTH};

/// A deployment observed by the simulator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentRecord {
    pub artifact_name: String,
    pub method: DeployMethod,
    pub args: Vec<Token>,
    pub address: Address,
}

/// A contract call observed by the simulator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallRecord {
    pub target: Address,
    pub function: String,
    pub args: Vec<Token>,
}

#[derive(Debug, Default)]
struct SimulatorState {
    nonce: u64,
    deployments: Vec<DeploymentRecord>,
    calls: Vec<CallRecord>,
}

/// Simulated chain deployer
pub struct SimulatedChain {
    deployer: Address,
    reject_artifact: Option<String>,
    reject_calls: bool,
    state: Mutex<SimulatorState>,
}

impl SimulatedChain {
    /// Create a simulator deploying from `deployer`
    pub fn new(deployer: Address) -> Self {
        Self {
            deployer,
            reject_artifact: None,
            reject_calls: false,
            state: Mutex::new(SimulatorState::default()),
        }
    }

    /// Reject every deployment of the named artifact
    pub fn rejecting_artifact(mut self, artifact_name: impl Into<String>) -> Self {
        self.reject_artifact = Some(artifact_name.into());
        self
    }

    /// Reject every contract call
    pub fn rejecting_calls(mut self) -> Self {
        self.reject_calls = true;
        self
    }

    /// Deployments observed so far, in issue order
    pub async fn deployments(&self) -> Vec<DeploymentRecord> {
        self.state.lock().await.deployments.clone()
    }

    /// Calls observed so far, in issue order
    pub async fn calls(&self) -> Vec<CallRecord> {
        self.state.lock().await.calls.clone()
    }

    fn derive_address(&self, nonce: u64) -> Address {
        let mut hasher = Sha256::new();
        hasher.update(self.deployer.as_bytes());
        hasher.update(nonce.to_be_bytes());
        let digest = hasher.finalize();

        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes.copy_from_slice(&digest[digest.len() - ADDRESS_LENGTH..]);
        Address::new(bytes)
    }
}

#[async_trait]
impl ChainDeployer for SimulatedChain {
    async fn deploy(
        &self,
        artifact: &ContractArtifact,
        method: DeployMethod,
        args: &[Token],
    ) -> Result<Address, DeployError> {
        if self.reject_artifact.as_deref() == Some(artifact.contract_name.as_str()) {
            return Err(DeployError::Rejected(format!(
                "deployment of {} reverted",
                artifact.contract_name
            )));
        }

        let mut state = self.state.lock().await;
        let address = self.derive_address(state.nonce);
        state.nonce += 1;
        state.deployments.push(DeploymentRecord {
            artifact_name: artifact.contract_name.clone(),
            method,
            args: args.to_vec(),
            address,
        });
        debug!(
            "Simulated {} of {} at {}",
            method, artifact.contract_name, address
        );
        Ok(address)
    }

    async fn send(
        &self,
        target: &Address,
        function: &str,
        args: &[Token],
    ) -> Result<(), DeployError> {
        if self.reject_calls {
            return Err(DeployError::Rejected(format!(
                "call {}() on {} reverted",
                function, target
            )));
        }

        let mut state = self.state.lock().await;
        // Calls consume a nonce like any other transaction
        state.nonce += 1;
        state.calls.push(CallRecord {
            target: *target,
            function: function.to_string(),
            args: args.to_vec(),
        });
        Ok(())
    }
}
