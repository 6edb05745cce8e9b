//! Deployment plan
//!
//! Resolves every registry entry to the concrete method and constructor
//! arguments it will be deployed with, without touching a chain.

use serde::Serialize;

use crate::chain::{DeployMethod, Token};
use crate::config::{DeploymentParameters, ExecutionEnvironment};
use crate::registry::{ContractDescriptor, InstantiationStrategy, NetworkContract, Registry};

/// One planned deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedStep {
    pub contract: NetworkContract,
    pub artifact_name: String,
    pub strategy: InstantiationStrategy,
    pub method: DeployMethod,
    pub args: Vec<Token>,
}

impl PlannedStep {
    /// Resolve a registry entry
    pub fn for_descriptor(descriptor: &ContractDescriptor, params: &DeploymentParameters) -> Self {
        Self {
            contract: descriptor.contract,
            artifact_name: descriptor.artifact.contract_name.clone(),
            strategy: descriptor.strategy,
            method: descriptor.strategy.method(),
            args: descriptor.strategy.constructor_args(params),
        }
    }
}

/// Full deployment plan in registry order
#[derive(Debug, Clone, Serialize)]
pub struct DeploymentPlan {
    pub environment: ExecutionEnvironment,
    pub steps: Vec<PlannedStep>,
}

impl DeploymentPlan {
    pub fn new(registry: &Registry, params: &DeploymentParameters) -> Self {
        Self {
            environment: registry.environment(),
            steps: registry
                .entries()
                .iter()
                .map(|descriptor| PlannedStep::for_descriptor(descriptor, params))
                .collect(),
        }
    }

    pub fn step(&self, contract: NetworkContract) -> Option<&PlannedStep> {
        self.steps.iter().find(|step| step.contract == contract)
    }

    /// Render the plan as pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
