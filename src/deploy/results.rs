//! Deployment results table
//!
//! Append-only record of every deployed contract, kept in deployment order.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;

use crate::abi::Abi;
use crate::chain::Address;
use crate::errors::UpgradeError;
use crate::registry::NetworkContract;

/// A deployed contract instance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeployedContract {
    pub contract: NetworkContract,
    /// Artifact actually deployed (the mock name for substituted slots)
    pub artifact_name: String,
    pub address: Address,
    pub abi: Abi,
}

/// Results of a deployment run
#[derive(Debug, Clone, Default)]
pub struct DeploymentResults {
    entries: Vec<DeployedContract>,
    index: HashMap<NetworkContract, usize>,
}

impl DeploymentResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a deployment; each contract can be recorded once
    pub fn push(&mut self, deployed: DeployedContract) -> Result<(), UpgradeError> {
        if self.index.contains_key(&deployed.contract) {
            return Err(UpgradeError::DuplicateResult(deployed.contract.to_string()));
        }
        self.index.insert(deployed.contract, self.entries.len());
        self.entries.push(deployed);
        Ok(())
    }

    pub fn get(&self, contract: NetworkContract) -> Option<&DeployedContract> {
        self.index.get(&contract).map(|&i| &self.entries[i])
    }

    pub fn address(&self, contract: NetworkContract) -> Option<Address> {
        self.get(contract).map(|deployed| deployed.address)
    }

    /// Deployed contracts in deployment order
    pub fn iter(&self) -> impl Iterator<Item = &DeployedContract> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// JSON manifest `{ key: { address, abi } }` in deployment order
    pub fn to_manifest(&self) -> Value {
        let mut manifest = Map::new();
        for deployed in &self.entries {
            let mut entry = Map::new();
            entry.insert("artifact".to_string(), Value::String(deployed.artifact_name.clone()));
            entry.insert("address".to_string(), Value::String(deployed.address.to_hex()));
            entry.insert(
                "abi".to_string(),
                Value::Array(deployed.abi.entries().to_vec()),
            );
            manifest.insert(deployed.contract.key().to_string(), Value::Object(entry));
        }
        Value::Object(manifest)
    }

    /// Write the manifest as pretty JSON
    pub fn write_manifest(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(&self.to_manifest())?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
