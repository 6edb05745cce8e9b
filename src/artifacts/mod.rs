//! Contract artifacts
//!
//! An artifact is the compiled form of a contract as far as the orchestrator
//! cares: its name and interface description, plus bytecode for deployers
//! that need it. Artifacts are looked up by name through [`ArtifactProvider`].

pub mod hardhat;
pub mod memory;

pub use hardhat::HardhatArtifacts;
pub use memory::MemoryArtifacts;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::abi::Abi;

/// Compiled contract definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    /// Contract name as emitted by the compiler (e.g. `RocketNodeManager`)
    pub contract_name: String,
    /// Interface description
    pub abi: Abi,
    /// Creation bytecode, when the artifact carries it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytecode: Option<String>,
}

impl ContractArtifact {
    /// Create an artifact without bytecode
    pub fn new(contract_name: impl Into<String>, abi: Abi) -> Self {
        Self {
            contract_name: contract_name.into(),
            abi,
            bytecode: None,
        }
    }
}

/// Artifact lookup errors
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Artifact not found: {0}")]
    NotFound(String),

    #[error("Failed to read artifact {name}: {reason}")]
    Io { name: String, reason: String },

    #[error("Failed to parse artifact {name}: {reason}")]
    Parse { name: String, reason: String },

    #[error("Artifact {name} found in more than one place: {paths}")]
    Ambiguous { name: String, paths: String },
}

/// Source of compiled contract artifacts
pub trait ArtifactProvider: Send + Sync {
    /// Load the artifact for a contract name
    fn load(&self, contract_name: &str) -> Result<ContractArtifact, ArtifactError>;
}
