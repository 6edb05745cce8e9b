//! In-memory artifact provider

use std::collections::HashMap;

use crate::artifacts::{ArtifactError, ArtifactProvider, ContractArtifact};

/// Artifact provider holding artifacts in a map keyed by contract name
#[derive(Debug, Clone, Default)]
pub struct MemoryArtifacts {
    artifacts: HashMap<String, ContractArtifact>,
}

impl MemoryArtifacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an artifact
    pub fn insert(&mut self, artifact: ContractArtifact) {
        self.artifacts
            .insert(artifact.contract_name.clone(), artifact);
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, artifact: ContractArtifact) -> Self {
        self.insert(artifact);
        self
    }

    /// Remove an artifact, returning it if present
    pub fn remove(&mut self, contract_name: &str) -> Option<ContractArtifact> {
        self.artifacts.remove(contract_name)
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl ArtifactProvider for MemoryArtifacts {
    fn load(&self, contract_name: &str) -> Result<ContractArtifact, ArtifactError> {
        self.artifacts
            .get(contract_name)
            .cloned()
            .ok_or_else(|| ArtifactError::NotFound(contract_name.to_string()))
    }
}
