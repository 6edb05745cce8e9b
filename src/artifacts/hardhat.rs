//! Hardhat artifact directory provider
//!
//! Resolves `<Name>.json` files anywhere below an artifacts root, the layout
//! Hardhat produces (`artifacts/contracts/<path>/<Name>.sol/<Name>.json`).
//! Debug sidecars (`*.dbg.json`) and the `build-info` tree are skipped.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::artifacts::{ArtifactError, ArtifactProvider, ContractArtifact};

const BUILD_INFO_DIR: &str = "build-info";

/// Artifact provider backed by a Hardhat artifacts directory
pub struct HardhatArtifacts {
    root: PathBuf,
}

impl HardhatArtifacts {
    /// Create a provider rooted at `root`
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Load an artifact file directly
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ContractArtifact, ArtifactError> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|e| ArtifactError::Io {
            name: name.clone(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&contents).map_err(|e| ArtifactError::Parse {
            name,
            reason: e.to_string(),
        })
    }

    /// Find `<contract_name>.json` below the root
    ///
    /// Symlinked directories are not followed. More than one match is an
    /// error rather than a pick.
    fn find_artifact(&self, contract_name: &str) -> Result<Option<PathBuf>, ArtifactError> {
        let file_name = format!("{}.json", contract_name);
        let io_error = |reason: String| ArtifactError::Io {
            name: contract_name.to_string(),
            reason,
        };

        let mut matches = Vec::new();
        let mut pending = vec![self.root.clone()];
        while let Some(dir) = pending.pop() {
            let entries = fs::read_dir(&dir)
                .map_err(|e| io_error(format!("Failed to read {}: {}", dir.display(), e)))?;

            for entry in entries {
                let entry =
                    entry.map_err(|e| io_error(format!("Failed to read directory entry: {}", e)))?;
                let file_type = entry
                    .file_type()
                    .map_err(|e| io_error(format!("Failed to stat {:?}: {}", entry.path(), e)))?;

                if file_type.is_dir() {
                    if entry.file_name() != BUILD_INFO_DIR {
                        pending.push(entry.path());
                    }
                    continue;
                }
                if file_type.is_symlink() && entry.path().is_dir() {
                    debug!("Skipping symlinked directory {:?}", entry.path());
                    continue;
                }

                if entry.file_name().to_string_lossy() == file_name {
                    matches.push(entry.path());
                }
            }
        }

        if matches.len() > 1 {
            matches.sort();
            return Err(ArtifactError::Ambiguous {
                name: contract_name.to_string(),
                paths: matches
                    .iter()
                    .map(|path| path.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }
        Ok(matches.pop())
    }
}

impl ArtifactProvider for HardhatArtifacts {
    fn load(&self, contract_name: &str) -> Result<ContractArtifact, ArtifactError> {
        if !self.root.is_dir() {
            return Err(ArtifactError::Io {
                name: contract_name.to_string(),
                reason: format!("Artifacts directory {} does not exist", self.root.display()),
            });
        }

        let path = self
            .find_artifact(contract_name)?
            .ok_or_else(|| ArtifactError::NotFound(contract_name.to_string()))?;
        debug!("Loading artifact {} from {:?}", contract_name, path);

        let artifact = Self::from_file(&path)?;
        if artifact.contract_name != contract_name {
            return Err(ArtifactError::Parse {
                name: contract_name.to_string(),
                reason: format!(
                    "{} declares contractName {}",
                    path.display(),
                    artifact.contract_name
                ),
            });
        }
        Ok(artifact)
    }
}
