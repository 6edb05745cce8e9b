//! Upgrade Deployer - sequenced deployment of the protocol upgrade contracts
//!
//! Deploys the upgrade's contracts in a fixed order, collects their addresses,
//! and configures the upgrade aggregator with every address and a compressed
//! copy of every ABI in a single call.
//!
//! ## Components
//!
//! 1. **Registry** (`registry`): ordered contract slots, with mock substitution
//!    for the local environment
//! 2. **Sequencer** (`deploy`): per-slot instantiation strategies, results
//!    table, upgrade wiring
//! 3. **Compressor** (`abi`): ABI → JSON → zlib → base64
//!
//! Artifact loading and chain access are collaborators behind
//! [`ArtifactProvider`] and [`ChainDeployer`].

pub mod abi;
pub mod artifacts;
pub mod chain;
pub mod config;
pub mod deploy;
pub mod errors;
pub mod registry;
pub mod utils;

pub use abi::{compress_abi, decompress_abi, Abi};
pub use artifacts::{ArtifactProvider, ContractArtifact, HardhatArtifacts, MemoryArtifacts};
pub use chain::{Address, ChainDeployer, DeployMethod, SimulatedChain, Token};
pub use config::{DeploymentParameters, ExecutionEnvironment, UpgradeConfig};
pub use deploy::{DeploymentOutcome, DeploymentPlan, DeploymentResults, UpgradeDeployer};
pub use errors::UpgradeError;
pub use registry::{NetworkContract, Registry};
