//! Chain access for the upgrade deployment
//!
//! The orchestrator only needs two capabilities from the chain: deploy a
//! contract instance and send a call to one. Both are behind [`ChainDeployer`]
//! so the sequencing logic never depends on RPC plumbing.

pub mod simulated;
pub mod traits;
pub mod types;

pub use simulated::{CallRecord, DeploymentRecord, SimulatedChain};
pub use traits::{ChainDeployer, DeployError, DeployMethod};
pub use types::{Address, AddressError, Token, ADDRESS_LENGTH};
