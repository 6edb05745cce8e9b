//! Upgrade aggregator wiring
//!
//! The upgrade contract is configured with one `set(address[], string[])`
//! call. Both arrays follow [`UPGRADE_ARGUMENT_ORDER`], which must match the
//! parameter order the contract expects. Each address is paired with its
//! compressed ABI in a single [`UpgradeEntry`] so the two arrays cannot drift.

use serde::Serialize;

use crate::abi::compress_abi;
use crate::chain::{Address, Token};
use crate::deploy::results::DeploymentResults;
use crate::errors::UpgradeError;
use crate::registry::NetworkContract;

/// Configuration function on the upgrade contract
pub const UPGRADE_SET_FUNCTION: &str = "set";

/// Number of contracts the upgrade contract is configured with
pub const UPGRADE_DEPENDENCY_COUNT: usize = 24;

/// Order of the `set` arguments
pub const UPGRADE_ARGUMENT_ORDER: [NetworkContract; UPGRADE_DEPENDENCY_COUNT] = [
    NetworkContract::RocketMegapoolDelegate,
    NetworkContract::RocketMegapoolFactory,
    NetworkContract::RocketMegapoolProxy,
    NetworkContract::RocketMegapoolManager,
    NetworkContract::RocketNodeManager,
    NetworkContract::RocketNodeDeposit,
    NetworkContract::RocketNodeStaking,
    NetworkContract::RocketDepositPool,
    NetworkContract::LinkedListStorage,
    NetworkContract::RocketDaoProtocol,
    NetworkContract::RocketDaoProtocolProposals,
    NetworkContract::RocketDaoProtocolSettingsNode,
    NetworkContract::RocketDaoProtocolSettingsDeposit,
    NetworkContract::RocketDaoProtocolSettingsNetwork,
    NetworkContract::RocketDaoProtocolSettingsSecurity,
    NetworkContract::RocketDaoProtocolSettingsMegapool,
    NetworkContract::RocketDaoSecurityProposals,
    NetworkContract::RocketNetworkRevenues,
    NetworkContract::RocketNetworkBalances,
    NetworkContract::RocketNetworkSnapshots,
    NetworkContract::RocketVoterRewards,
    NetworkContract::BlockRoots,
    NetworkContract::BeaconStateVerifier,
    NetworkContract::RocketNodeDistributorDelegate,
];

/// One position of the `set` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpgradeEntry {
    pub contract: NetworkContract,
    pub address: Address,
    pub compressed_abi: String,
}

/// Arguments of the upgrade configuration call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpgradeArguments {
    entries: Vec<UpgradeEntry>,
}

impl UpgradeArguments {
    /// Collect addresses and compressed ABIs from the deployment results
    pub fn assemble(results: &DeploymentResults) -> Result<Self, UpgradeError> {
        let entries = UPGRADE_ARGUMENT_ORDER
            .iter()
            .map(|&contract| {
                let deployed = results
                    .get(contract)
                    .ok_or_else(|| UpgradeError::MissingDependency(contract.to_string()))?;
                Ok(UpgradeEntry {
                    contract,
                    address: deployed.address,
                    compressed_abi: compress_abi(&deployed.abi)?,
                })
            })
            .collect::<Result<Vec<_>, UpgradeError>>()?;

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[UpgradeEntry] {
        &self.entries
    }

    /// Address bundle (`address[]` argument)
    pub fn addresses(&self) -> Vec<Address> {
        self.entries.iter().map(|entry| entry.address).collect()
    }

    /// ABI payload bundle (`string[]` argument)
    pub fn compressed_abis(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.compressed_abi.clone())
            .collect()
    }

    /// Call arguments for [`UPGRADE_SET_FUNCTION`]
    pub fn to_tokens(&self) -> Vec<Token> {
        vec![
            Token::AddressArray(self.addresses()),
            Token::StringArray(self.compressed_abis()),
        ]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
