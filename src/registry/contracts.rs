//! Network contracts deployed by the upgrade
//!
//! [`NetworkContract::ALL`] is the deployment order. The upgrade aggregator is
//! last so every address it is configured with already exists.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::config::ExecutionEnvironment;

/// Number of contracts in the deployment
pub const NETWORK_CONTRACT_COUNT: usize = 25;

/// Logical contract slot in the upgrade deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NetworkContract {
    RocketMegapoolDelegate,
    RocketMegapoolFactory,
    RocketMegapoolProxy,
    RocketMegapoolManager,
    RocketNodeManager,
    RocketNodeDeposit,
    RocketNodeStaking,
    RocketDepositPool,
    LinkedListStorage,
    RocketDaoProtocol,
    RocketDaoProtocolProposals,
    RocketDaoProtocolSettingsNode,
    RocketDaoProtocolSettingsDeposit,
    RocketDaoProtocolSettingsNetwork,
    RocketDaoProtocolSettingsSecurity,
    RocketDaoProtocolSettingsMegapool,
    RocketDaoSecurityProposals,
    RocketNetworkRevenues,
    RocketNetworkBalances,
    RocketNetworkSnapshots,
    RocketVoterRewards,
    BlockRoots,
    BeaconStateVerifier,
    RocketNodeDistributorDelegate,
    RocketUpgradeOneDotFour,
}

impl NetworkContract {
    /// Deployment order
    pub const ALL: [NetworkContract; NETWORK_CONTRACT_COUNT] = [
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
        NetworkContract::RocketUpgradeOneDotFour,
    ];

    /// Key used in manifests and storage (`rocketNodeManager`)
    pub fn key(self) -> &'static str {
        match self {
            NetworkContract::RocketMegapoolDelegate => "rocketMegapoolDelegate",
            NetworkContract::RocketMegapoolFactory => "rocketMegapoolFactory",
            NetworkContract::RocketMegapoolProxy => "rocketMegapoolProxy",
            NetworkContract::RocketMegapoolManager => "rocketMegapoolManager",
            NetworkContract::RocketNodeManager => "rocketNodeManager",
            NetworkContract::RocketNodeDeposit => "rocketNodeDeposit",
            NetworkContract::RocketNodeStaking => "rocketNodeStaking",
            NetworkContract::RocketDepositPool => "rocketDepositPool",
            NetworkContract::LinkedListStorage => "linkedListStorage",
            NetworkContract::RocketDaoProtocol => "rocketDAOProtocol",
            NetworkContract::RocketDaoProtocolProposals => "rocketDAOProtocolProposals",
            NetworkContract::RocketDaoProtocolSettingsNode => "rocketDAOProtocolSettingsNode",
            NetworkContract::RocketDaoProtocolSettingsDeposit => {
                "rocketDAOProtocolSettingsDeposit"
            }
            NetworkContract::RocketDaoProtocolSettingsNetwork => {
                "rocketDAOProtocolSettingsNetwork"
            }
            NetworkContract::RocketDaoProtocolSettingsSecurity => {
                "rocketDAOProtocolSettingsSecurity"
            }
            NetworkContract::RocketDaoProtocolSettingsMegapool => {
                "rocketDAOProtocolSettingsMegapool"
            }
            NetworkContract::RocketDaoSecurityProposals => "rocketDAOSecurityProposals",
            NetworkContract::RocketNetworkRevenues => "rocketNetworkRevenues",
            NetworkContract::RocketNetworkBalances => "rocketNetworkBalances",
            NetworkContract::RocketNetworkSnapshots => "rocketNetworkSnapshots",
            NetworkContract::RocketVoterRewards => "rocketVoterRewards",
            NetworkContract::BlockRoots => "blockRoots",
            NetworkContract::BeaconStateVerifier => "beaconStateVerifier",
            NetworkContract::RocketNodeDistributorDelegate => "rocketNodeDistributorDelegate",
            NetworkContract::RocketUpgradeOneDotFour => "rocketUpgradeOneDotFour",
        }
    }

    /// Compiled artifact name of the production contract
    pub fn artifact_name(self) -> &'static str {
        match self {
            NetworkContract::RocketMegapoolDelegate => "RocketMegapoolDelegate",
            NetworkContract::RocketMegapoolFactory => "RocketMegapoolFactory",
            NetworkContract::RocketMegapoolProxy => "RocketMegapoolProxy",
            NetworkContract::RocketMegapoolManager => "RocketMegapoolManager",
            NetworkContract::RocketNodeManager => "RocketNodeManager",
            NetworkContract::RocketNodeDeposit => "RocketNodeDeposit",
            NetworkContract::RocketNodeStaking => "RocketNodeStaking",
            NetworkContract::RocketDepositPool => "RocketDepositPool",
            NetworkContract::LinkedListStorage => "LinkedListStorage",
            NetworkContract::RocketDaoProtocol => "RocketDAOProtocol",
            NetworkContract::RocketDaoProtocolProposals => "RocketDAOProtocolProposals",
            NetworkContract::RocketDaoProtocolSettingsNode => "RocketDAOProtocolSettingsNode",
            NetworkContract::RocketDaoProtocolSettingsDeposit => {
                "RocketDAOProtocolSettingsDeposit"
            }
            NetworkContract::RocketDaoProtocolSettingsNetwork => {
                "RocketDAOProtocolSettingsNetwork"
            }
            NetworkContract::RocketDaoProtocolSettingsSecurity => {
                "RocketDAOProtocolSettingsSecurity"
            }
            NetworkContract::RocketDaoProtocolSettingsMegapool => {
                "RocketDAOProtocolSettingsMegapool"
            }
            NetworkContract::RocketDaoSecurityProposals => "RocketDAOSecurityProposals",
            NetworkContract::RocketNetworkRevenues => "RocketNetworkRevenues",
            NetworkContract::RocketNetworkBalances => "RocketNetworkBalances",
            NetworkContract::RocketNetworkSnapshots => "RocketNetworkSnapshots",
            NetworkContract::RocketVoterRewards => "RocketVoterRewards",
            NetworkContract::BlockRoots => "BlockRoots",
            NetworkContract::BeaconStateVerifier => "BeaconStateVerifier",
            NetworkContract::RocketNodeDistributorDelegate => "RocketNodeDistributorDelegate",
            NetworkContract::RocketUpgradeOneDotFour => "RocketUpgradeOneDotFour",
        }
    }

    /// Artifact of the test double used in the local environment, if any
    pub fn mock_artifact_name(self) -> Option<&'static str> {
        match self {
            NetworkContract::BeaconStateVerifier => Some("BeaconStateVerifierMock"),
            NetworkContract::BlockRoots => Some("BlockRootsMock"),
            _ => None,
        }
    }

    /// Artifact to deploy for this slot in `environment`
    pub fn artifact_for(self, environment: ExecutionEnvironment) -> &'static str {
        match (environment, self.mock_artifact_name()) {
            (ExecutionEnvironment::Local, Some(mock)) => mock,
            _ => self.artifact_name(),
        }
    }

    /// Look a contract up by its manifest key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|contract| contract.key() == key)
    }
}

impl fmt::Display for NetworkContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for NetworkContract {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}
