//! Instantiation strategies
//!
//! Each contract slot maps to exactly one strategy. A strategy decides the
//! deploy method and builds the constructor argument list from the
//! deployment parameters; it never touches the chain itself.

use serde::Serialize;

use crate::chain::{DeployMethod, Token};
use crate::config::{DeploymentParameters, ExecutionEnvironment};
use crate::registry::contracts::NetworkContract;

/// How a contract slot is instantiated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InstantiationStrategy {
    /// Constructor takes no parameters
    NoArguments,
    /// `(storage, genesis timestamp)`
    StorageAndGenesis,
    /// Mock: `(storage)`; real: `(storage, slots per historical root, fork slots)`
    BeaconStateVerifier { local: bool },
    /// Mock: `()`; real: `(genesis, seconds per slot, buffer length, beacon roots)`
    BlockRoots { local: bool },
    /// `(storage)` followed by the single `set` configuration call
    UpgradeAggregator,
    /// `(storage)`
    StorageOnly,
}

impl InstantiationStrategy {
    /// Strategy for a contract slot in the given environment
    pub fn for_contract(contract: NetworkContract, environment: ExecutionEnvironment) -> Self {
        let local = environment.is_local();
        match contract {
            NetworkContract::RocketNodeDistributorDelegate => InstantiationStrategy::NoArguments,
            NetworkContract::RocketMegapoolDelegate => InstantiationStrategy::StorageAndGenesis,
            NetworkContract::BeaconStateVerifier => {
                InstantiationStrategy::BeaconStateVerifier { local }
            }
            NetworkContract::BlockRoots => InstantiationStrategy::BlockRoots { local },
            NetworkContract::RocketUpgradeOneDotFour => InstantiationStrategy::UpgradeAggregator,
            _ => InstantiationStrategy::StorageOnly,
        }
    }

    /// Deploy method used by this strategy
    pub fn method(&self) -> DeployMethod {
        match self {
            InstantiationStrategy::NoArguments
            | InstantiationStrategy::StorageAndGenesis
            | InstantiationStrategy::StorageOnly
            | InstantiationStrategy::BeaconStateVerifier { local: false } => DeployMethod::Clone,
            InstantiationStrategy::BeaconStateVerifier { local: true }
            | InstantiationStrategy::BlockRoots { .. }
            | InstantiationStrategy::UpgradeAggregator => DeployMethod::New,
        }
    }

    /// Constructor arguments for this strategy
    pub fn constructor_args(&self, params: &DeploymentParameters) -> Vec<Token> {
        let storage = Token::Address(params.storage_address);
        let beacon = &params.beacon;

        match self {
            InstantiationStrategy::NoArguments => Vec::new(),
            InstantiationStrategy::StorageAndGenesis => {
                vec![storage, Token::Uint(beacon.genesis_block_timestamp)]
            }
            InstantiationStrategy::BeaconStateVerifier { local: true } => vec![storage],
            InstantiationStrategy::BeaconStateVerifier { local: false } => vec![
                storage,
                Token::Uint(beacon.slots_per_historical_root),
                Token::UintArray(beacon.fork_slots.to_vec()),
            ],
            InstantiationStrategy::BlockRoots { local: true } => Vec::new(),
            InstantiationStrategy::BlockRoots { local: false } => vec![
                Token::Uint(beacon.genesis_block_timestamp),
                Token::Uint(beacon.seconds_per_slot),
                Token::Uint(beacon.beacon_roots_history_buffer_length),
                Token::Address(beacon.beacon_roots_address),
            ],
            InstantiationStrategy::UpgradeAggregator | InstantiationStrategy::StorageOnly => {
                vec![storage]
            }
        }
    }

    /// Whether the deployed instance must be configured with the upgrade set
    pub fn configures_upgrade(&self) -> bool {
        matches!(self, InstantiationStrategy::UpgradeAggregator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::Address;
    use crate::config::BEACON_ROOTS_ADDRESS;

    fn params() -> DeploymentParameters {
        DeploymentParameters::new(Address::new([0x22; 20]))
    }

    #[test]
    fn test_dispatch_table() {
        let live = ExecutionEnvironment::Live;
        assert_eq!(
            InstantiationStrategy::for_contract(NetworkContract::RocketNodeDistributorDelegate, live),
            InstantiationStrategy::NoArguments
        );
        assert_eq!(
            InstantiationStrategy::for_contract(NetworkContract::RocketMegapoolDelegate, live),
            InstantiationStrategy::StorageAndGenesis
        );
        assert_eq!(
            InstantiationStrategy::for_contract(NetworkContract::RocketUpgradeOneDotFour, live),
            InstantiationStrategy::UpgradeAggregator
        );
        assert_eq!(
            InstantiationStrategy::for_contract(NetworkContract::RocketDepositPool, live),
            InstantiationStrategy::StorageOnly
        );
    }

    #[test]
    fn test_storage_and_genesis_args() {
        let args = InstantiationStrategy::StorageAndGenesis.constructor_args(&params());
        assert_eq!(
            args,
            vec![
                Token::Address(Address::new([0x22; 20])),
                Token::Uint(1695902400)
            ]
        );
        assert_eq!(InstantiationStrategy::StorageAndGenesis.method(), DeployMethod::Clone);
    }

    #[test]
    fn test_verifier_args_by_environment() {
        let local = InstantiationStrategy::BeaconStateVerifier { local: true };
        let live = InstantiationStrategy::BeaconStateVerifier { local: false };

        assert_eq!(local.constructor_args(&params()).len(), 1);
        assert_eq!(local.method(), DeployMethod::New);

        let args = live.constructor_args(&params());
        assert_eq!(args.len(), 3);
        assert_eq!(args[1], Token::Uint(8192));
        assert_eq!(
            args[2],
            Token::UintArray(vec![2375680, 4636672, 6209536, 8626176, 11649024])
        );
        assert_eq!(live.method(), DeployMethod::Clone);
    }

    #[test]
    fn test_block_roots_args_by_environment() {
        let local = InstantiationStrategy::BlockRoots { local: true };
        let live = InstantiationStrategy::BlockRoots { local: false };

        assert!(local.constructor_args(&params()).is_empty());
        assert_eq!(
            live.constructor_args(&params()),
            vec![
                Token::Uint(1695902400),
                Token::Uint(12),
                Token::Uint(8191),
                Token::Address(BEACON_ROOTS_ADDRESS),
            ]
        );
        assert_eq!(local.method(), DeployMethod::New);
        assert_eq!(live.method(), DeployMethod::New);
    }

    #[test]
    fn test_only_aggregator_configures_upgrade() {
        for contract in NetworkContract::ALL {
            let strategy = InstantiationStrategy::for_contract(contract, ExecutionEnvironment::Live);
            assert_eq!(
                strategy.configures_upgrade(),
                contract == NetworkContract::RocketUpgradeOneDotFour
            );
        }
    }
}
