#![allow(dead_code)]

use serde_json::json;
use upgrade_deployer::{
    Abi, Address, ContractArtifact, DeploymentParameters, ExecutionEnvironment, MemoryArtifacts,
    NetworkContract, Registry,
};

/// RocketStorage address used by every test deployment
pub fn storage_address() -> Address {
    "0x1d8f8f00cfa6758d7bE78336684788Fb0ee0Fa46".parse().unwrap()
}

pub fn deployer_address() -> Address {
    "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".parse().unwrap()
}

pub fn test_params() -> DeploymentParameters {
    DeploymentParameters::new(storage_address())
}

/// Small but realistic ABI unique to `name`
pub fn test_abi(name: &str) -> Abi {
    Abi::new(vec![
        json!({
            "inputs": [{"internalType": "contract RocketStorageInterface", "name": "_rocketStorageAddress", "type": "address"}],
            "stateMutability": "nonpayable",
            "type": "constructor"
        }),
        json!({
            "inputs": [],
            "name": "version",
            "outputs": [{"internalType": "uint8", "name": "", "type": "uint8"}],
            "stateMutability": "view",
            "type": "function"
        }),
        json!({
            "anonymous": false,
            "inputs": [{"indexed": true, "internalType": "address", "name": "sender", "type": "address"}],
            "name": format!("{}Deployed", name),
            "type": "event"
        }),
    ])
}

/// Artifacts for every production contract and every mock
pub fn full_artifacts() -> MemoryArtifacts {
    let mut provider = MemoryArtifacts::new();
    for contract in NetworkContract::ALL {
        let names = [Some(contract.artifact_name()), contract.mock_artifact_name()];
        for name in names.into_iter().flatten() {
            provider.insert(ContractArtifact::new(name, test_abi(name)));
        }
    }
    provider
}

pub fn build_registry(environment: ExecutionEnvironment) -> Registry {
    Registry::build(&full_artifacts(), environment).unwrap()
}
