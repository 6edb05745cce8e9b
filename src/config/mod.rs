//! Configuration management for the upgrade deployment
//!
//! Handles configuration loading, validation, and the execution environment
//! flag that selects local test doubles.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::chain::Address;
use crate::errors::UpgradeError;
use crate::utils::env_opt;

/// Environment variable naming the target chain
pub const CHAIN_ENV_VAR: &str = "CHAIN";

/// Chain name that selects the local execution environment
pub const LOCAL_CHAIN_NAME: &str = "hardhat";

/// Beacon chain slots per epoch
pub const SLOTS_PER_EPOCH: u64 = 32;

/// EIP-4788 beacon roots contract
pub const BEACON_ROOTS_ADDRESS: Address = Address::new([
    0x00, 0x0f, 0x3d, 0xf6, 0xd7, 0x32, 0x80, 0x7e, 0xf1, 0x31, 0x9f, 0xb7, 0xb8, 0xbb, 0x85,
    0x22, 0xd0, 0xbe, 0xac, 0x02,
]);

/// Where the deployment runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionEnvironment {
    /// Local test chain: verifier and block roots are replaced by mocks
    Local,
    /// Any real target chain
    Live,
}

impl ExecutionEnvironment {
    /// Map a chain name to an environment (exact, case-sensitive match)
    pub fn from_chain_name(chain: &str) -> Self {
        if chain == LOCAL_CHAIN_NAME {
            ExecutionEnvironment::Local
        } else {
            ExecutionEnvironment::Live
        }
    }

    /// Read the environment from the `CHAIN` variable (unset means live)
    pub fn from_env() -> Self {
        env_opt(CHAIN_ENV_VAR)
            .map(|chain| Self::from_chain_name(&chain))
            .unwrap_or(ExecutionEnvironment::Live)
    }

    pub fn is_local(self) -> bool {
        self == ExecutionEnvironment::Local
    }
}

impl std::fmt::Display for ExecutionEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutionEnvironment::Local => f.write_str("local"),
            ExecutionEnvironment::Live => f.write_str("live"),
        }
    }
}

/// First slot of each consensus fork
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForkSlots {
    #[serde(default = "default_altair_slot")]
    pub altair: u64,
    #[serde(default = "default_bellatrix_slot")]
    pub bellatrix: u64,
    #[serde(default = "default_capella_slot")]
    pub capella: u64,
    #[serde(default = "default_deneb_slot")]
    pub deneb: u64,
    #[serde(default = "default_electra_slot")]
    pub electra: u64,
}

fn default_altair_slot() -> u64 {
    74240 * SLOTS_PER_EPOCH
}

fn default_bellatrix_slot() -> u64 {
    144896 * SLOTS_PER_EPOCH
}

fn default_capella_slot() -> u64 {
    194048 * SLOTS_PER_EPOCH
}

fn default_deneb_slot() -> u64 {
    269568 * SLOTS_PER_EPOCH
}

fn default_electra_slot() -> u64 {
    364032 * SLOTS_PER_EPOCH
}

impl Default for ForkSlots {
    fn default() -> Self {
        Self {
            altair: default_altair_slot(),
            bellatrix: default_bellatrix_slot(),
            capella: default_capella_slot(),
            deneb: default_deneb_slot(),
            electra: default_electra_slot(),
        }
    }
}

impl ForkSlots {
    /// Fork slots in fork order (Altair first)
    pub fn to_vec(&self) -> Vec<u64> {
        vec![
            self.altair,
            self.bellatrix,
            self.capella,
            self.deneb,
            self.electra,
        ]
    }
}

/// Beacon chain parameters passed to the verifier and block roots contracts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeaconChainConfig {
    /// Beacon chain genesis time (unix seconds)
    #[serde(default = "default_genesis_block_timestamp")]
    pub genesis_block_timestamp: u64,

    #[serde(default = "default_seconds_per_slot")]
    pub seconds_per_slot: u64,

    /// Ring buffer length of the beacon roots contract
    #[serde(default = "default_beacon_roots_history_buffer_length")]
    pub beacon_roots_history_buffer_length: u64,

    #[serde(default = "default_slots_per_historical_root")]
    pub slots_per_historical_root: u64,

    #[serde(default = "default_beacon_roots_address")]
    pub beacon_roots_address: Address,

    #[serde(default)]
    pub fork_slots: ForkSlots,
}

fn default_genesis_block_timestamp() -> u64 {
    1695902400
}

fn default_seconds_per_slot() -> u64 {
    12
}

fn default_beacon_roots_history_buffer_length() -> u64 {
    8191
}

fn default_slots_per_historical_root() -> u64 {
    8192
}

fn default_beacon_roots_address() -> Address {
    BEACON_ROOTS_ADDRESS
}

impl Default for BeaconChainConfig {
    fn default() -> Self {
        Self {
            genesis_block_timestamp: default_genesis_block_timestamp(),
            seconds_per_slot: default_seconds_per_slot(),
            beacon_roots_history_buffer_length: default_beacon_roots_history_buffer_length(),
            slots_per_historical_root: default_slots_per_historical_root(),
            beacon_roots_address: BEACON_ROOTS_ADDRESS,
            fork_slots: ForkSlots::default(),
        }
    }
}

impl BeaconChainConfig {
    /// Validate beacon parameters
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.seconds_per_slot == 0 {
            return Err(anyhow::anyhow!("seconds_per_slot must be greater than 0"));
        }
        if self.slots_per_historical_root == 0 {
            return Err(anyhow::anyhow!(
                "slots_per_historical_root must be greater than 0"
            ));
        }
        if self.beacon_roots_history_buffer_length == 0 {
            return Err(anyhow::anyhow!(
                "beacon_roots_history_buffer_length must be greater than 0"
            ));
        }

        let slots = self.fork_slots.to_vec();
        if slots.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(anyhow::anyhow!(
                "fork_slots must be strictly increasing, got {:?}",
                slots
            ));
        }

        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log filter (e.g. "info", "upgrade_deployer=debug"); RUST_LOG takes precedence
    pub filter: Option<String>,

    /// Emit JSON log lines (requires the json-logging feature)
    #[serde(default)]
    pub json_format: bool,
}

/// Upgrade deployment configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeConfig {
    /// Execution environment (defaults from the CHAIN variable)
    #[serde(default = "default_environment")]
    pub environment: ExecutionEnvironment,

    /// RocketStorage address every contract is wired to
    pub storage_address: Option<Address>,

    /// Hardhat artifacts directory
    #[serde(default = "default_artifacts_dir")]
    pub artifacts_dir: String,

    #[serde(default)]
    pub beacon: BeaconChainConfig,

    pub logging: Option<LoggingConfig>,
}

fn default_environment() -> ExecutionEnvironment {
    ExecutionEnvironment::from_env()
}

fn default_artifacts_dir() -> String {
    "artifacts".to_string()
}

impl Default for UpgradeConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            storage_address: None,
            artifacts_dir: default_artifacts_dir(),
            beacon: BeaconChainConfig::default(),
            logging: None,
        }
    }
}

impl UpgradeConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: UpgradeConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: UpgradeConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, choosing the format from the file extension
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_file(path),
            _ => Self::from_json_file(path),
        }
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(address) = self.storage_address {
            if address.is_zero() {
                return Err(anyhow::anyhow!("storage_address must not be the zero address"));
            }
        }
        self.beacon.validate()
    }

    /// Parameters for a deployment run
    pub fn deployment_parameters(&self) -> Result<DeploymentParameters, UpgradeError> {
        let storage_address = self.storage_address.ok_or_else(|| {
            UpgradeError::Configuration("storage_address is not configured".to_string())
        })?;
        Ok(DeploymentParameters {
            storage_address,
            beacon: self.beacon.clone(),
        })
    }
}

/// Inputs to constructor argument construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentParameters {
    /// Chain storage anchor
    pub storage_address: Address,
    pub beacon: BeaconChainConfig,
}

impl DeploymentParameters {
    pub fn new(storage_address: Address) -> Self {
        Self {
            storage_address,
            beacon: BeaconChainConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beacon_roots_constant_matches_eip_4788() {
        let parsed: Address = "0x000F3df6D732807Ef1319fB7B8bB8522d0Beac02".parse().unwrap();
        assert_eq!(parsed, BEACON_ROOTS_ADDRESS);
    }

    #[test]
    fn test_default_fork_slots() {
        assert_eq!(
            ForkSlots::default().to_vec(),
            vec![2375680, 4636672, 6209536, 8626176, 11649024]
        );
    }

    #[test]
    fn test_chain_name_mapping() {
        assert_eq!(
            ExecutionEnvironment::from_chain_name("hardhat"),
            ExecutionEnvironment::Local
        );
        assert_eq!(
            ExecutionEnvironment::from_chain_name("HardHat"),
            ExecutionEnvironment::Live
        );
        assert_eq!(
            ExecutionEnvironment::from_chain_name(" hardhat\n"),
            ExecutionEnvironment::Live
        );
        assert_eq!(
            ExecutionEnvironment::from_chain_name("mainnet"),
            ExecutionEnvironment::Live
        );
        assert_eq!(
            ExecutionEnvironment::from_chain_name(""),
            ExecutionEnvironment::Live
        );
    }

    #[test]
    fn test_beacon_validation() {
        assert!(BeaconChainConfig::default().validate().is_ok());

        let mut config = BeaconChainConfig::default();
        config.seconds_per_slot = 0;
        assert!(config.validate().is_err());

        let mut config = BeaconChainConfig::default();
        config.fork_slots.deneb = config.fork_slots.capella;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deployment_parameters_require_storage() {
        let config = UpgradeConfig {
            environment: ExecutionEnvironment::Live,
            ..UpgradeConfig::default()
        };
        assert!(matches!(
            config.deployment_parameters(),
            Err(UpgradeError::Configuration(_))
        ));

        let storage = Address::new([0x11; 20]);
        let config = UpgradeConfig {
            storage_address: Some(storage),
            ..config
        };
        let params = config.deployment_parameters().unwrap();
        assert_eq!(params.storage_address, storage);
        assert_eq!(params.beacon, BeaconChainConfig::default());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: UpgradeConfig = toml::from_str(
            r#"
            environment = "local"
            storage_address = "0x1111111111111111111111111111111111111111"

            [beacon]
            seconds_per_slot = 6
            "#,
        )
        .unwrap();

        assert_eq!(config.environment, ExecutionEnvironment::Local);
        assert_eq!(config.artifacts_dir, "artifacts");
        assert_eq!(config.beacon.seconds_per_slot, 6);
        assert_eq!(config.beacon.slots_per_historical_root, 8192);
        assert_eq!(config.beacon.fork_slots, ForkSlots::default());
    }
}
