//! Upgrade deployer CLI
//!
//! Plans the upgrade deployment, rehearses it against the simulated chain,
//! and produces compressed ABI payloads for individual artifacts.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use upgrade_deployer::artifacts::HardhatArtifacts;
use upgrade_deployer::utils::{env_or_default, init_logging, init_logging_from_config};
use upgrade_deployer::{
    compress_abi, Address, DeploymentPlan, ExecutionEnvironment, Registry, SimulatedChain,
    UpgradeConfig, UpgradeDeployer,
};

/// First default account of a local Hardhat node
const SIMULATED_DEPLOYER: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

#[derive(Debug, Parser)]
#[command(author, version, about = "Upgrade contract deployment tool")]
struct Cli {
    /// Configuration file (.json or .toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Target chain name; "hardhat" selects the local environment (defaults to $CHAIN)
    #[arg(long, global = true)]
    chain: Option<String>,

    /// RocketStorage address
    #[arg(long, global = true)]
    storage: Option<Address>,

    /// Hardhat artifacts directory (defaults to $ARTIFACTS_DIR, then the config)
    #[arg(long, global = true)]
    artifacts: Option<PathBuf>,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, global = true)]
    log_filter: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the deployment plan as JSON
    Plan,
    /// Print the compressed ABI payload of a Hardhat artifact file
    CompressAbi {
        /// Artifact JSON file
        artifact: PathBuf,
    },
    /// Run the full deployment against an in-process simulated chain
    Simulate {
        /// Write the deployment manifest to this file
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
}

fn load_config(cli: &Cli) -> Result<UpgradeConfig> {
    let mut config = match &cli.config {
        Some(path) => UpgradeConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => UpgradeConfig::default(),
    };

    if let Some(chain) = &cli.chain {
        config.environment = ExecutionEnvironment::from_chain_name(chain);
    }
    if let Some(storage) = cli.storage {
        config.storage_address = Some(storage);
    }
    config.artifacts_dir = match &cli.artifacts {
        Some(dir) => dir.display().to_string(),
        None => env_or_default("ARTIFACTS_DIR", &config.artifacts_dir),
    };

    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.log_filter.as_deref() {
        Some(filter) => init_logging(Some(filter)),
        None => init_logging_from_config(config.logging.as_ref()),
    }

    match &cli.command {
        Command::Plan => {
            let params = config.deployment_parameters()?;
            let provider = HardhatArtifacts::new(&config.artifacts_dir);
            let registry = Registry::build(&provider, config.environment)?;
            let plan = DeploymentPlan::new(&registry, &params);
            println!("{}", plan.to_json()?);
        }
        Command::CompressAbi { artifact } => {
            let artifact = HardhatArtifacts::from_file(artifact)?;
            println!("{}", compress_abi(&artifact.abi)?);
        }
        Command::Simulate { manifest } => {
            let params = config.deployment_parameters()?;
            let provider = HardhatArtifacts::new(&config.artifacts_dir);
            let registry = Registry::build(&provider, config.environment)?;

            let chain = SimulatedChain::new(SIMULATED_DEPLOYER.parse()?);
            let deployer = UpgradeDeployer::new(&registry, params, &chain);
            let outcome = deployer.run().await?;

            for deployed in outcome.results.iter() {
                println!("{:<36} {}", deployed.contract.key(), deployed.address);
            }
            println!("upgrade contract: {}", outcome.upgrade.address);

            if let Some(path) = manifest {
                outcome
                    .results
                    .write_manifest(path)
                    .with_context(|| format!("Failed to write manifest {}", path.display()))?;
                info!("Wrote deployment manifest to {}", path.display());
            }
        }
    }

    Ok(())
}
