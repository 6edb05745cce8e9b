//! Upgrade deployment
//!
//! Sequencing, planning, results, and upgrade aggregator wiring.

pub mod plan;
pub mod results;
pub mod sequencer;
pub mod upgrade;

pub use plan::{DeploymentPlan, PlannedStep};
pub use results::{DeployedContract, DeploymentResults};
pub use sequencer::{DeploymentOutcome, UpgradeDeployer};
pub use upgrade::{
    UpgradeArguments, UpgradeEntry, UPGRADE_ARGUMENT_ORDER, UPGRADE_DEPENDENCY_COUNT,
    UPGRADE_SET_FUNCTION,
};
