//! Options shared by the debt and goal simulators.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_SIMULATION_MONTHS;

/// Tunables shared by every simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationOptions {
    /// Safety cap on simulated months before a plan is declared non-converging
    pub max_months: u32,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            max_months: DEFAULT_MAX_SIMULATION_MONTHS,
        }
    }
}

impl SimulationOptions {
    pub fn with_max_months(max_months: u32) -> Self {
        Self { max_months }
    }
}
