use log::debug;
use rust_decimal::Decimal;

use super::goals_model::{GoalSimulation, GoalSimulationInput, RequiredContributionInput};
use super::goals_projection::{project_goal, required_monthly_contribution};
use super::goals_traits::GoalServiceTrait;
use crate::errors::Result;
use crate::options::SimulationOptions;

/// Service for savings goal projections.
#[derive(Debug, Clone, Default)]
pub struct GoalService {
    options: SimulationOptions,
}

impl GoalService {
    pub fn new(options: SimulationOptions) -> Self {
        GoalService { options }
    }
}

impl GoalServiceTrait for GoalService {
    fn project(&self, input: GoalSimulationInput) -> Result<GoalSimulation> {
        debug!(
            "Goal projection requested: target={}, current={}, contribution={}, rate={}",
            input.target_amount,
            input.current_amount,
            input.monthly_contribution,
            input.annual_return_rate
        );
        project_goal(&input, &self.options)
    }

    fn required_contribution(&self, input: RequiredContributionInput) -> Result<Decimal> {
        debug!(
            "Required contribution requested: target={}, current={}, months={}",
            input.target_amount, input.current_amount, input.months
        );
        required_monthly_contribution(&input, &self.options)
    }
}
