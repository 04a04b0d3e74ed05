use rust_decimal::Decimal;

use crate::errors::Result;
use crate::goals::goals_model::{GoalSimulation, GoalSimulationInput, RequiredContributionInput};

/// Trait for goal projection operations
pub trait GoalServiceTrait: Send + Sync {
    fn project(&self, input: GoalSimulationInput) -> Result<GoalSimulation>;
    fn required_contribution(&self, input: RequiredContributionInput) -> Result<Decimal>;
}
