//! Savings goal projection models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parameters for projecting a savings goal forward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalSimulationInput {
    pub target_amount: Decimal,
    #[serde(default)]
    pub current_amount: Decimal,
    #[serde(default)]
    pub monthly_contribution: Decimal,
    /// Nominal annual return in percent, compounded monthly
    #[serde(default)]
    pub annual_return_rate: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

/// A row of the goal projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProjectionMonth {
    /// 1-based month index
    pub month: u32,
    pub contribution: Decimal,
    pub growth: Decimal,
    pub balance: Decimal,
}

/// Projected path of a savings goal to its target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalSimulation {
    pub target_amount: Decimal,
    pub starting_amount: Decimal,
    pub monthly_contribution: Decimal,
    pub annual_return_rate: Decimal,
    pub months_to_target: u32,
    pub total_contributions: Decimal,
    pub total_growth: Decimal,
    pub final_balance: Decimal,
    pub projected_completion_date: Option<NaiveDate>,
    pub schedule: Vec<GoalProjectionMonth>,
}

/// Parameters for solving the contribution needed to hit a deadline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequiredContributionInput {
    pub target_amount: Decimal,
    #[serde(default)]
    pub current_amount: Decimal,
    #[serde(default)]
    pub annual_return_rate: Decimal,
    pub months: u32,
}
