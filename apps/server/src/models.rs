use chrono::NaiveDate;
use moneymapp_core::debts as core_debts;
use moneymapp_core::debts::PayoffStrategy;
use moneymapp_core::goals as core_goals;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===================== Debts =====================

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: String,
    pub name: String,
    #[schema(value_type = f64)]
    pub balance: Decimal,
    /// Annual percentage rate, e.g. 18.5
    #[schema(value_type = f64)]
    pub interest_rate: Decimal,
    #[schema(value_type = f64)]
    pub minimum_payment: Decimal,
}

impl From<Debt> for core_debts::Debt {
    fn from(d: Debt) -> Self {
        core_debts::Debt::new(d.id, d.name, d.balance, d.interest_rate, d.minimum_payment)
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DebtSimulationRequest {
    pub debts: Vec<Debt>,
    #[schema(value_type = String, example = "avalanche")]
    pub strategy: PayoffStrategy,
    #[serde(default)]
    #[schema(value_type = f64)]
    pub extra_monthly_payment: Decimal,
    #[serde(default)]
    pub include_schedule: bool,
}

impl From<DebtSimulationRequest> for core_debts::DebtSimulationRequest {
    fn from(r: DebtSimulationRequest) -> Self {
        Self {
            debts: r.debts.into_iter().map(Into::into).collect(),
            strategy: r.strategy,
            extra_monthly_payment: r.extra_monthly_payment,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DebtComparisonRequest {
    pub debts: Vec<Debt>,
    #[serde(default)]
    #[schema(value_type = f64)]
    pub extra_monthly_payment: Decimal,
    #[serde(default)]
    pub include_schedule: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DebtPayoff {
    pub id: String,
    pub name: String,
    #[schema(value_type = f64)]
    pub balance: Decimal,
    #[schema(value_type = f64)]
    pub minimum_payment: Decimal,
    #[schema(value_type = f64)]
    pub interest_rate: Decimal,
    pub payoff_order: u32,
    pub payoff_month: u32,
    #[schema(value_type = f64)]
    pub interest_paid: Decimal,
    #[schema(value_type = f64)]
    pub total_paid: Decimal,
}

impl From<core_debts::DebtPayoff> for DebtPayoff {
    fn from(d: core_debts::DebtPayoff) -> Self {
        Self {
            id: d.id,
            name: d.name,
            balance: d.balance,
            minimum_payment: d.minimum_payment,
            interest_rate: d.interest_rate,
            payoff_order: d.payoff_order,
            payoff_month: d.payoff_month,
            interest_paid: d.interest_paid,
            total_paid: d.total_paid,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DebtMonthEntry {
    pub debt_id: String,
    #[schema(value_type = f64)]
    pub interest: Decimal,
    #[schema(value_type = f64)]
    pub payment: Decimal,
    #[schema(value_type = f64)]
    pub remaining_balance: Decimal,
}

impl From<core_debts::DebtMonthEntry> for DebtMonthEntry {
    fn from(e: core_debts::DebtMonthEntry) -> Self {
        Self {
            debt_id: e.debt_id,
            interest: e.interest,
            payment: e.payment,
            remaining_balance: e.remaining_balance,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PayoffMonth {
    pub month: u32,
    pub entries: Vec<DebtMonthEntry>,
    #[schema(value_type = f64)]
    pub interest: Decimal,
    #[schema(value_type = f64)]
    pub payment: Decimal,
    #[schema(value_type = f64)]
    pub remaining_balance: Decimal,
}

impl From<core_debts::PayoffMonth> for PayoffMonth {
    fn from(m: core_debts::PayoffMonth) -> Self {
        Self {
            month: m.month,
            entries: m.entries.into_iter().map(Into::into).collect(),
            interest: m.interest,
            payment: m.payment,
            remaining_balance: m.remaining_balance,
        }
    }
}

/// A payoff plan as returned over the wire. The month-by-month schedule is
/// only included on request.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DebtSimulation {
    #[schema(value_type = String, example = "snowball")]
    pub strategy: PayoffStrategy,
    pub debts: Vec<DebtPayoff>,
    #[schema(value_type = f64)]
    pub total_payments: Decimal,
    #[schema(value_type = f64)]
    pub total_interest: Decimal,
    pub payoff_time_months: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<PayoffMonth>>,
}

impl DebtSimulation {
    pub fn from_plan(plan: core_debts::PayoffPlan, include_schedule: bool) -> Self {
        let schedule = include_schedule
            .then(|| plan.schedule.into_iter().map(PayoffMonth::from).collect());
        Self {
            strategy: plan.strategy,
            debts: plan.debts.into_iter().map(Into::into).collect(),
            total_payments: plan.total_payments,
            total_interest: plan.total_interest,
            payoff_time_months: plan.payoff_time_months,
            schedule,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StrategyComparison {
    pub snowball: DebtSimulation,
    pub avalanche: DebtSimulation,
    #[schema(value_type = f64)]
    pub interest_saved_by_avalanche: Decimal,
    pub months_saved_by_avalanche: i64,
    #[schema(value_type = String, example = "avalanche")]
    pub recommended: PayoffStrategy,
}

impl StrategyComparison {
    pub fn from_comparison(c: core_debts::StrategyComparison, include_schedule: bool) -> Self {
        Self {
            snowball: DebtSimulation::from_plan(c.snowball, include_schedule),
            avalanche: DebtSimulation::from_plan(c.avalanche, include_schedule),
            interest_saved_by_avalanche: c.interest_saved_by_avalanche,
            months_saved_by_avalanche: c.months_saved_by_avalanche,
            recommended: c.recommended,
        }
    }
}

// ===================== Goals =====================

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GoalProjectionRequest {
    #[schema(value_type = f64)]
    pub target_amount: Decimal,
    #[serde(default)]
    #[schema(value_type = f64)]
    pub current_amount: Decimal,
    #[serde(default)]
    #[schema(value_type = f64)]
    pub monthly_contribution: Decimal,
    #[serde(default)]
    #[schema(value_type = f64)]
    pub annual_return_rate: Decimal,
    pub start_date: Option<NaiveDate>,
}

impl From<GoalProjectionRequest> for core_goals::GoalSimulationInput {
    fn from(r: GoalProjectionRequest) -> Self {
        Self {
            target_amount: r.target_amount,
            current_amount: r.current_amount,
            monthly_contribution: r.monthly_contribution,
            annual_return_rate: r.annual_return_rate,
            start_date: r.start_date,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GoalProjectionMonth {
    pub month: u32,
    #[schema(value_type = f64)]
    pub contribution: Decimal,
    #[schema(value_type = f64)]
    pub growth: Decimal,
    #[schema(value_type = f64)]
    pub balance: Decimal,
}

impl From<core_goals::GoalProjectionMonth> for GoalProjectionMonth {
    fn from(m: core_goals::GoalProjectionMonth) -> Self {
        Self {
            month: m.month,
            contribution: m.contribution,
            growth: m.growth,
            balance: m.balance,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GoalProjection {
    #[schema(value_type = f64)]
    pub target_amount: Decimal,
    #[schema(value_type = f64)]
    pub starting_amount: Decimal,
    #[schema(value_type = f64)]
    pub monthly_contribution: Decimal,
    #[schema(value_type = f64)]
    pub annual_return_rate: Decimal,
    pub months_to_target: u32,
    #[schema(value_type = f64)]
    pub total_contributions: Decimal,
    #[schema(value_type = f64)]
    pub total_growth: Decimal,
    #[schema(value_type = f64)]
    pub final_balance: Decimal,
    pub projected_completion_date: Option<NaiveDate>,
    pub schedule: Vec<GoalProjectionMonth>,
}

impl From<core_goals::GoalSimulation> for GoalProjection {
    fn from(g: core_goals::GoalSimulation) -> Self {
        Self {
            target_amount: g.target_amount,
            starting_amount: g.starting_amount,
            monthly_contribution: g.monthly_contribution,
            annual_return_rate: g.annual_return_rate,
            months_to_target: g.months_to_target,
            total_contributions: g.total_contributions,
            total_growth: g.total_growth,
            final_balance: g.final_balance,
            projected_completion_date: g.projected_completion_date,
            schedule: g.schedule.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RequiredContributionRequest {
    #[schema(value_type = f64)]
    pub target_amount: Decimal,
    #[serde(default)]
    #[schema(value_type = f64)]
    pub current_amount: Decimal,
    #[serde(default)]
    #[schema(value_type = f64)]
    pub annual_return_rate: Decimal,
    pub months: u32,
}

impl From<RequiredContributionRequest> for core_goals::RequiredContributionInput {
    fn from(r: RequiredContributionRequest) -> Self {
        Self {
            target_amount: r.target_amount,
            current_amount: r.current_amount,
            annual_return_rate: r.annual_return_rate,
            months: r.months,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RequiredContributionResponse {
    #[schema(value_type = f64)]
    pub monthly_contribution: Decimal,
}
