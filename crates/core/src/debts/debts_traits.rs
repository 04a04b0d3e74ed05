use rust_decimal::Decimal;

use crate::debts::debts_model::{Debt, DebtSimulationRequest, PayoffPlan, StrategyComparison};
use crate::errors::Result;

/// Trait for debt payoff planning operations
pub trait DebtServiceTrait: Send + Sync {
    fn simulate(&self, request: DebtSimulationRequest) -> Result<PayoffPlan>;
    fn compare_strategies(
        &self,
        debts: Vec<Debt>,
        extra_monthly_payment: Decimal,
    ) -> Result<StrategyComparison>;
}
