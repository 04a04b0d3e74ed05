use log::debug;
use rust_decimal::Decimal;

use super::debts_model::{Debt, DebtSimulationRequest, PayoffPlan, StrategyComparison};
use super::debts_simulator::{compare_strategies, simulate_with_options};
use super::debts_traits::DebtServiceTrait;
use crate::errors::Result;
use crate::options::SimulationOptions;

/// Service for debt payoff planning.
///
/// Holds the simulation options configured at startup and delegates to the
/// pure simulator functions.
#[derive(Debug, Clone, Default)]
pub struct DebtService {
    options: SimulationOptions,
}

impl DebtService {
    pub fn new(options: SimulationOptions) -> Self {
        DebtService { options }
    }

    pub fn options(&self) -> &SimulationOptions {
        &self.options
    }
}

impl DebtServiceTrait for DebtService {
    fn simulate(&self, request: DebtSimulationRequest) -> Result<PayoffPlan> {
        debug!(
            "Debt simulation requested: strategy={}, debts={}, extra={}",
            request.strategy,
            request.debts.len(),
            request.extra_monthly_payment
        );
        simulate_with_options(
            &request.debts,
            request.strategy,
            request.extra_monthly_payment,
            &self.options,
        )
    }

    fn compare_strategies(
        &self,
        debts: Vec<Debt>,
        extra_monthly_payment: Decimal,
    ) -> Result<StrategyComparison> {
        debug!(
            "Strategy comparison requested: debts={}, extra={}",
            debts.len(),
            extra_monthly_payment
        );
        let comparison = compare_strategies(&debts, extra_monthly_payment, &self.options)?;
        debug!(
            "Recommended {} (avalanche saves {} interest, {} months)",
            comparison.recommended,
            comparison.interest_saved_by_avalanche,
            comparison.months_saved_by_avalanche
        );
        Ok(comparison)
    }
}
