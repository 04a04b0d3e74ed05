//! Debts module - payoff models, simulator, service, and traits.

mod debts_model;
mod debts_service;
mod debts_simulator;
mod debts_traits;

pub use debts_model::{
    Debt, DebtMonthEntry, DebtPayoff, DebtSimulationRequest, PayoffMonth, PayoffPlan,
    PayoffStrategy, StrategyComparison,
};
pub use debts_service::DebtService;
pub use debts_simulator::{compare_strategies, simulate, simulate_with_options};
pub use debts_traits::DebtServiceTrait;

pub use crate::options::SimulationOptions;

#[cfg(test)]
mod debts_simulator_tests;
