//! Debt payoff domain models.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, ValidationError};

/// One outstanding liability supplied to a simulation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: String,
    pub name: String,
    /// Principal remaining
    pub balance: Decimal,
    /// Nominal annual percentage rate (18 = 18% APR)
    pub interest_rate: Decimal,
    /// Amount due each month
    pub minimum_payment: Decimal,
}

impl Debt {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        balance: Decimal,
        interest_rate: Decimal,
        minimum_payment: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            balance,
            interest_rate,
            minimum_payment,
        }
    }

    /// A debt supplied with a zero balance is already paid off.
    pub fn is_paid_off(&self) -> bool {
        self.balance.is_zero()
    }
}

/// Ordering used to pick which debt receives the extra payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PayoffStrategy {
    /// Smallest original balance first
    #[default]
    Snowball,
    /// Highest interest rate first
    Avalanche,
}

impl PayoffStrategy {
    pub const ALL: [PayoffStrategy; 2] = [PayoffStrategy::Snowball, PayoffStrategy::Avalanche];

    pub fn as_str(&self) -> &'static str {
        match self {
            PayoffStrategy::Snowball => "snowball",
            PayoffStrategy::Avalanche => "avalanche",
        }
    }
}

impl std::fmt::Display for PayoffStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PayoffStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "snowball" => Ok(PayoffStrategy::Snowball),
            "avalanche" => Ok(PayoffStrategy::Avalanche),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown payoff strategy '{}'",
                other
            )))),
        }
    }
}

/// An input debt annotated with its payoff results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DebtPayoff {
    pub id: String,
    pub name: String,
    /// Original balance as supplied
    pub balance: Decimal,
    pub minimum_payment: Decimal,
    pub interest_rate: Decimal,
    /// 1-based rank in which the debt was extinguished
    pub payoff_order: u32,
    /// Month in which the balance reached zero; 0 if supplied already paid
    pub payoff_month: u32,
    pub interest_paid: Decimal,
    pub total_paid: Decimal,
}

/// One debt's activity within a simulated month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DebtMonthEntry {
    pub debt_id: String,
    pub interest: Decimal,
    pub payment: Decimal,
    pub remaining_balance: Decimal,
}

/// A row of the amortization schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayoffMonth {
    /// 1-based month index
    pub month: u32,
    pub entries: Vec<DebtMonthEntry>,
    pub interest: Decimal,
    pub payment: Decimal,
    pub remaining_balance: Decimal,
}

/// Result of simulating one strategy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayoffPlan {
    pub strategy: PayoffStrategy,
    /// Input debts in input order
    pub debts: Vec<DebtPayoff>,
    pub total_payments: Decimal,
    pub total_interest: Decimal,
    pub payoff_time_months: u32,
    pub schedule: Vec<PayoffMonth>,
}

impl PayoffPlan {
    /// Debt ids sorted by the order in which they were paid off.
    pub fn payoff_sequence(&self) -> Vec<&str> {
        let mut ranked: Vec<&DebtPayoff> = self.debts.iter().collect();
        ranked.sort_by_key(|d| d.payoff_order);
        ranked.into_iter().map(|d| d.id.as_str()).collect()
    }

    /// Sum of the original balances.
    pub fn total_principal(&self) -> Decimal {
        self.debts.iter().map(|d| d.balance).sum()
    }
}

/// Input for a single simulation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtSimulationRequest {
    pub debts: Vec<Debt>,
    pub strategy: PayoffStrategy,
    #[serde(default)]
    pub extra_monthly_payment: Decimal,
}

/// Side-by-side result of both strategies over identical inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StrategyComparison {
    pub snowball: PayoffPlan,
    pub avalanche: PayoffPlan,
    /// Snowball interest minus avalanche interest (negative if snowball is cheaper)
    pub interest_saved_by_avalanche: Decimal,
    /// Snowball months minus avalanche months
    pub months_saved_by_avalanche: i64,
    pub recommended: PayoffStrategy,
}

impl StrategyComparison {
    pub fn plan_for(&self, strategy: PayoffStrategy) -> &PayoffPlan {
        match strategy {
            PayoffStrategy::Snowball => &self.snowball,
            PayoffStrategy::Avalanche => &self.avalanche,
        }
    }
}
