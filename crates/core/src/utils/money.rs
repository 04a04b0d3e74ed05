//! Monetary rounding and rate helpers shared by the simulators.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::constants::{MONEY_DECIMAL_PRECISION, MONTHS_PER_YEAR};

/// Rounds an amount to cents, midpoints away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds an amount up to the next cent.
pub fn round_money_up(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DECIMAL_PRECISION, RoundingStrategy::ToPositiveInfinity)
}

/// Converts a nominal annual percentage rate (e.g. `18` for 18%) into the
/// periodic monthly rate (`0.015`).
pub fn monthly_rate(annual_percentage_rate: Decimal) -> Decimal {
    annual_percentage_rate / dec!(100) / Decimal::from(MONTHS_PER_YEAR)
}

/// Interest accrued on `balance` over one month, rounded to cents.
///
/// Returns `None` when the multiplication overflows the decimal range,
/// which only happens for balances that have been compounding unchecked.
pub fn accrue_monthly_interest(balance: Decimal, monthly_rate: Decimal) -> Option<Decimal> {
    if balance.is_zero() || monthly_rate.is_zero() {
        return Some(Decimal::ZERO);
    }
    balance.checked_mul(monthly_rate).map(round_money)
}
