//! Month-by-month debt amortization under a payoff strategy.
//!
//! The monthly budget is fixed at the start of a run: the extra payment plus
//! the minimums of every outstanding debt. Minimums released by paid-off
//! debts therefore roll into the pool aimed at the top-priority debt.

use std::cmp::Ordering;
use std::collections::HashSet;

use log::{debug, warn};
use rust_decimal::Decimal;

use crate::errors::{Error, Result, SimulationError};
use crate::options::SimulationOptions;
use crate::utils::money::{accrue_monthly_interest, monthly_rate};

use super::debts_model::{
    Debt, DebtMonthEntry, DebtPayoff, PayoffMonth, PayoffPlan, PayoffStrategy,
    StrategyComparison,
};

/// Working copy of one debt for the duration of a run.
struct DebtLedger<'a> {
    debt: &'a Debt,
    index: usize,
    balance: Decimal,
    monthly_rate: Decimal,
    active: bool,
    interest_paid: Decimal,
    total_paid: Decimal,
    // 0 until assigned
    payoff_order: u32,
    payoff_month: u32,
    month_interest: Decimal,
    month_payment: Decimal,
}

impl<'a> DebtLedger<'a> {
    fn new(index: usize, debt: &'a Debt) -> Self {
        Self {
            debt,
            index,
            balance: debt.balance,
            monthly_rate: monthly_rate(debt.interest_rate),
            active: !debt.is_paid_off(),
            interest_paid: Decimal::ZERO,
            total_paid: Decimal::ZERO,
            payoff_order: 0,
            payoff_month: 0,
            month_interest: Decimal::ZERO,
            month_payment: Decimal::ZERO,
        }
    }

    fn pay(&mut self, amount: Decimal) {
        self.balance -= amount;
        self.total_paid += amount;
        self.month_payment += amount;
    }

    fn into_payoff(self) -> DebtPayoff {
        DebtPayoff {
            id: self.debt.id.clone(),
            name: self.debt.name.clone(),
            balance: self.debt.balance,
            minimum_payment: self.debt.minimum_payment,
            interest_rate: self.debt.interest_rate,
            payoff_order: self.payoff_order,
            payoff_month: self.payoff_month,
            interest_paid: self.interest_paid,
            total_paid: self.total_paid,
        }
    }
}

type Comparator = fn(&DebtLedger, &DebtLedger) -> Ordering;

fn comparator(strategy: PayoffStrategy) -> Comparator {
    match strategy {
        PayoffStrategy::Snowball => smallest_balance_first,
        PayoffStrategy::Avalanche => highest_rate_first,
    }
}

fn smallest_balance_first(a: &DebtLedger, b: &DebtLedger) -> Ordering {
    a.debt
        .balance
        .cmp(&b.debt.balance)
        .then_with(|| a.index.cmp(&b.index))
}

fn highest_rate_first(a: &DebtLedger, b: &DebtLedger) -> Ordering {
    b.debt
        .interest_rate
        .cmp(&a.debt.interest_rate)
        .then_with(|| a.debt.balance.cmp(&b.debt.balance))
        .then_with(|| a.index.cmp(&b.index))
}

fn invalid(message: impl Into<String>) -> Error {
    SimulationError::InvalidInput(message.into()).into()
}

fn non_convergence(options: &SimulationOptions) -> Error {
    SimulationError::NonConvergence {
        max_months: options.max_months,
    }
    .into()
}

fn checked_sum(values: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, value| acc.checked_add(value))
}

fn validate_inputs(
    debts: &[Debt],
    extra_monthly_payment: Decimal,
    options: &SimulationOptions,
) -> Result<()> {
    if debts.is_empty() {
        return Err(invalid("At least one debt is required"));
    }
    if options.max_months == 0 {
        return Err(invalid("Simulation cap must be at least one month"));
    }
    if extra_monthly_payment < Decimal::ZERO {
        return Err(invalid(format!(
            "Extra monthly payment cannot be negative (got {})",
            extra_monthly_payment
        )));
    }

    let mut seen_ids = HashSet::with_capacity(debts.len());
    for debt in debts {
        if !seen_ids.insert(debt.id.as_str()) {
            return Err(invalid(format!("Duplicate debt id '{}'", debt.id)));
        }
        if debt.balance < Decimal::ZERO {
            return Err(invalid(format!(
                "Debt '{}' has a negative balance ({})",
                debt.id, debt.balance
            )));
        }
        if debt.interest_rate < Decimal::ZERO {
            return Err(invalid(format!(
                "Debt '{}' has a negative interest rate ({})",
                debt.id, debt.interest_rate
            )));
        }
        if debt.balance > Decimal::ZERO && debt.minimum_payment <= Decimal::ZERO {
            return Err(invalid(format!(
                "Debt '{}' has an outstanding balance but no positive minimum payment",
                debt.id
            )));
        }
    }
    Ok(())
}

/// Runs one month over the ledgers. Returns `None` if decimal arithmetic
/// overflows, which only happens when balances compound without bound.
fn simulate_month(
    ledgers: &mut [DebtLedger],
    strategy: PayoffStrategy,
    monthly_budget: Decimal,
    month: u32,
    next_order: &mut u32,
) -> Option<PayoffMonth> {
    let mut order: Vec<usize> = ledgers
        .iter()
        .filter(|l| l.active)
        .map(|l| l.index)
        .collect();

    // 1. Interest accrues before any payment.
    for &i in &order {
        let ledger = &mut ledgers[i];
        let interest = accrue_monthly_interest(ledger.balance, ledger.monthly_rate)?;
        ledger.balance = ledger.balance.checked_add(interest)?;
        ledger.interest_paid = ledger.interest_paid.checked_add(interest)?;
        ledger.month_interest = interest;
        ledger.month_payment = Decimal::ZERO;
    }

    // 2. Priority, keyed on the supplied balances.
    let compare = comparator(strategy);
    order.sort_by(|&a, &b| compare(&ledgers[a], &ledgers[b]));

    // 3. Minimums, never past zero.
    let mut pool = monthly_budget;
    for &i in &order {
        let ledger = &mut ledgers[i];
        let payment = ledger.debt.minimum_payment.min(ledger.balance);
        ledger.pay(payment);
        pool -= payment;
    }

    // 4. Whatever is left cascades down the priority list.
    for &i in &order {
        if pool <= Decimal::ZERO {
            break;
        }
        let ledger = &mut ledgers[i];
        let payment = pool.min(ledger.balance);
        if payment.is_zero() {
            continue;
        }
        ledger.pay(payment);
        pool -= payment;
    }

    // 5. Payoff ranks within a month follow the month's priority.
    for &i in &order {
        let ledger = &mut ledgers[i];
        if ledger.balance.is_zero() {
            ledger.active = false;
            ledger.payoff_order = *next_order;
            ledger.payoff_month = month;
            *next_order += 1;
        }
    }

    order.sort_unstable();
    let entries: Vec<DebtMonthEntry> = order
        .iter()
        .map(|&i| {
            let ledger = &ledgers[i];
            DebtMonthEntry {
                debt_id: ledger.debt.id.clone(),
                interest: ledger.month_interest,
                payment: ledger.month_payment,
                remaining_balance: ledger.balance,
            }
        })
        .collect();

    Some(PayoffMonth {
        month,
        interest: checked_sum(entries.iter().map(|e| e.interest))?,
        payment: checked_sum(entries.iter().map(|e| e.payment))?,
        remaining_balance: checked_sum(ledgers.iter().map(|l| l.balance))?,
        entries,
    })
}

/// Simulates paying off `debts` under `strategy` with the default safety cap.
pub fn simulate(
    debts: &[Debt],
    strategy: PayoffStrategy,
    extra_monthly_payment: Decimal,
) -> Result<PayoffPlan> {
    simulate_with_options(
        debts,
        strategy,
        extra_monthly_payment,
        &SimulationOptions::default(),
    )
}

/// Simulates paying off `debts` under `strategy`.
///
/// Each month: interest accrues on every active debt, every debt receives its
/// minimum (capped at its balance), and the rest of the fixed monthly budget
/// goes to the highest-priority debt, spilling over to the next one when a
/// balance hits zero.
///
/// # Errors
///
/// * `SimulationError::InvalidInput` for an empty list, negative amounts,
///   duplicate ids, or an outstanding debt without a positive minimum.
/// * `SimulationError::NonConvergence` when debts remain after
///   `options.max_months` months.
pub fn simulate_with_options(
    debts: &[Debt],
    strategy: PayoffStrategy,
    extra_monthly_payment: Decimal,
    options: &SimulationOptions,
) -> Result<PayoffPlan> {
    validate_inputs(debts, extra_monthly_payment, options)?;

    let mut ledgers: Vec<DebtLedger> = debts
        .iter()
        .enumerate()
        .map(|(index, debt)| DebtLedger::new(index, debt))
        .collect();

    let monthly_budget = checked_sum(
        ledgers
            .iter()
            .filter(|l| l.active)
            .map(|l| l.debt.minimum_payment)
            .chain(std::iter::once(extra_monthly_payment)),
    )
    .ok_or_else(|| invalid("Monthly payments exceed the supported range"))?;

    debug!(
        "Simulating {} payoff for {} debts (budget {}/month, cap {} months)",
        strategy,
        debts.len(),
        monthly_budget,
        options.max_months
    );

    let mut schedule: Vec<PayoffMonth> = Vec::new();
    let mut total_payments = Decimal::ZERO;
    let mut total_interest = Decimal::ZERO;
    let mut next_order: u32 = 1;
    let mut month: u32 = 0;

    while ledgers.iter().any(|l| l.active) {
        if month >= options.max_months {
            warn!(
                "{} payoff did not complete within {} months; {} debts still outstanding",
                strategy,
                options.max_months,
                ledgers.iter().filter(|l| l.active).count()
            );
            return Err(non_convergence(options));
        }
        month += 1;

        let row = simulate_month(
            &mut ledgers,
            strategy,
            monthly_budget,
            month,
            &mut next_order,
        )
        .and_then(|row| {
            total_payments = total_payments.checked_add(row.payment)?;
            total_interest = total_interest.checked_add(row.interest)?;
            Some(row)
        });

        match row {
            Some(row) => schedule.push(row),
            None => {
                warn!(
                    "{} payoff balances overflowed in month {}; treating as non-converging",
                    strategy, month
                );
                return Err(non_convergence(options));
            }
        }
    }

    // Debts supplied with a zero balance rank after every active debt.
    for ledger in ledgers.iter_mut().filter(|l| l.payoff_order == 0) {
        ledger.payoff_order = next_order;
        next_order += 1;
    }

    debug!(
        "{} payoff finished in {} months (payments {}, interest {})",
        strategy, month, total_payments, total_interest
    );

    Ok(PayoffPlan {
        strategy,
        debts: ledgers.into_iter().map(DebtLedger::into_payoff).collect(),
        total_payments,
        total_interest,
        payoff_time_months: month,
        schedule,
    })
}

/// Runs both strategies over the same inputs.
///
/// The recommendation goes to the strategy with strictly less interest, then
/// to the one finishing sooner; a full tie recommends snowball.
pub fn compare_strategies(
    debts: &[Debt],
    extra_monthly_payment: Decimal,
    options: &SimulationOptions,
) -> Result<StrategyComparison> {
    let snowball = simulate_with_options(
        debts,
        PayoffStrategy::Snowball,
        extra_monthly_payment,
        options,
    )?;
    let avalanche = simulate_with_options(
        debts,
        PayoffStrategy::Avalanche,
        extra_monthly_payment,
        options,
    )?;

    let recommended = match avalanche.total_interest.cmp(&snowball.total_interest) {
        Ordering::Less => PayoffStrategy::Avalanche,
        Ordering::Greater => PayoffStrategy::Snowball,
        Ordering::Equal if avalanche.payoff_time_months < snowball.payoff_time_months => {
            PayoffStrategy::Avalanche
        }
        Ordering::Equal => PayoffStrategy::Snowball,
    };

    Ok(StrategyComparison {
        interest_saved_by_avalanche: snowball.total_interest - avalanche.total_interest,
        months_saved_by_avalanche: i64::from(snowball.payoff_time_months)
            - i64::from(avalanche.payoff_time_months),
        recommended,
        snowball,
        avalanche,
    })
}
