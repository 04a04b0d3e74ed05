//! Forward projection of savings goals.

use log::{debug, warn};
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::constants::MAX_CONTRIBUTION_ADJUSTMENTS;
use crate::errors::{Error, Result, SimulationError};
use crate::options::SimulationOptions;
use crate::utils::money::{accrue_monthly_interest, monthly_rate, round_money_up};
use crate::utils::time_utils::add_months;

use super::goals_model::{
    GoalProjectionMonth, GoalSimulation, GoalSimulationInput, RequiredContributionInput,
};

fn invalid(message: impl Into<String>) -> Error {
    SimulationError::InvalidInput(message.into()).into()
}

fn goal_not_reached(months: u32) -> Error {
    SimulationError::GoalNotReached { months }.into()
}

fn validate_amounts(
    target_amount: Decimal,
    current_amount: Decimal,
    annual_return_rate: Decimal,
) -> Result<()> {
    if target_amount <= Decimal::ZERO {
        return Err(invalid(format!(
            "Target amount must be positive (got {})",
            target_amount
        )));
    }
    if current_amount < Decimal::ZERO {
        return Err(invalid(format!(
            "Current amount cannot be negative (got {})",
            current_amount
        )));
    }
    if annual_return_rate < Decimal::ZERO {
        return Err(invalid(format!(
            "Annual return rate cannot be negative (got {})",
            annual_return_rate
        )));
    }
    Ok(())
}

/// Credits one month of growth, then a contribution trimmed to the
/// shortfall. `None` on decimal overflow.
fn advance_month(
    balance: &mut Decimal,
    rate: Decimal,
    input: &GoalSimulationInput,
) -> Option<(Decimal, Decimal)> {
    let growth = accrue_monthly_interest(*balance, rate)?;
    let grown = balance.checked_add(growth)?;
    let shortfall = (input.target_amount - grown).max(Decimal::ZERO);
    let contribution = input.monthly_contribution.min(shortfall);
    *balance = grown.checked_add(contribution)?;
    Some((growth, contribution))
}

/// Projects a savings balance month by month until it reaches the target.
///
/// Growth is credited before the contribution each month, and the final
/// contribution is trimmed so the goal is not overfunded.
///
/// # Errors
///
/// * `SimulationError::InvalidInput` for a non-positive target or negative
///   amounts.
/// * `SimulationError::GoalNotReached` when the target is not reached within
///   `options.max_months`.
pub fn project_goal(
    input: &GoalSimulationInput,
    options: &SimulationOptions,
) -> Result<GoalSimulation> {
    validate_amounts(
        input.target_amount,
        input.current_amount,
        input.annual_return_rate,
    )?;
    if input.monthly_contribution < Decimal::ZERO {
        return Err(invalid(format!(
            "Monthly contribution cannot be negative (got {})",
            input.monthly_contribution
        )));
    }
    if options.max_months == 0 {
        return Err(invalid("Simulation cap must be at least one month"));
    }

    let rate = monthly_rate(input.annual_return_rate);
    let mut balance = input.current_amount;
    let mut schedule: Vec<GoalProjectionMonth> = Vec::new();
    let mut total_contributions = Decimal::ZERO;
    let mut total_growth = Decimal::ZERO;

    let stalled = input.monthly_contribution.is_zero() && (rate.is_zero() || balance.is_zero());
    if balance < input.target_amount && stalled {
        debug!("Goal projection cannot grow: no contribution and no compounding balance");
        return Err(goal_not_reached(options.max_months));
    }

    let mut month: u32 = 0;
    while balance < input.target_amount {
        if month >= options.max_months {
            debug!(
                "Goal projection did not reach {} within {} months (balance {})",
                input.target_amount, options.max_months, balance
            );
            return Err(goal_not_reached(options.max_months));
        }
        month += 1;

        let (growth, contribution) =
            advance_month(&mut balance, rate, input).ok_or_else(|| {
                debug!("Goal projection overflowed in month {}", month);
                goal_not_reached(options.max_months)
            })?;
        total_growth = total_growth
            .checked_add(growth)
            .ok_or_else(|| goal_not_reached(options.max_months))?;
        total_contributions = total_contributions
            .checked_add(contribution)
            .ok_or_else(|| goal_not_reached(options.max_months))?;

        schedule.push(GoalProjectionMonth {
            month,
            contribution,
            growth,
            balance,
        });
    }

    let projected_completion_date = input
        .start_date
        .and_then(|start| add_months(start, month));

    Ok(GoalSimulation {
        target_amount: input.target_amount,
        starting_amount: input.current_amount,
        monthly_contribution: input.monthly_contribution,
        annual_return_rate: input.annual_return_rate,
        months_to_target: month,
        total_contributions,
        total_growth,
        final_balance: balance,
        projected_completion_date,
        schedule,
    })
}

/// Closed-form annuity payment reaching `target` from `current` in `months`,
/// rounded up to the cent. `None` on decimal overflow.
fn annuity_contribution(
    target: Decimal,
    current: Decimal,
    rate: Decimal,
    months: u32,
) -> Option<Decimal> {
    let contribution = if rate.is_zero() {
        (target - current) / Decimal::from(months)
    } else {
        let growth_factor = (Decimal::ONE + rate).checked_powu(u64::from(months))?;
        let shortfall = target - current.checked_mul(growth_factor)?;
        shortfall
            .checked_mul(rate)?
            .checked_div(growth_factor - Decimal::ONE)?
    };
    Some(round_money_up(contribution.max(Decimal::ZERO)))
}

/// Smallest monthly contribution (to the cent) that reaches the target within
/// `input.months`.
///
/// Starts from the closed-form annuity payment, then verifies it against
/// [`project_goal`] and steps up one cent at a time to absorb monthly
/// rounding. Returns zero when the current amount gets there on its own.
pub fn required_monthly_contribution(
    input: &RequiredContributionInput,
    options: &SimulationOptions,
) -> Result<Decimal> {
    validate_amounts(
        input.target_amount,
        input.current_amount,
        input.annual_return_rate,
    )?;
    if input.months == 0 {
        return Err(invalid("Months to target must be at least one"));
    }
    if input.months > options.max_months {
        return Err(invalid(format!(
            "Months to target cannot exceed {} (got {})",
            options.max_months, input.months
        )));
    }

    let reaches_in_time = |contribution: Decimal| -> Result<bool> {
        let projection = GoalSimulationInput {
            target_amount: input.target_amount,
            current_amount: input.current_amount,
            monthly_contribution: contribution,
            annual_return_rate: input.annual_return_rate,
            start_date: None,
        };
        match project_goal(&projection, options) {
            Ok(simulation) => Ok(simulation.months_to_target <= input.months),
            Err(err) if err.is_non_convergence() => Ok(false),
            Err(err) => Err(err),
        }
    };

    if reaches_in_time(Decimal::ZERO)? {
        return Ok(Decimal::ZERO);
    }

    let rate = monthly_rate(input.annual_return_rate);
    let mut contribution = annuity_contribution(
        input.target_amount,
        input.current_amount,
        rate,
        input.months,
    )
    .ok_or_else(|| invalid("Goal amounts exceed the supported range"))?;

    for _ in 0..=MAX_CONTRIBUTION_ADJUSTMENTS {
        if reaches_in_time(contribution)? {
            debug!(
                "Required contribution for {} in {} months: {}",
                input.target_amount, input.months, contribution
            );
            return Ok(contribution);
        }
        contribution += dec!(0.01);
    }

    warn!(
        "Could not settle a contribution for {} in {} months after {} adjustments",
        input.target_amount, input.months, MAX_CONTRIBUTION_ADJUSTMENTS
    );
    Err(goal_not_reached(input.months))
}
