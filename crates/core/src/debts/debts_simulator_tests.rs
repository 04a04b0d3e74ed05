//! Unit tests for the debt payoff simulator.

use super::*;
use crate::errors::{Error, SimulationError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ============================================================================
// Fixtures
// ============================================================================

/// Three debts whose snowball and avalanche priorities differ.
fn three_debt_fixture() -> Vec<Debt> {
    vec![
        Debt::new("credit-card", "Credit Card", dec!(5000), dec!(22), dec!(150)),
        Debt::new("car-loan", "Car Loan", dec!(1000), dec!(6), dec!(50)),
        Debt::new("personal-loan", "Personal Loan", dec!(3000), dec!(12), dec!(90)),
    ]
}

fn payoff<'a>(plan: &'a PayoffPlan, id: &str) -> &'a DebtPayoff {
    plan.debts
        .iter()
        .find(|d| d.id == id)
        .unwrap_or_else(|| panic!("debt {} missing from plan", id))
}

fn assert_invalid_input(result: crate::errors::Result<PayoffPlan>) {
    match result {
        Err(Error::Simulation(SimulationError::InvalidInput(_))) => {}
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}

// ============================================================================
// Basic amortization
// ============================================================================

#[test]
fn test_single_interest_free_debt_pays_off_in_twelve_months() {
    let debts = vec![Debt::new("loan", "Loan", dec!(1200), dec!(0), dec!(100))];

    let plan = simulate(&debts, PayoffStrategy::Snowball, Decimal::ZERO).unwrap();

    assert_eq!(plan.payoff_time_months, 12);
    assert_eq!(plan.total_interest, Decimal::ZERO);
    assert_eq!(plan.total_payments, dec!(1200));
    assert_eq!(plan.schedule.len(), 12);
    assert!(plan.schedule.iter().all(|m| m.payment == dec!(100)));
    assert_eq!(plan.schedule[11].remaining_balance, Decimal::ZERO);

    let loan = payoff(&plan, "loan");
    assert_eq!(loan.payoff_order, 1);
    assert_eq!(loan.payoff_month, 12);
    assert_eq!(loan.total_paid, dec!(1200));
}

#[test]
fn test_interest_accrues_before_payment() {
    // 1000 at 12% APR: month 1 accrues 10.00 before the 100 payment.
    let debts = vec![Debt::new("card", "Card", dec!(1000), dec!(12), dec!(100))];

    let plan = simulate(&debts, PayoffStrategy::Avalanche, Decimal::ZERO).unwrap();

    let first = &plan.schedule[0];
    assert_eq!(first.month, 1);
    assert_eq!(first.interest, dec!(10.00));
    assert_eq!(first.payment, dec!(100));
    assert_eq!(first.remaining_balance, dec!(910.00));
    assert_eq!(first.entries.len(), 1);
    assert_eq!(first.entries[0].debt_id, "card");
}

#[test]
fn test_last_payment_is_capped_at_balance() {
    let debts = vec![Debt::new("loan", "Loan", dec!(250), dec!(0), dec!(100))];

    let plan = simulate(&debts, PayoffStrategy::Snowball, dec!(0)).unwrap();

    assert_eq!(plan.payoff_time_months, 3);
    assert_eq!(plan.schedule[2].payment, dec!(50));
    assert_eq!(plan.total_payments, dec!(250));
}

// ============================================================================
// Strategy ordering
// ============================================================================

#[test]
fn test_snowball_targets_smallest_balance_first() {
    let plan = simulate(&three_debt_fixture(), PayoffStrategy::Snowball, dec!(500)).unwrap();

    assert_eq!(
        plan.payoff_sequence(),
        vec!["car-loan", "personal-loan", "credit-card"]
    );
    assert_eq!(plan.payoff_time_months, 13);
    assert_eq!(plan.total_interest, dec!(1027.54));
    assert_eq!(plan.total_payments, dec!(10027.54));
    assert_eq!(payoff(&plan, "car-loan").payoff_month, 2);
    assert_eq!(payoff(&plan, "personal-loan").payoff_month, 7);
}

#[test]
fn test_avalanche_targets_highest_rate_first() {
    let plan = simulate(&three_debt_fixture(), PayoffStrategy::Avalanche, dec!(500)).unwrap();

    assert_eq!(
        plan.payoff_sequence(),
        vec!["credit-card", "personal-loan", "car-loan"]
    );
    assert_eq!(plan.payoff_time_months, 13);
    assert_eq!(plan.total_interest, dec!(773.71));
    assert_eq!(plan.total_payments, dec!(9773.71));
    assert_eq!(payoff(&plan, "credit-card").payoff_month, 9);
}

#[test]
fn test_output_keeps_input_order_and_fields() {
    let debts = three_debt_fixture();
    let plan = simulate(&debts, PayoffStrategy::Avalanche, dec!(500)).unwrap();

    assert_eq!(plan.strategy, PayoffStrategy::Avalanche);
    for (input, output) in debts.iter().zip(plan.debts.iter()) {
        assert_eq!(input.id, output.id);
        assert_eq!(input.name, output.name);
        assert_eq!(input.balance, output.balance);
        assert_eq!(input.minimum_payment, output.minimum_payment);
        assert_eq!(input.interest_rate, output.interest_rate);
        assert_eq!(output.total_paid, output.balance + output.interest_paid);
    }
}

#[test]
fn test_same_month_payoffs_ranked_by_strategy() {
    // Both debts clear in month 1; the strategy decides who ranks first.
    let debts = vec![
        Debt::new("low-rate", "Low Rate", dec!(100), dec!(10), dec!(150)),
        Debt::new("high-rate", "High Rate", dec!(200), dec!(20), dec!(300)),
    ];

    let snowball = simulate(&debts, PayoffStrategy::Snowball, Decimal::ZERO).unwrap();
    assert_eq!(snowball.payoff_sequence(), vec!["low-rate", "high-rate"]);
    assert_eq!(snowball.payoff_time_months, 1);

    let avalanche = simulate(&debts, PayoffStrategy::Avalanche, Decimal::ZERO).unwrap();
    assert_eq!(avalanche.payoff_sequence(), vec!["high-rate", "low-rate"]);

    for plan in [&snowball, &avalanche] {
        assert_eq!(plan.total_interest, dec!(4.16));
        assert_eq!(plan.total_payments, dec!(304.16));
    }
}

#[test]
fn test_equal_balances_tie_break_on_input_order() {
    let debts = vec![
        Debt::new("b", "B", dec!(500), dec!(0), dec!(100)),
        Debt::new("a", "A", dec!(500), dec!(0), dec!(100)),
    ];

    let plan = simulate(&debts, PayoffStrategy::Snowball, dec!(100)).unwrap();

    // First in input order gets the extra payment and finishes first.
    assert_eq!(plan.payoff_sequence(), vec!["b", "a"]);
    assert!(payoff(&plan, "b").payoff_month < payoff(&plan, "a").payoff_month);
}

// ============================================================================
// Freed minimums roll over
// ============================================================================

#[test]
fn test_freed_minimum_rolls_to_next_debt() {
    let debts = vec![
        Debt::new("small", "Small", dec!(100), dec!(0), dec!(50)),
        Debt::new("large", "Large", dec!(1000), dec!(0), dec!(50)),
    ];

    let plan = simulate(&debts, PayoffStrategy::Snowball, Decimal::ZERO).unwrap();

    // Budget stays at 100/month, so 1100 total clears in 11 months.
    assert_eq!(plan.payoff_time_months, 11);
    assert_eq!(payoff(&plan, "small").payoff_month, 2);
    assert_eq!(payoff(&plan, "large").payoff_month, 11);
    assert_eq!(plan.schedule[2].entries.len(), 1);
    assert_eq!(plan.schedule[2].payment, dec!(100));
}

#[test]
fn test_unused_minimum_spills_over_in_same_month() {
    let debts = vec![
        Debt::new("tiny", "Tiny", dec!(30), dec!(0), dec!(50)),
        Debt::new("rest", "Rest", dec!(200), dec!(0), dec!(50)),
    ];

    let plan = simulate(&debts, PayoffStrategy::Snowball, Decimal::ZERO).unwrap();

    let first = &plan.schedule[0];
    assert_eq!(first.payment, dec!(100));
    assert_eq!(first.entries[0].payment, dec!(30));
    assert_eq!(first.entries[1].payment, dec!(70));
    assert_eq!(first.entries[1].remaining_balance, dec!(130));
    assert_eq!(plan.payoff_time_months, 3);
    assert_eq!(plan.total_payments, dec!(230));
}

#[test]
fn test_zero_balance_debt_ranks_last() {
    let debts = vec![
        Debt::new("paid", "Already Paid", dec!(0), dec!(5), dec!(10)),
        Debt::new("card", "Card", dec!(1000), dec!(12), dec!(100)),
    ];

    let plan = simulate(&debts, PayoffStrategy::Avalanche, Decimal::ZERO).unwrap();

    let paid = payoff(&plan, "paid");
    assert_eq!(paid.payoff_order, 2);
    assert_eq!(paid.payoff_month, 0);
    assert_eq!(paid.total_paid, Decimal::ZERO);

    let card = payoff(&plan, "card");
    assert_eq!(card.payoff_order, 1);
    assert_eq!(plan.payoff_time_months, 11);
    assert_eq!(plan.total_interest, dec!(58.98));
    // The paid-off debt's minimum is not part of the monthly budget.
    assert!(plan.schedule.iter().all(|m| m.payment <= dec!(100)));
}

#[test]
fn test_all_debts_already_paid() {
    let debts = vec![
        Debt::new("a", "A", dec!(0), dec!(5), dec!(0)),
        Debt::new("b", "B", dec!(0), dec!(9), dec!(0)),
    ];

    let plan = simulate(&debts, PayoffStrategy::Snowball, dec!(50)).unwrap();

    assert_eq!(plan.payoff_time_months, 0);
    assert_eq!(plan.total_payments, Decimal::ZERO);
    assert!(plan.schedule.is_empty());
    assert_eq!(plan.payoff_sequence(), vec!["a", "b"]);
}

// ============================================================================
// Comparison and monotonicity
// ============================================================================

#[test]
fn test_compare_strategies_recommends_avalanche_for_fixture() {
    let comparison =
        compare_strategies(&three_debt_fixture(), dec!(500), &SimulationOptions::default())
            .unwrap();

    assert_eq!(comparison.interest_saved_by_avalanche, dec!(253.83));
    assert_eq!(comparison.months_saved_by_avalanche, 0);
    assert_eq!(comparison.recommended, PayoffStrategy::Avalanche);
    assert_eq!(
        comparison.plan_for(PayoffStrategy::Snowball).total_interest,
        dec!(1027.54)
    );
}

#[test]
fn test_compare_strategies_tie_recommends_snowball() {
    let debts = vec![Debt::new("only", "Only", dec!(600), dec!(0), dec!(100))];

    let comparison =
        compare_strategies(&debts, Decimal::ZERO, &SimulationOptions::default()).unwrap();

    assert_eq!(comparison.interest_saved_by_avalanche, Decimal::ZERO);
    assert_eq!(comparison.recommended, PayoffStrategy::Snowball);
}

#[test]
fn test_more_extra_never_slows_payoff() {
    for strategy in PayoffStrategy::ALL {
        let mut previous: Option<PayoffPlan> = None;
        for extra in [dec!(0), dec!(100), dec!(250), dec!(500)] {
            let plan = simulate(&three_debt_fixture(), strategy, extra).unwrap();
            if let Some(prev) = &previous {
                assert!(plan.payoff_time_months <= prev.payoff_time_months);
                assert!(plan.total_interest <= prev.total_interest);
            }
            previous = Some(plan);
        }
    }
}

#[test]
fn test_snowball_priority_ignores_interim_balances() {
    // Minimums shrink these balances at different speeds; a larger extra
    // must not flip the target order and cost more interest.
    let debts = vec![
        Debt::new("a", "A", dec!(4768), dec!(0), dec!(110)),
        Debt::new("b", "B", dec!(4968), dec!(0), dec!(175)),
        Debt::new("c", "C", dec!(5078), dec!(1), dec!(186)),
    ];

    let smaller = simulate(&debts, PayoffStrategy::Snowball, dec!(20)).unwrap();
    let larger = simulate(&debts, PayoffStrategy::Snowball, dec!(64)).unwrap();

    assert_eq!(smaller.total_interest, dec!(60.83));
    assert_eq!(larger.total_interest, dec!(60.83));
    assert_eq!(smaller.payoff_time_months, 31);
    assert_eq!(larger.payoff_time_months, 28);
    assert_eq!(larger.payoff_sequence(), vec!["a", "b", "c"]);
}

#[test]
fn test_snowball_without_extra_matches_reference() {
    let plan = simulate(&three_debt_fixture(), PayoffStrategy::Snowball, Decimal::ZERO).unwrap();

    assert_eq!(plan.payoff_time_months, 43);
    assert_eq!(plan.total_interest, dec!(3229.59));
    assert_eq!(payoff(&plan, "car-loan").payoff_month, 22);
}

#[test]
fn test_simulation_is_idempotent() {
    let debts = three_debt_fixture();
    let first = simulate(&debts, PayoffStrategy::Snowball, dec!(250)).unwrap();
    let second = simulate(&debts, PayoffStrategy::Snowball, dec!(250)).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_empty_debts_is_invalid() {
    assert_invalid_input(simulate(&[], PayoffStrategy::Snowball, Decimal::ZERO));
}

#[test]
fn test_zero_minimum_on_outstanding_debt_is_invalid() {
    let debts = vec![Debt::new("loan", "Loan", dec!(500), dec!(5), dec!(0))];
    assert_invalid_input(simulate(&debts, PayoffStrategy::Snowball, Decimal::ZERO));

    let debts = vec![Debt::new("loan", "Loan", dec!(500), dec!(5), dec!(-10))];
    assert_invalid_input(simulate(&debts, PayoffStrategy::Avalanche, dec!(100)));
}

#[test]
fn test_negative_amounts_are_invalid() {
    let negative_balance = vec![Debt::new("x", "X", dec!(-1), dec!(5), dec!(10))];
    assert_invalid_input(simulate(
        &negative_balance,
        PayoffStrategy::Snowball,
        Decimal::ZERO,
    ));

    let negative_rate = vec![Debt::new("x", "X", dec!(100), dec!(-5), dec!(10))];
    assert_invalid_input(simulate(&negative_rate, PayoffStrategy::Snowball, Decimal::ZERO));

    let debts = vec![Debt::new("x", "X", dec!(100), dec!(5), dec!(10))];
    assert_invalid_input(simulate(&debts, PayoffStrategy::Snowball, dec!(-0.01)));
}

#[test]
fn test_duplicate_ids_are_invalid() {
    let debts = vec![
        Debt::new("dup", "First", dec!(100), dec!(5), dec!(10)),
        Debt::new("dup", "Second", dec!(200), dec!(5), dec!(10)),
    ];
    assert_invalid_input(simulate(&debts, PayoffStrategy::Snowball, Decimal::ZERO));
}

#[test]
fn test_zero_month_cap_is_invalid() {
    let debts = vec![Debt::new("loan", "Loan", dec!(100), dec!(0), dec!(10))];
    assert_invalid_input(simulate_with_options(
        &debts,
        PayoffStrategy::Snowball,
        Decimal::ZERO,
        &SimulationOptions::with_max_months(0),
    ));
}

#[test]
fn test_interest_above_minimum_never_converges() {
    // 10000 at 24% APR accrues 200/month against a 100 minimum.
    let debts = vec![Debt::new("card", "Card", dec!(10000), dec!(24), dec!(100))];

    let err = simulate(&debts, PayoffStrategy::Avalanche, Decimal::ZERO).unwrap_err();

    assert!(err.is_non_convergence());
    assert!(matches!(
        err,
        Error::Simulation(SimulationError::NonConvergence { max_months: 1200 })
    ));
    assert!(err.to_string().contains("increase your minimum payment"));
}

#[test]
fn test_extra_payment_rescues_non_converging_debt() {
    let debts = vec![Debt::new("card", "Card", dec!(10000), dec!(24), dec!(100))];

    let plan = simulate(&debts, PayoffStrategy::Avalanche, dec!(400)).unwrap();

    assert!(plan.payoff_time_months < 1200);
    assert_eq!(
        plan.total_payments - plan.total_interest,
        dec!(10000)
    );
}

#[test]
fn test_runaway_balance_overflow_reports_non_convergence() {
    // 1000% APR compounds past the decimal range well before the cap.
    let debts = vec![Debt::new("loan-shark", "Loan Shark", dec!(1000000), dec!(1000), dec!(1))];

    let err = simulate(&debts, PayoffStrategy::Snowball, Decimal::ZERO).unwrap_err();

    assert!(err.is_non_convergence());
}

#[test]
fn test_custom_cap_is_respected() {
    let debts = vec![Debt::new("loan", "Loan", dec!(1200), dec!(0), dec!(100))];

    let exact = simulate_with_options(
        &debts,
        PayoffStrategy::Snowball,
        Decimal::ZERO,
        &SimulationOptions::with_max_months(12),
    );
    assert_eq!(exact.unwrap().payoff_time_months, 12);

    let short = simulate_with_options(
        &debts,
        PayoffStrategy::Snowball,
        Decimal::ZERO,
        &SimulationOptions::with_max_months(11),
    );
    assert!(matches!(
        short,
        Err(Error::Simulation(SimulationError::NonConvergence { max_months: 11 }))
    ));
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_strategy_serialization() {
    assert_eq!(
        serde_json::to_string(&PayoffStrategy::Snowball).unwrap(),
        "\"snowball\""
    );
    assert_eq!(
        serde_json::from_str::<PayoffStrategy>("\"avalanche\"").unwrap(),
        PayoffStrategy::Avalanche
    );
    assert_eq!(
        "Avalanche".parse::<PayoffStrategy>().unwrap(),
        PayoffStrategy::Avalanche
    );
    assert!("fastest".parse::<PayoffStrategy>().is_err());
}

#[test]
fn test_plan_serializes_camel_case_numbers() {
    let debts = vec![Debt::new("loan", "Loan", dec!(1200), dec!(0), dec!(100))];
    let plan = simulate(&debts, PayoffStrategy::Snowball, Decimal::ZERO).unwrap();

    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["strategy"], "snowball");
    assert_eq!(json["payoffTimeMonths"], 12);
    assert_eq!(json["debts"][0]["payoffOrder"], 1);
    assert!(json["totalPayments"].is_number());
    assert!(json["debts"][0]["minimumPayment"].is_number());
}

#[test]
fn test_debt_deserializes_from_wire_shape() {
    let json = r#"{
        "id": "card-1",
        "name": "Visa",
        "balance": 2500.5,
        "interestRate": 19.99,
        "minimumPayment": 75
    }"#;

    let debt: Debt = serde_json::from_str(json).unwrap();
    assert_eq!(debt.id, "card-1");
    assert_eq!(debt.balance, dec!(2500.5));
    assert_eq!(debt.interest_rate, dec!(19.99));
    assert_eq!(debt.minimum_payment, dec!(75));
}
