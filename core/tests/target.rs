//! Time-to-target tests — ceiling solve, reached clamp, unreachable cases.

use mrr_core::metrics::{periods_to_target, TargetOutlook};

#[test]
fn example_case_takes_twenty_five_periods() {
    // 99 + 49 + 199 = 347; ceil(ln(10000/347) / ln(1.15)) = 25.
    let outlook = periods_to_target(347.0, 10_000.0, 15.0);

    assert_eq!(outlook, TargetOutlook::InPeriods(25));
    assert_eq!(outlook.periods(), Some(25));
}

#[test]
fn reached_when_target_already_met() {
    let outlook = periods_to_target(200.0, 100.0, 15.0);

    assert_eq!(outlook, TargetOutlook::Reached);
    assert_eq!(
        outlook.periods(),
        Some(0),
        "target at or below current total means zero remaining periods"
    );
}

#[test]
fn reached_on_exact_boundary() {
    assert_eq!(periods_to_target(500.0, 500.0, 15.0), TargetOutlook::Reached);
}

#[test]
fn unreachable_with_zero_revenue() {
    assert_eq!(
        periods_to_target(0.0, 10_000.0, 15.0),
        TargetOutlook::Unreachable
    );
}

#[test]
fn unreachable_with_non_positive_growth() {
    assert_eq!(
        periods_to_target(347.0, 10_000.0, 0.0),
        TargetOutlook::Unreachable
    );
    assert_eq!(
        periods_to_target(347.0, 10_000.0, -5.0),
        TargetOutlook::Unreachable
    );
}

#[test]
fn unreachable_regardless_of_target_when_degenerate() {
    // Even a trivially small target is unreachable with no revenue to grow.
    assert_eq!(periods_to_target(0.0, 1.0, 15.0), TargetOutlook::Unreachable);
    assert_eq!(periods_to_target(0.0, 0.0, 0.0), TargetOutlook::Unreachable);
}

#[test]
fn non_finite_inputs_are_unreachable() {
    assert_eq!(
        periods_to_target(f64::NAN, 10_000.0, 15.0),
        TargetOutlook::Unreachable
    );
    assert_eq!(
        periods_to_target(347.0, 10_000.0, f64::NAN),
        TargetOutlook::Unreachable
    );
    assert_eq!(
        periods_to_target(347.0, f64::INFINITY, 15.0),
        TargetOutlook::Unreachable
    );
}

#[test]
fn one_period_when_just_above_total() {
    // 1000 -> 1001 at 15%: fractional solve well under 1, ceiling is 1.
    assert_eq!(
        periods_to_target(1_000.0, 1_001.0, 15.0),
        TargetOutlook::InPeriods(1)
    );
}
