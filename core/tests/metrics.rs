//! Aggregation tests for the metrics engine.

use chrono::NaiveDate;
use mrr_core::customer::CustomerRecord;
use mrr_core::metrics::compute_metrics;

fn record(id: &str, name: &str, mrr: f64) -> CustomerRecord {
    CustomerRecord {
        id: id.into(),
        name: name.into(),
        mrr,
        plan: "Pro".into(),
        start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
    }
}

#[test]
fn totals_are_exact_sums() {
    let records = vec![
        record("c1", "Acme Corp", 99.0),
        record("c2", "TechStart Inc", 49.0),
        record("c3", "Growth Labs", 199.0),
    ];

    let m = compute_metrics(&records, 10_000.0, 15.0);

    assert_eq!(m.total_mrr, 347.0, "MRR must equal the exact fee sum");
    assert_eq!(m.arr, 347.0 * 12.0, "ARR must be exactly MRR * 12");
    assert_eq!(m.customer_count, 3);
}

#[test]
fn arpu_is_the_mean_fee() {
    let records = vec![record("c1", "A", 100.0), record("c2", "B", 200.0)];

    let m = compute_metrics(&records, 10_000.0, 15.0);

    assert_eq!(m.arpu, 150.0);
}

#[test]
fn empty_book_yields_zero_arpu_not_nan() {
    let m = compute_metrics(&[], 10_000.0, 15.0);

    assert_eq!(m.customer_count, 0);
    assert_eq!(m.total_mrr, 0.0);
    assert_eq!(m.arr, 0.0);
    assert_eq!(m.arpu, 0.0, "ARPU must be 0, never NaN, for an empty book");
    assert!(!m.arpu.is_nan());
}

#[test]
fn aggregation_is_order_independent() {
    let forward = vec![
        record("c1", "A", 12.5),
        record("c2", "B", 87.5),
        record("c3", "C", 400.0),
    ];
    let mut reversed = forward.clone();
    reversed.reverse();

    let a = compute_metrics(&forward, 10_000.0, 15.0);
    let b = compute_metrics(&reversed, 10_000.0, 15.0);

    assert_eq!(a.total_mrr, b.total_mrr);
    assert_eq!(a.arpu, b.arpu);
    assert_eq!(a.periods_to_target, b.periods_to_target);
}

#[test]
fn quick_stats_derive_from_total() {
    let records = vec![record("c1", "A", 300.0)];

    let m = compute_metrics(&records, 10_000.0, 15.0);

    assert_eq!(m.daily_revenue, 10.0);
    assert_eq!(m.weekly_revenue, 70.0);
}
