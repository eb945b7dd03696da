//! Metrics engine — derives revenue KPIs from the customer book.
//!
//! This module is REACTIVE and pure. It performs no I/O and holds no
//! state; the desk reinvokes `compute_metrics` on every observed change
//! to its inputs and swaps the snapshot atomically.
//!
//! Every degenerate input (empty book, zero or negative growth, target
//! already met) resolves to a defined value rather than an error, because
//! the result is a continuously-rendered dashboard value.

use crate::{customer::CustomerRecord, types::Period};
use serde::{Deserialize, Serialize};

/// Forward horizon of the growth projection, in months.
pub const PROJECTION_PERIODS: Period = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub period: Period,
    /// Round-to-nearest display value. The compounding recurrence runs on
    /// the unrounded figure — see `project_growth`.
    pub mrr: i64,
}

/// Time to reach the target, as an explicit tagged result rather than a
/// non-finite-float sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetOutlook {
    /// Target already met or exceeded: zero remaining periods.
    Reached,
    InPeriods(Period),
    /// No finite solution: zero revenue, non-positive growth, or a
    /// non-finite input.
    Unreachable,
}

impl TargetOutlook {
    /// Remaining periods, if finite. `Reached` counts as zero.
    pub fn periods(&self) -> Option<Period> {
        match self {
            TargetOutlook::Reached => Some(0),
            TargetOutlook::InPeriods(n) => Some(*n),
            TargetOutlook::Unreachable => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeskMetrics {
    pub total_mrr: f64,
    pub arr: f64,
    pub customer_count: usize,
    /// Average revenue per customer. 0.0 (never NaN) for an empty book.
    pub arpu: f64,
    pub daily_revenue: f64,
    pub weekly_revenue: f64,
    /// Exactly `PROJECTION_PERIODS + 1` points, periods 0..=12 in order.
    pub projection: Vec<ProjectionPoint>,
    pub periods_to_target: TargetOutlook,
}

impl DeskMetrics {
    /// Maximum projected value in the series. Used to scale the bar chart.
    pub fn max_projected_mrr(&self) -> i64 {
        self.projection.iter().map(|p| p.mrr).max().unwrap_or(0)
    }
}

/// Derive all dashboard metrics from the current book and parameters.
pub fn compute_metrics(
    records: &[CustomerRecord],
    target_mrr: f64,
    growth_rate_pct: f64,
) -> DeskMetrics {
    let total_mrr: f64 = records.iter().map(|c| c.mrr).sum();
    let customer_count = records.len();
    let arpu = if customer_count > 0 {
        total_mrr / customer_count as f64
    } else {
        0.0
    };
    let daily_revenue = total_mrr / 30.0;

    DeskMetrics {
        total_mrr,
        arr: total_mrr * 12.0,
        customer_count,
        arpu,
        daily_revenue,
        weekly_revenue: daily_revenue * 7.0,
        projection: project_growth(total_mrr, growth_rate_pct),
        periods_to_target: periods_to_target(total_mrr, target_mrr, growth_rate_pct),
    }
}

/// Compound `total_mrr` forward at `growth_rate_pct` per month.
///
/// The recurrence carries the unrounded value; rounding applies per
/// emitted point only. Rounding before the next step would compound the
/// rounding error across the horizon (100 @ 15% must reach 535 at month
/// 12, not the round-every-step figure).
pub fn project_growth(total_mrr: f64, growth_rate_pct: f64) -> Vec<ProjectionPoint> {
    let rate = 1.0 + growth_rate_pct / 100.0;
    let mut points = Vec::with_capacity(PROJECTION_PERIODS as usize + 1);
    let mut projected = total_mrr;
    for period in 0..=PROJECTION_PERIODS {
        points.push(ProjectionPoint {
            period,
            mrr: projected.round() as i64,
        });
        projected *= rate;
    }
    points
}

/// Solve `target = total * (1 + r)^n` for n, rounded up to whole periods
/// (partial-period progress does not count as having arrived).
///
/// Guards are written `!(x > 0.0)` so NaN inputs take the degenerate
/// branch instead of flowing into `ln`.
pub fn periods_to_target(total_mrr: f64, target_mrr: f64, growth_rate_pct: f64) -> TargetOutlook {
    if !(total_mrr > 0.0) || !(growth_rate_pct > 0.0) || !target_mrr.is_finite() {
        return TargetOutlook::Unreachable;
    }
    if target_mrr <= total_mrr {
        return TargetOutlook::Reached;
    }

    let periods = (target_mrr / total_mrr).ln() / (1.0 + growth_rate_pct / 100.0).ln();
    TargetOutlook::InPeriods(periods.ceil() as Period)
}
