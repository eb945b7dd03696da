//! Growth projection tests — 13 points, compounding on unrounded values.

use mrr_core::metrics::{project_growth, PROJECTION_PERIODS};

#[test]
fn projection_has_thirteen_points_in_order() {
    let points = project_growth(347.0, 15.0);

    assert_eq!(points.len(), PROJECTION_PERIODS as usize + 1);
    for (i, point) in points.iter().enumerate() {
        assert_eq!(point.period, i as u32, "periods must run 0..=12 in order");
    }
}

#[test]
fn point_zero_is_the_rounded_current_total() {
    let points = project_growth(123.4, 15.0);
    assert_eq!(points[0].mrr, 123);

    let points = project_growth(123.6, 15.0);
    assert_eq!(points[0].mrr, 124);
}

/// The recurrence must carry the unrounded value. 100 at 15% MoM reaches
/// round(100 * 1.15^12) = 535 at month 12; rounding every intermediate
/// step drifts to 536.
#[test]
fn compounding_uses_unrounded_intermediates() {
    let points = project_growth(100.0, 15.0);

    assert_eq!(
        points[12].mrr, 535,
        "month 12 must compound on unrounded intermediate values"
    );
}

#[test]
fn zero_growth_projection_is_flat() {
    let points = project_growth(250.0, 0.0);

    assert!(points.iter().all(|p| p.mrr == 250));
}

#[test]
fn empty_book_projects_zeros() {
    let points = project_growth(0.0, 15.0);

    assert_eq!(points.len(), 13);
    assert!(points.iter().all(|p| p.mrr == 0));
}

#[test]
fn negative_growth_decays() {
    let points = project_growth(1_000.0, -50.0);

    assert_eq!(points[0].mrr, 1_000);
    assert_eq!(points[1].mrr, 500);
    assert_eq!(points[2].mrr, 250);
}
