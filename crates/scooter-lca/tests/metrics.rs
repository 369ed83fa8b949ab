// File: crates/scooter-lca/tests/metrics.rs
// Purpose: Derived figures computed from the literal datasets.

use scooter_lca::dataset::*;
use scooter_lca::metrics::*;

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

#[test]
fn modal_reductions_against_car() {
    let r = reduction_vs_max(&MODE_EMISSIONS);
    assert!(close(r[0], 88.5, 0.05), "e-scooter: {}", r[0]);
    assert!(close(r[1], 80.2, 0.05), "bus: {}", r[1]);
    assert_eq!(r[2], 0.0);
}

#[test]
fn component_shares_sum_to_hundred_and_sort_descending() {
    let s = shares(&COMPONENT_EMISSIONS);
    assert!(close(s.iter().sum::<f64>(), 100.0, 1e-9));

    let order = descending_order(&COMPONENT_EMISSIONS);
    assert_eq!(order, vec![7, 0, 1, 6, 3, 2, 4, 5]);
    for pair in order.windows(2) {
        assert!(COMPONENT_EMISSIONS[pair[0]] > COMPONENT_EMISSIONS[pair[1]]);
    }
    assert_eq!(COMPONENTS[order[0]], "Controller");
}

#[test]
fn lifecycle_absolute_follows_shares() {
    assert!(close(PHASE_SHARES.iter().sum::<f64>(), 100.0, 1e-9));
    let abs = absolute_from_shares(&PHASE_SHARES, LIFECYCLE_TOTAL);
    for (a, p) in abs.iter().zip(PHASE_SHARES) {
        assert!(close(*a, p * 202.243398 / 100.0, 1e-12));
    }
    assert!(close(abs.iter().sum::<f64>(), LIFECYCLE_TOTAL, 1e-9));
}

#[test]
fn shorter_lifespan_raises_intensity_by_a_third() {
    let change = percent_change(LIFESPAN_EMISSIONS[0], LIFESPAN_EMISSIONS[1]);
    assert!(close(change, 33.1, 0.05), "change: {change}");
}

#[test]
fn impact_normalization_stays_within_scale() {
    let n = normalize_against(&IMPACT_VALUES, &IMPACT_SCALE_MAXIMA);
    assert_eq!(n.len(), IMPACT_CATEGORIES.len());
    assert!(n.iter().all(|v| (0.0..=100.0).contains(v)), "{n:?}");
    assert!(close(n[0], 186.5430854 / 2.0, 1e-9));
}
