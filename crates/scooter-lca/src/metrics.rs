// File: crates/scooter-lca/src/metrics.rs
// Summary: Derived metrics over literal series (shares, reductions, changes, normalization, ordering).

/// Each value as a percentage of the sum.
pub fn shares(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    values.iter().map(|v| v / total * 100.0).collect()
}

/// Percentage reduction of each value relative to the largest one: `(1 - v / max) * 100`.
pub fn reduction_vs_max(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    values.iter().map(|v| (1.0 - v / max) * 100.0).collect()
}

/// Percent change of `value` relative to `base`.
pub fn percent_change(value: f64, base: f64) -> f64 {
    (value - base) / base * 100.0
}

/// Absolute amounts from percentage shares of `total`.
pub fn absolute_from_shares(percentages: &[f64], total: f64) -> Vec<f64> {
    percentages.iter().map(|p| p * total / 100.0).collect()
}

/// `value / max * 100` per entry; pairs beyond the shorter slice are dropped.
pub fn normalize_against(values: &[f64], maxima: &[f64]) -> Vec<f64> {
    values.iter().zip(maxima).map(|(v, m)| v / m * 100.0).collect()
}

/// Indices ordering `values` from largest to smallest.
pub fn descending_order(values: &[f64]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..values.len()).collect();
    idx.sort_by(|&a, &b| values[b].total_cmp(&values[a]));
    idx
}
