// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers.

/// `steps` evenly spaced values from `start` towards `end`, excluding `end`.
pub fn linspace_open(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps == 0 { return Vec::new(); }
    let step = (end - start) / steps as f64;
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Round step (1, 2, 2.5, 5 x 10^k) giving roughly `target` intervals over `span`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span.abs() / target.max(1) as f64;
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Tick positions at multiples of a nice step inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(max > min) {
        return vec![min];
    }
    let step = nice_step(max - min, target);
    let first = (min / step).ceil() * step;
    let mut out = Vec::new();
    let mut i = 0usize;
    loop {
        let v = first + step * i as f64;
        if v > max + step * 1e-9 {
            break;
        }
        // snap tiny float noise like 0.30000000000000004 for clean labels
        out.push((v / step).round() * step);
        i += 1;
    }
    out
}

/// Tick label text: integers without decimals, otherwise shortest form.
pub fn format_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{}", (v * 1e6).round() / 1e6)
    }
}
