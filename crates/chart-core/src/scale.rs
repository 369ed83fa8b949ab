// File: crates/chart-core/src/scale.rs
// Summary: Value (continuous) and band (categorical) scale transforms.

/// Value coordinate (e.g., emissions).
pub type Value = f64;

/// Linear value scale mapping a data range onto a pixel span.
/// `start_px` receives `vmin`; it may be greater than `end_px` (vertical axes).
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub start_px: f32,
    pub end_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(start_px: f32, end_px: f32, vmin: Value, mut vmax: Value) -> Self {
        if (vmax - vmin).abs() < 1e-12 { vmax = vmin + 1.0; }
        Self { start_px, end_px, vmin, vmax }
    }

    /// Vertical scale: `vmin` at `bottom_px`, `vmax` at `top_px`.
    pub fn vertical(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        Self::new_linear(bottom_px, top_px, vmin, vmax)
    }

    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.start_px + ((v - self.vmin) / span) as f32 * (self.end_px - self.start_px)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> Value {
        let span = (self.vmax - self.vmin).max(1e-12);
        let len = self.end_px - self.start_px;
        if len.abs() < f32::EPSILON {
            return self.vmin;
        }
        self.vmin + ((px - self.start_px) / len) as f64 * span
    }
}

/// Categorical scale: `count` equal bands between `start_px` and `end_px`.
#[derive(Clone, Copy, Debug)]
pub struct BandScale {
    pub start_px: f32,
    pub end_px: f32,
    pub count: usize,
}

impl BandScale {
    pub fn new(start_px: f32, end_px: f32, count: usize) -> Self {
        Self { start_px, end_px, count: count.max(1) }
    }

    #[inline]
    pub fn step(&self) -> f32 {
        (self.end_px - self.start_px) / self.count as f32
    }

    /// Center of band `i`.
    #[inline]
    pub fn center(&self, i: usize) -> f32 {
        self.start_px + self.step() * (i as f32 + 0.5)
    }

    /// Bar thickness for a band (signed like `step`).
    #[inline]
    pub fn bar_width(&self, fraction: f32) -> f32 {
        self.step() * fraction
    }
}
