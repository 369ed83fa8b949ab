// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (figure sizes, resolution, paddings).

/// Default output resolution in dots per inch.
pub const DPI: f32 = 300.0;
/// Layout is done in points; the canvas is scaled by `dpi / POINTS_PER_INCH`.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Figure size in inches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureSize {
    pub width_in: f32,
    pub height_in: f32,
}

impl FigureSize {
    pub const fn new(width_in: f32, height_in: f32) -> Self {
        Self { width_in, height_in }
    }

    /// Pixel dimensions at `dpi`, never smaller than 1x1.
    pub fn to_pixels(&self, dpi: f32) -> (i32, i32) {
        let w = (self.width_in * dpi).round().max(1.0) as i32;
        let h = (self.height_in * dpi).round().max(1.0) as i32;
        (w, h)
    }

    /// Size in points (1/72 inch).
    pub fn to_points(&self) -> (f32, f32) {
        (self.width_in * POINTS_PER_INCH, self.height_in * POINTS_PER_INCH)
    }
}

/// Panel margins, in points.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
}
