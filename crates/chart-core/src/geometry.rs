// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for point-space layout math.

use skia_safe as skia;

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center(&self) -> (f32, f32) {
        ((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }

    /// Shrink by `insets`; collapses to zero size instead of inverting.
    pub fn inset(&self, insets: &Insets) -> Self {
        let left = self.left + insets.left;
        let top = self.top + insets.top;
        let right = (self.right - insets.right).max(left);
        let bottom = (self.bottom - insets.bottom).max(top);
        Self { left, top, right, bottom }
    }

    /// Split into `n` equal-width columns separated by `gap`.
    pub fn split_columns(&self, n: usize, gap: f32) -> Vec<RectF> {
        if n == 0 {
            return Vec::new();
        }
        let total_gap = gap * (n as f32 - 1.0);
        let w = ((self.width() - total_gap) / n as f32).max(0.0);
        (0..n)
            .map(|i| {
                let left = self.left + i as f32 * (w + gap);
                RectF::from_ltrb(left, self.top, left + w, self.bottom)
            })
            .collect()
    }

    pub fn to_skia(&self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

/// Screen point at `angle` radians counterclockwise from +x around `center`.
/// Screen Y grows downward, so the sine term is subtracted.
#[inline]
pub fn polar_to_screen(center: (f32, f32), radius: f32, angle: f64) -> (f32, f32) {
    (
        center.0 + radius * angle.cos() as f32,
        center.1 - radius * angle.sin() as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_columns_covers_width() {
        let r = RectF::from_ltwh(0.0, 0.0, 210.0, 50.0);
        let cols = r.split_columns(2, 10.0);
        assert_eq!(cols.len(), 2);
        assert_eq!(cols[0].width(), 100.0);
        assert_eq!(cols[1].left, 110.0);
        assert_eq!(cols[1].right, 210.0);
    }

    #[test]
    fn inset_never_inverts() {
        let r = RectF::from_ltwh(0.0, 0.0, 10.0, 10.0);
        let shrunk = r.inset(&Insets::new(20.0, 20.0, 20.0, 20.0));
        assert!(shrunk.width() >= 0.0);
        assert!(shrunk.height() >= 0.0);
    }

    #[test]
    fn polar_quarter_turn_points_up() {
        let (x, y) = polar_to_screen((0.0, 0.0), 10.0, std::f64::consts::FRAC_PI_2);
        assert!(x.abs() < 1e-4);
        assert!((y + 10.0).abs() < 1e-4);
    }
}
