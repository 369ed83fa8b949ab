// File: crates/chart-core/src/palette.rs
// Summary: Sequential color palettes sampled the way seaborn samples matplotlib colormaps.

use skia_safe as skia;

/// Viridis anchor colors at t = 0, 1/8, ..., 1; linear interpolation in between.
const VIRIDIS: [(u8, u8, u8); 9] = [
    (0x44, 0x01, 0x54),
    (0x48, 0x28, 0x78),
    (0x3e, 0x49, 0x89),
    (0x31, 0x68, 0x8e),
    (0x26, 0x82, 0x8e),
    (0x1f, 0x9e, 0x89),
    (0x35, 0xb7, 0x79),
    (0x6e, 0xce, 0x58),
    (0xfd, 0xe7, 0x25),
];

/// Length of the default color cycle.
pub const CYCLE_LEN: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palette {
    Viridis,
}

impl Palette {
    /// Color at position `t` in `[0, 1]`.
    pub fn sample(&self, t: f64) -> skia::Color {
        let stops = match self {
            Palette::Viridis => &VIRIDIS,
        };
        let t = t.clamp(0.0, 1.0);
        let pos = t * (stops.len() - 1) as f64;
        let i = (pos.floor() as usize).min(stops.len() - 2);
        let f = pos - i as f64;
        let (a, b) = (stops[i], stops[i + 1]);
        let mix = |x: u8, y: u8| -> u8 { (x as f64 + (y as f64 - x as f64) * f).round() as u8 };
        skia::Color::from_argb(255, mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
    }

    /// `n` colors skipping both extremes: samples at `(i + 1) / (n + 1)`.
    pub fn colors(&self, n: usize) -> Vec<skia::Color> {
        (0..n).map(|i| self.sample((i + 1) as f64 / (n + 1) as f64)).collect()
    }

    /// Default color cycle for line-like marks.
    pub fn cycle(&self) -> Vec<skia::Color> {
        self.colors(CYCLE_LEN)
    }
}

impl Default for Palette {
    fn default() -> Self { Palette::Viridis }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_match_anchors() {
        let p = Palette::Viridis;
        assert_eq!(p.sample(0.0), skia::Color::from_argb(255, 0x44, 0x01, 0x54));
        assert_eq!(p.sample(1.0), skia::Color::from_argb(255, 0xfd, 0xe7, 0x25));
    }

    #[test]
    fn colors_skip_extremes() {
        let p = Palette::Viridis;
        let c = p.colors(1);
        assert_eq!(c, vec![p.sample(0.5)]);
        let three = p.colors(3);
        assert_eq!(three.len(), 3);
        assert_ne!(three[0], p.sample(0.0));
        assert_eq!(p.cycle().len(), CYCLE_LEN);
    }
}
