// File: crates/chart-core/src/radar.rs
// Summary: Radar (polar) panel: evenly spaced spokes, ring ticks, closed outline with translucent fill.

use skia_safe as skia;
use std::f64::consts::TAU;

use crate::context::{fill_paint, stroke_paint, DrawContext, TICK_SIZE};
use crate::geometry::{polar_to_screen, RectF};
use crate::grid::{format_tick, linspace_open};
use crate::series::Series;
use crate::text::{HAlign, TextSpec, VAlign};

const RING_LABEL_SIZE: f32 = 8.0;
const MARKER_RADIUS: f32 = 3.0;
const LABEL_GAP: f32 = 10.0;

#[derive(Clone, Debug)]
pub struct RadarPanel {
    pub title: String,
    pub title_size: f32,
    /// Values on the radial scale `0..=r_max`.
    pub series: Series,
    pub r_max: f64,
    pub ring_ticks: Vec<f64>,
    pub color: Option<skia::Color>,
    pub fill_alpha: f32,
    pub line_width: f32,
}

impl RadarPanel {
    pub fn new(title: impl Into<String>, series: Series) -> Self {
        Self {
            title: title.into(),
            title_size: 16.0,
            series,
            r_max: 100.0,
            ring_ticks: vec![20.0, 40.0, 60.0, 80.0, 100.0],
            color: None,
            fill_alpha: 0.25,
            line_width: 2.0,
        }
    }

    pub fn with_rings(mut self, r_max: f64, ticks: Vec<f64>) -> Self {
        self.r_max = r_max;
        self.ring_ticks = ticks;
        self
    }

    /// Spoke angles in radians, counterclockwise from +x, starting at 0.
    pub fn angles(&self) -> Vec<f64> {
        linspace_open(0.0, TAU, self.series.len())
    }

    /// `(angle, value)` outline with the first point repeated at the end.
    pub fn closed_ring(&self) -> Vec<(f64, f64)> {
        let mut ring: Vec<(f64, f64)> = self.angles().into_iter().zip(self.series.values.iter().copied()).collect();
        if let Some(&first) = ring.first() {
            ring.push(first);
        }
        ring
    }

    /// Ring tick label, e.g. `"40%"`.
    pub fn ring_label(tick: f64) -> String {
        format!("{}%", format_tick(tick))
    }

    pub(crate) fn draw(&self, canvas: &skia::Canvas, cell: RectF, ctx: &DrawContext) {
        let title_h = ctx.panel_title(canvas, &cell, &self.title, self.title_size);
        let area = RectF::from_ltrb(cell.left, cell.top + title_h, cell.right, cell.bottom);
        let label_spec = TextSpec::new(TICK_SIZE, ctx.theme.text);
        let (lw, lh) = ctx.measure_max(self.series.labels.iter().map(String::as_str), &label_spec);
        let radius = ((area.width() * 0.5 - lw - LABEL_GAP).min(area.height() * 0.5 - lh - LABEL_GAP)).max(1.0);
        let center = area.center();
        let r_scale = |v: f64| -> f32 { (v / self.r_max.max(1e-12)) as f32 * radius };

        canvas.draw_circle(center, radius, &fill_paint(ctx.theme.panel_background, 1.0));
        let grid = stroke_paint(ctx.theme.grid, 1.0);
        for &t in &self.ring_ticks {
            canvas.draw_circle(center, r_scale(t), &grid);
        }
        let angles = self.angles();
        for &a in &angles {
            canvas.draw_line(center, polar_to_screen(center, radius, a), &grid);
        }
        if let Some(color) = ctx.theme.axis_line {
            canvas.draw_circle(center, radius, &stroke_paint(color, 1.0));
        }

        let ring_spec = TextSpec::new(RING_LABEL_SIZE, ctx.theme.ring_label).align(HAlign::Left, VAlign::Bottom);
        for &t in &self.ring_ticks {
            let (x, y) = polar_to_screen(center, r_scale(t), 0.0);
            ctx.text(canvas, &Self::ring_label(t), x + 2.0, y - 1.0, &ring_spec);
        }

        let ring = self.closed_ring();
        if ring.len() > 1 {
            let color = self.color.unwrap_or_else(|| ctx.primary());
            let mut path = skia::Path::new();
            for (i, &(a, v)) in ring.iter().enumerate() {
                let p = polar_to_screen(center, r_scale(v), a);
                if i == 0 { path.move_to(p); } else { path.line_to(p); }
            }
            path.close();
            canvas.draw_path(&path, &fill_paint(color, self.fill_alpha));
            canvas.draw_path(&path, &stroke_paint(color, self.line_width));
            let marker = fill_paint(color, 1.0);
            for &(a, v) in ring.iter().take(ring.len() - 1) {
                canvas.draw_circle(polar_to_screen(center, r_scale(v), a), MARKER_RADIUS, &marker);
            }
        }

        for (label, &a) in self.series.labels.iter().zip(&angles) {
            let (x, y) = polar_to_screen(center, radius + LABEL_GAP, a);
            let (c, s) = (a.cos(), a.sin());
            let h = if c > 0.1 { HAlign::Left } else if c < -0.1 { HAlign::Right } else { HAlign::Center };
            let v = if s > 0.1 { VAlign::Bottom } else if s < -0.1 { VAlign::Top } else { VAlign::Center };
            ctx.text(canvas, label, x, y, &label_spec.align(h, v));
        }
        log::debug!("radar panel '{}': {} spokes", self.title, angles.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_closes_on_first_point() {
        let s = Series::from_pairs([("a", 10.0), ("b", 20.0), ("c", 30.0), ("d", 40.0)]);
        let r = RadarPanel::new("t", s).closed_ring();
        assert_eq!(r.len(), 5);
        assert_eq!(r[0], r[4]);
        assert!((r[1].0 - TAU / 4.0).abs() < 1e-12);
    }

    #[test]
    fn empty_series_has_empty_ring() {
        assert!(RadarPanel::new("t", Series::default()).closed_ring().is_empty());
        assert_eq!(RadarPanel::ring_label(60.0), "60%");
    }
}
