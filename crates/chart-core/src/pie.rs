// File: crates/chart-core/src/pie.rs
// Summary: Pie panel; counterclockwise wedges from a start angle with percent and category labels.

use skia_safe as skia;

use crate::context::{fill_paint, DrawContext, TICK_SIZE, TITLE_SIZE};
use crate::geometry::{polar_to_screen, RectF};
use crate::series::Series;
use crate::text::{HAlign, TextSpec, VAlign};

/// Radius fractions for percent labels and category labels.
const PCT_DISTANCE: f32 = 0.6;
const LABEL_DISTANCE: f32 = 1.1;
/// Share of the available half-extent used by the pie radius (rest holds labels).
const RADIUS_FILL: f32 = 0.72;

/// One wedge in math orientation: degrees counterclockwise from +x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wedge {
    pub start_deg: f64,
    pub sweep_deg: f64,
    pub fraction: f64,
}

impl Wedge {
    pub fn mid_rad(&self) -> f64 {
        (self.start_deg + self.sweep_deg * 0.5).to_radians()
    }
}

#[derive(Clone, Debug)]
pub struct PiePanel {
    pub title: String,
    pub series: Series,
    pub colors: Vec<skia::Color>,
    /// Angle of the first wedge's leading edge, degrees counterclockwise from +x.
    pub start_angle: f64,
    pub pct_decimals: usize,
    pub pct_size: f32,
    pub pct_bold: bool,
}

impl PiePanel {
    pub fn new(title: impl Into<String>, series: Series) -> Self {
        Self {
            title: title.into(),
            series,
            colors: Vec::new(),
            start_angle: 90.0,
            pct_decimals: 1,
            pct_size: TICK_SIZE,
            pct_bold: false,
        }
    }

    pub fn with_colors(mut self, colors: Vec<skia::Color>) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_start_angle(mut self, degrees: f64) -> Self {
        self.start_angle = degrees;
        self
    }

    /// Style of the in-wedge percent labels.
    pub fn with_pct_style(mut self, size: f32, bold: bool) -> Self {
        self.pct_size = size;
        self.pct_bold = bold;
        self
    }

    /// Wedge geometry; empty when the total is not positive.
    pub fn wedges(&self) -> Vec<Wedge> {
        let total = self.series.total();
        if !(total > 0.0) {
            return Vec::new();
        }
        let mut start = self.start_angle;
        self.series
            .values
            .iter()
            .map(|v| {
                let fraction = v.max(0.0) / total;
                let w = Wedge { start_deg: start, sweep_deg: fraction * 360.0, fraction };
                start += w.sweep_deg;
                w
            })
            .collect()
    }

    /// Percent label text for a wedge, e.g. `"43.2%"`.
    pub fn pct_label(&self, wedge: &Wedge) -> String {
        format!("{:.*}%", self.pct_decimals, wedge.fraction * 100.0)
    }

    pub(crate) fn draw(&self, canvas: &skia::Canvas, cell: RectF, ctx: &DrawContext) {
        let title_h = ctx.panel_title(canvas, &cell, &self.title, TITLE_SIZE);
        let area = RectF::from_ltrb(cell.left, cell.top + title_h, cell.right, cell.bottom);
        let center = area.center();
        let radius = (area.width().min(area.height()) * 0.5 * RADIUS_FILL).max(1.0);
        let oval = skia::Rect::from_ltrb(center.0 - radius, center.1 - radius, center.0 + radius, center.1 + radius);

        let wedges = self.wedges();
        for (i, w) in wedges.iter().enumerate() {
            let color = self
                .colors
                .get(i)
                .or_else(|| ctx.cycle.get(i % ctx.cycle.len().max(1)))
                .copied()
                .unwrap_or(ctx.theme.text);
            let paint = fill_paint(color, 1.0);
            if w.fraction >= 1.0 - 1e-12 {
                canvas.draw_circle(center, radius, &paint);
            } else if w.sweep_deg > 0.0 {
                // Skia angles run clockwise on screen; negate for counterclockwise wedges.
                let mut path = skia::Path::new();
                path.move_to(center);
                path.arc_to(oval, -w.start_deg as f32, -w.sweep_deg as f32, false);
                path.close();
                canvas.draw_path(&path, &paint);
            }
        }

        for (i, w) in wedges.iter().enumerate() {
            let mid = w.mid_rad();
            let mut pct_spec = TextSpec::new(self.pct_size, ctx.theme.text);
            if self.pct_bold {
                pct_spec = pct_spec.bold();
            }
            let (px, py) = polar_to_screen(center, radius * PCT_DISTANCE, mid);
            ctx.text(canvas, &self.pct_label(w), px, py, &pct_spec);

            if let Some(label) = self.series.labels.get(i) {
                let (lx, ly) = polar_to_screen(center, radius * LABEL_DISTANCE, mid);
                let h = if mid.cos() >= 0.0 { HAlign::Left } else { HAlign::Right };
                let spec = TextSpec::new(TICK_SIZE, ctx.theme.text).align(h, VAlign::Center);
                ctx.text(canvas, label, lx, ly, &spec);
            }
        }
        log::debug!("pie panel '{}': {} wedges", self.title, wedges.len());
    }
}
