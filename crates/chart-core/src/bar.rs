// File: crates/chart-core/src/bar.rs
// Summary: Vertical and horizontal bar panels with gridlines, ticks and per-bar value labels.

use skia_safe as skia;

use crate::axis::Axis;
use crate::context::{fill_paint, stroke_paint, DrawContext, AXIS_LABEL_SIZE, TICK_SIZE, TITLE_SIZE};
use crate::geometry::RectF;
use crate::grid::format_tick;
use crate::scale::{BandScale, ValueScale};
use crate::series::Series;
use crate::text::{HAlign, TextSpec, VAlign};
use crate::types::Insets;

/// Fraction of each category band filled by its bar.
const BAR_FRACTION: f32 = 0.8;
/// Approximate number of value ticks.
const TICK_TARGET: usize = 6;
const PAD: f32 = 6.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Categories along X, first at the left.
    Vertical,
    /// Categories along Y, first at the bottom.
    Horizontal,
}

#[derive(Clone, Debug)]
pub struct BarPanel {
    pub title: String,
    pub orientation: Orientation,
    pub series: Series,
    pub colors: Vec<skia::Color>,
    pub axis: Axis,
    /// One label per bar, drawn past the bar end; empty means none.
    pub value_labels: Vec<String>,
    /// Distance in data units between the bar end and its value label.
    pub label_offset: f64,
}

impl BarPanel {
    pub fn new(orientation: Orientation, title: impl Into<String>, series: Series, value_label: impl Into<String>) -> Self {
        let axis = Axis::fit(value_label, &series.values);
        Self {
            title: title.into(),
            orientation,
            series,
            colors: Vec::new(),
            axis,
            value_labels: Vec::new(),
            label_offset: 0.0,
        }
    }

    pub fn vertical(title: impl Into<String>, series: Series, value_label: impl Into<String>) -> Self {
        Self::new(Orientation::Vertical, title, series, value_label)
    }

    pub fn horizontal(title: impl Into<String>, series: Series, value_label: impl Into<String>) -> Self {
        Self::new(Orientation::Horizontal, title, series, value_label)
    }

    pub fn with_colors(mut self, colors: Vec<skia::Color>) -> Self {
        self.colors = colors;
        self
    }

    /// Fix the value axis range instead of fitting it to the data.
    pub fn with_limits(mut self, min: f64, max: f64) -> Self {
        self.axis.min = min;
        self.axis.max = max;
        self
    }

    pub fn with_value_labels(mut self, labels: Vec<String>, offset: f64) -> Self {
        self.value_labels = labels;
        self.label_offset = offset;
        self
    }

    fn color(&self, i: usize, ctx: &DrawContext) -> skia::Color {
        self.colors
            .get(i)
            .or_else(|| ctx.cycle.get(i % ctx.cycle.len().max(1)))
            .copied()
            .unwrap_or(ctx.theme.text)
    }

    pub(crate) fn draw(&self, canvas: &skia::Canvas, cell: RectF, ctx: &DrawContext) {
        let title_h = ctx.panel_title(canvas, &cell, &self.title, TITLE_SIZE);
        let area = RectF::from_ltrb(cell.left, cell.top + title_h, cell.right, cell.bottom);

        let tick_spec = TextSpec::new(TICK_SIZE, ctx.theme.tick);
        let label_spec = TextSpec::new(AXIS_LABEL_SIZE, ctx.theme.axis_label);
        let ticks = self.axis.ticks(TICK_TARGET);
        let tick_text: Vec<String> = ticks.iter().map(|t| format_tick(*t)).collect();
        let (tick_w, tick_h) = ctx.measure_max(tick_text.iter().map(String::as_str), &tick_spec);
        let (cat_w, cat_h) = ctx.measure_max(self.series.labels.iter().map(String::as_str), &tick_spec);
        let (_, axis_h) = ctx.measure(&self.axis.label, &label_spec);

        let insets = match self.orientation {
            Orientation::Vertical => Insets::new(tick_w + axis_h + 3.0 * PAD, PAD, PAD, cat_h + 2.0 * PAD),
            Orientation::Horizontal => Insets::new(cat_w + 2.0 * PAD, 3.0 * PAD, PAD, tick_h + axis_h + 3.0 * PAD),
        };
        let plot = area.inset(&insets);

        canvas.draw_rect(plot.to_skia(), &fill_paint(ctx.theme.panel_background, 1.0));
        let grid = stroke_paint(ctx.theme.grid, 1.0);
        let n = self.series.len();

        match self.orientation {
            Orientation::Vertical => {
                let vs = ValueScale::vertical(plot.top, plot.bottom, self.axis.min, self.axis.max);
                let band = BandScale::new(plot.left, plot.right, n);
                for (t, text) in ticks.iter().zip(&tick_text) {
                    let y = vs.to_px(*t);
                    canvas.draw_line((plot.left, y), (plot.right, y), &grid);
                    let spec = tick_spec.align(HAlign::Right, VAlign::Center);
                    ctx.text(canvas, text, plot.left - PAD, y, &spec);
                }
                for (i, label) in self.series.labels.iter().enumerate() {
                    let x = band.center(i);
                    canvas.draw_line((x, plot.top), (x, plot.bottom), &grid);
                    let spec = tick_spec.align(HAlign::Center, VAlign::Top);
                    ctx.text(canvas, label, x, plot.bottom + PAD, &spec);
                }
                ctx.text_vertical(canvas, &self.axis.label, plot.left - tick_w - 2.0 * PAD - axis_h * 0.5, plot.center().1, &label_spec);
                self.draw_axis_lines(canvas, &plot, ctx);

                let base = vs.to_px(0.0f64.max(self.axis.min).min(self.axis.max));
                let half = band.bar_width(BAR_FRACTION).abs() * 0.5;
                canvas.save();
                canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
                for (i, v) in self.series.values.iter().enumerate() {
                    let x = band.center(i);
                    let top = vs.to_px(*v);
                    let rect = skia::Rect::from_ltrb(x - half, top.min(base), x + half, top.max(base));
                    canvas.draw_rect(rect, &fill_paint(self.color(i, ctx), 1.0));
                }
                canvas.restore();

                for (i, (v, text)) in self.series.values.iter().zip(&self.value_labels).enumerate() {
                    let y = vs.to_px(v + self.label_offset);
                    let spec = TextSpec::new(TICK_SIZE, ctx.theme.text).align(HAlign::Center, VAlign::Bottom);
                    ctx.text(canvas, text, band.center(i), y, &spec);
                }
            }
            Orientation::Horizontal => {
                let vs = ValueScale::new_linear(plot.left, plot.right, self.axis.min, self.axis.max);
                let band = BandScale::new(plot.bottom, plot.top, n);
                for (t, text) in ticks.iter().zip(&tick_text) {
                    let x = vs.to_px(*t);
                    canvas.draw_line((x, plot.top), (x, plot.bottom), &grid);
                    let spec = tick_spec.align(HAlign::Center, VAlign::Top);
                    ctx.text(canvas, text, x, plot.bottom + PAD, &spec);
                }
                for (i, label) in self.series.labels.iter().enumerate() {
                    let y = band.center(i);
                    canvas.draw_line((plot.left, y), (plot.right, y), &grid);
                    let spec = tick_spec.align(HAlign::Right, VAlign::Center);
                    ctx.text(canvas, label, plot.left - PAD, y, &spec);
                }
                let spec = label_spec.align(HAlign::Center, VAlign::Top);
                ctx.text(canvas, &self.axis.label, plot.center().0, plot.bottom + tick_h + 2.0 * PAD, &spec);
                self.draw_axis_lines(canvas, &plot, ctx);

                let base = vs.to_px(0.0f64.max(self.axis.min).min(self.axis.max));
                let half = band.bar_width(BAR_FRACTION).abs() * 0.5;
                canvas.save();
                canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
                for (i, v) in self.series.values.iter().enumerate() {
                    let y = band.center(i);
                    let end = vs.to_px(*v);
                    let rect = skia::Rect::from_ltrb(end.min(base), y - half, end.max(base), y + half);
                    canvas.draw_rect(rect, &fill_paint(self.color(i, ctx), 1.0));
                }
                canvas.restore();

                for (i, (v, text)) in self.series.values.iter().zip(&self.value_labels).enumerate() {
                    let x = vs.to_px(v + self.label_offset);
                    let spec = TextSpec::new(TICK_SIZE, ctx.theme.text).align(HAlign::Left, VAlign::Center);
                    ctx.text(canvas, text, x, band.center(i), &spec);
                }
            }
        }
        log::debug!("bar panel '{}': {} bars, axis {}..{}", self.title, n, self.axis.min, self.axis.max);
    }

    fn draw_axis_lines(&self, canvas: &skia::Canvas, plot: &RectF, ctx: &DrawContext) {
        if let Some(color) = ctx.theme.axis_line {
            let p = stroke_paint(color, 1.0);
            canvas.draw_line((plot.left, plot.bottom), (plot.right, plot.bottom), &p);
            canvas.draw_line((plot.left, plot.top), (plot.left, plot.bottom), &p);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_override_fitted_axis() {
        let s = Series::from_pairs([("a", 10.0), ("b", 20.0)]);
        let p = BarPanel::vertical("t", s.clone(), "pct");
        assert!((p.axis.max - 21.0).abs() < 1e-9);
        let fixed = BarPanel::vertical("t", s, "pct").with_limits(0.0, 100.0);
        assert_eq!((fixed.axis.min, fixed.axis.max), (0.0, 100.0));
    }
}
