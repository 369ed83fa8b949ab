// File: crates/chart-core/src/diagram.rs
// Summary: Schematic panel; boxes, arrows, discs and notes placed in equal-aspect world coordinates.

use skia_safe as skia;

use crate::context::{draw_arrow_head, fill_paint, stroke_paint, DrawContext, TITLE_SIZE};
use crate::geometry::RectF;
use crate::text::TextSpec;

const EDGE_WIDTH: f32 = 1.0;
const ARROW_HEAD: f32 = 8.0;

/// World-space point (Y up).
pub type Pt = (f64, f64);

#[derive(Clone, Debug)]
pub enum Shape {
    /// Filled rectangle with a black edge and a bold centered label.
    Box { center: Pt, size: (f64, f64), fill: skia::Color, alpha: f32, label: String, font_size: f32 },
    /// Straight arrow with an open head at `to`.
    Arrow { from: Pt, to: Pt, width: f32 },
    /// Quadratic Bezier arrow through `control`, open head at `to`.
    CurvedArrow { from: Pt, control: Pt, to: Pt, width: f32 },
    /// Filled circle with a black edge.
    Disc { center: Pt, radius: f64, fill: skia::Color, alpha: f32 },
    /// Centered text, optionally inside a rounded translucent white box.
    Note { at: Pt, text: String, font_size: f32, bold: bool, boxed: bool },
}

#[derive(Clone, Debug)]
pub struct Diagram {
    pub title: String,
    pub title_size: f32,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub shapes: Vec<Shape>,
}

/// World-to-screen transform with a single scale for both axes.
#[derive(Clone, Copy, Debug)]
struct WorldMap {
    scale: f32,
    origin: (f32, f32),
    x0: f64,
    y1: f64,
}

impl WorldMap {
    fn fit(area: &RectF, x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        let xs = (x_range.1 - x_range.0).abs().max(1e-9);
        let ys = (y_range.1 - y_range.0).abs().max(1e-9);
        let scale = (area.width() / xs as f32).min(area.height() / ys as f32);
        let used = (xs as f32 * scale, ys as f32 * scale);
        let origin = (
            area.left + (area.width() - used.0) * 0.5,
            area.top + (area.height() - used.1) * 0.5,
        );
        Self { scale, origin, x0: x_range.0.min(x_range.1), y1: y_range.0.max(y_range.1) }
    }

    fn pt(&self, p: Pt) -> (f32, f32) {
        (
            self.origin.0 + ((p.0 - self.x0) as f32) * self.scale,
            self.origin.1 + ((self.y1 - p.1) as f32) * self.scale,
        )
    }

    fn len(&self, d: f64) -> f32 {
        d as f32 * self.scale
    }
}

impl Diagram {
    pub fn new(title: impl Into<String>, x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        Self { title: title.into(), title_size: TITLE_SIZE, x_range, y_range, shapes: Vec::new() }
    }

    pub fn with_title_size(mut self, size: f32) -> Self {
        self.title_size = size;
        self
    }

    pub fn push(&mut self, shape: Shape) -> &mut Self {
        self.shapes.push(shape);
        self
    }

    pub fn count<F: Fn(&Shape) -> bool>(&self, pred: F) -> usize {
        self.shapes.iter().filter(|s| pred(s)).count()
    }

    pub(crate) fn draw(&self, canvas: &skia::Canvas, cell: RectF, ctx: &DrawContext) {
        let title_h = ctx.panel_title(canvas, &cell, &self.title, self.title_size);
        let area = RectF::from_ltrb(cell.left, cell.top + title_h, cell.right, cell.bottom);
        let map = WorldMap::fit(&area, self.x_range, self.y_range);
        let edge = stroke_paint(ctx.theme.edge, EDGE_WIDTH);

        for shape in &self.shapes {
            match shape {
                Shape::Box { center, size, fill, alpha, label, font_size } => {
                    let (cx, cy) = map.pt(*center);
                    let (hw, hh) = (map.len(size.0) * 0.5, map.len(size.1) * 0.5);
                    let rect = skia::Rect::from_ltrb(cx - hw, cy - hh, cx + hw, cy + hh);
                    canvas.draw_rect(rect, &fill_paint(*fill, *alpha));
                    canvas.draw_rect(rect, &edge);
                    let spec = TextSpec::new(*font_size, ctx.theme.text).bold();
                    ctx.text(canvas, label, cx, cy, &spec);
                }
                Shape::Arrow { from, to, width } => {
                    let (a, b) = (map.pt(*from), map.pt(*to));
                    let paint = stroke_paint(ctx.theme.edge, *width);
                    canvas.draw_line(a, b, &paint);
                    draw_arrow_head(canvas, b, (b.0 - a.0, b.1 - a.1), ARROW_HEAD, &paint);
                }
                Shape::CurvedArrow { from, control, to, width } => {
                    let (a, c, b) = (map.pt(*from), map.pt(*control), map.pt(*to));
                    let paint = stroke_paint(ctx.theme.edge, *width);
                    let mut path = skia::Path::new();
                    path.move_to(a);
                    path.quad_to(c, b);
                    canvas.draw_path(&path, &paint);
                    // tangent at the end of a quadratic is (end - control)
                    draw_arrow_head(canvas, b, (b.0 - c.0, b.1 - c.1), ARROW_HEAD, &paint);
                }
                Shape::Disc { center, radius, fill, alpha } => {
                    let c = map.pt(*center);
                    let r = map.len(*radius);
                    canvas.draw_circle(c, r, &fill_paint(*fill, *alpha));
                    canvas.draw_circle(c, r, &edge);
                }
                Shape::Note { at, text, font_size, bold, boxed } => {
                    let (x, y) = map.pt(*at);
                    let mut spec = TextSpec::new(*font_size, ctx.theme.text);
                    if *bold {
                        spec = spec.bold();
                    }
                    if *boxed && ctx.labels_enabled() {
                        let (w, h) = ctx.measure(text, &spec);
                        let pad = font_size * 0.5;
                        let rect = skia::Rect::from_ltrb(x - w * 0.5 - pad, y - h * 0.5 - pad, x + w * 0.5 + pad, y + h * 0.5 + pad);
                        canvas.draw_round_rect(rect, pad, pad, &fill_paint(ctx.theme.figure_background, 0.7));
                        canvas.draw_round_rect(rect, pad, pad, &edge);
                    }
                    ctx.text(canvas, text, x, y, &spec);
                }
            }
        }
        log::debug!("diagram '{}': {} shapes", self.title, self.shapes.len());
    }
}
