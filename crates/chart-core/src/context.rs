// File: crates/chart-core/src/context.rs
// Summary: Per-render drawing context (theme, color cycle, optional text) and shared paint helpers.

use skia_safe as skia;

use crate::geometry::RectF;
use crate::text::{HAlign, TextShaper, TextSpec, VAlign};
use crate::theme::Theme;

/// Matplotlib-like default font sizes, in points.
pub const TICK_SIZE: f32 = 10.0;
pub const AXIS_LABEL_SIZE: f32 = 12.0;
pub const TITLE_SIZE: f32 = 14.0;

/// Everything a panel needs while drawing. Text is `None` when labels are disabled.
pub struct DrawContext<'a> {
    pub theme: &'a Theme,
    pub cycle: &'a [skia::Color],
    text: Option<&'a TextShaper>,
}

impl<'a> DrawContext<'a> {
    pub fn new(theme: &'a Theme, cycle: &'a [skia::Color], text: Option<&'a TextShaper>) -> Self {
        Self { theme, cycle, text }
    }

    pub fn labels_enabled(&self) -> bool {
        self.text.is_some()
    }

    /// First cycle color, or the theme text color when the cycle is empty.
    pub fn primary(&self) -> skia::Color {
        self.cycle.first().copied().unwrap_or(self.theme.text)
    }

    pub fn text(&self, canvas: &skia::Canvas, s: &str, x: f32, y: f32, spec: &TextSpec) -> Option<RectF> {
        self.text.map(|t| t.draw(canvas, s, x, y, spec))
    }

    pub fn text_vertical(&self, canvas: &skia::Canvas, s: &str, x: f32, y: f32, spec: &TextSpec) {
        if let Some(t) = self.text {
            t.draw_vertical(canvas, s, x, y, spec);
        }
    }

    /// (width, height) of `s`; zero when labels are disabled.
    pub fn measure(&self, s: &str, spec: &TextSpec) -> (f32, f32) {
        match self.text {
            Some(t) if !s.is_empty() => t.measure(s, spec),
            _ => (0.0, 0.0),
        }
    }

    /// Largest width/height over several strings.
    pub fn measure_max<'s, I>(&self, items: I, spec: &TextSpec) -> (f32, f32)
    where
        I: IntoIterator<Item = &'s str>,
    {
        items.into_iter().fold((0.0f32, 0.0f32), |(w, h), s| {
            let (sw, sh) = self.measure(s, spec);
            (w.max(sw), h.max(sh))
        })
    }

    /// Draw a panel title centered at the top of `cell`; returns the height consumed.
    pub fn panel_title(&self, canvas: &skia::Canvas, cell: &RectF, title: &str, size: f32) -> f32 {
        if title.is_empty() {
            return 0.0;
        }
        let spec = TextSpec::new(size, self.theme.title).align(HAlign::Center, VAlign::Top);
        let (_, h) = self.measure(title, &spec);
        self.text(canvas, title, cell.center().0, cell.top, &spec);
        if h > 0.0 { h + size * 0.6 } else { 0.0 }
    }
}

pub fn fill_paint(color: skia::Color, alpha: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Fill);
    p.set_color(color);
    p.set_alpha_f(alpha.clamp(0.0, 1.0) * (color.a() as f32 / 255.0));
    p
}

pub fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p.set_color(color);
    p
}

/// Open "->" arrow head at `tip`, pointing along `dir` (need not be normalized).
pub fn draw_arrow_head(canvas: &skia::Canvas, tip: (f32, f32), dir: (f32, f32), size: f32, paint: &skia::Paint) {
    let len = (dir.0 * dir.0 + dir.1 * dir.1).sqrt();
    if len < f32::EPSILON {
        return;
    }
    let (ux, uy) = (dir.0 / len, dir.1 / len);
    // wings at +/- 25 degrees off the reversed direction
    let (s, c) = 25f32.to_radians().sin_cos();
    let back = (-ux, -uy);
    let w1 = (back.0 * c - back.1 * s, back.0 * s + back.1 * c);
    let w2 = (back.0 * c + back.1 * s, -back.0 * s + back.1 * c);
    canvas.draw_line(tip, (tip.0 + w1.0 * size, tip.1 + w1.1 * size), paint);
    canvas.draw_line(tip, (tip.0 + w2.0 * size, tip.1 + w2.1 * size), paint);
}
