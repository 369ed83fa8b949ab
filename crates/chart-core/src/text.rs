// File: crates/chart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; multi-line blocks with anchor alignment.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

use crate::geometry::RectF;

/// Width used for the first, unconstrained layout pass.
const UNBOUNDED_WIDTH: f32 = 10_000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// How a piece of text looks and where it hangs relative to its anchor point.
#[derive(Clone, Copy, Debug)]
pub struct TextSpec {
    pub size: f32,
    pub color: skia::Color,
    pub bold: bool,
    pub h: HAlign,
    pub v: VAlign,
}

impl TextSpec {
    pub fn new(size: f32, color: skia::Color) -> Self {
        Self { size, color, bold: false, h: HAlign::Center, v: VAlign::Center }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn align(mut self, h: HAlign, v: VAlign) -> Self {
        self.h = h;
        self.v = v;
        self
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(spec: &TextSpec) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(spec.size.max(1.0));
        ts.set_color(spec.color);
        ts.set_font_families(&["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "sans-serif"]);
        if spec.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    /// Lay out `text` (may contain newlines); lines are aligned within the block per `spec.h`.
    pub fn layout(&self, text: &str, spec: &TextSpec) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(match spec.h {
            HAlign::Left => TextAlign::Left,
            HAlign::Center => TextAlign::Center,
            HAlign::Right => TextAlign::Right,
        });
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(spec);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(UNBOUNDED_WIDTH);
        // Second pass shrinks the box to the longest line so alignment applies inside the block.
        let width = paragraph.longest_line().ceil() + 1.0;
        paragraph.layout(width);
        paragraph
    }

    /// (width, height) of the laid out block.
    pub fn measure(&self, text: &str, spec: &TextSpec) -> (f32, f32) {
        let p = self.layout(text, spec);
        (p.longest_line(), p.height())
    }

    /// Draw `text` anchored at `(x, y)`; returns the occupied box.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, spec: &TextSpec) -> RectF {
        let mut p = self.layout(text, spec);
        let bounds = anchored_box(x, y, p.max_width(), p.height(), spec);
        p.paint(canvas, (bounds.left, bounds.top));
        bounds
    }

    /// Draw `text` rotated 90 degrees counterclockwise, centered at `(x, y)`.
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, spec: &TextSpec) {
        canvas.save();
        canvas.translate((x, y));
        canvas.rotate(-90.0, None);
        let centered = spec.align(HAlign::Center, VAlign::Center);
        self.draw(canvas, text, 0.0, 0.0, &centered);
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

fn anchored_box(x: f32, y: f32, w: f32, h: f32, spec: &TextSpec) -> RectF {
    let left = match spec.h {
        HAlign::Left => x,
        HAlign::Center => x - w * 0.5,
        HAlign::Right => x - w,
    };
    let top = match spec.v {
        VAlign::Top => y,
        VAlign::Center => y - h * 0.5,
        VAlign::Bottom => y - h,
    };
    RectF::from_ltwh(left, top, w, h)
}
