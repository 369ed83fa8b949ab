// File: crates/chart-core/src/chart.rs
// Summary: Chart (figure of side-by-side panels) and headless PNG/RGBA rendering using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::bar::BarPanel;
use crate::context::DrawContext;
use crate::diagram::Diagram;
use crate::geometry::RectF;
use crate::palette::Palette;
use crate::pie::PiePanel;
use crate::radar::RadarPanel;
use crate::text::{HAlign, TextShaper, TextSpec, VAlign};
use crate::theme::Theme;
use crate::types::{FigureSize, Insets, DPI, POINTS_PER_INCH};

/// Figure padding and gaps, in points.
const FIGURE_PAD: f32 = 18.0;
const PANEL_GAP: f32 = 28.0;
const SUPTITLE_SIZE: f32 = 18.0;

/// Presentation settings shared by every chart in a run.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub dpi: f32,
    pub theme: Theme,
    pub palette: Palette,
    /// When false, no text is drawn (stable pixels across font setups).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dpi: DPI,
            theme: Theme::default(),
            palette: Palette::default(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// `n` colors from the configured palette.
    pub fn colors(&self, n: usize) -> Vec<skia::Color> {
        self.palette.colors(n)
    }
}

#[derive(Clone, Debug)]
pub enum Panel {
    Bar(BarPanel),
    Pie(PiePanel),
    Radar(RadarPanel),
    Diagram(Diagram),
}

impl From<BarPanel> for Panel {
    fn from(p: BarPanel) -> Self { Panel::Bar(p) }
}
impl From<PiePanel> for Panel {
    fn from(p: PiePanel) -> Self { Panel::Pie(p) }
}
impl From<RadarPanel> for Panel {
    fn from(p: RadarPanel) -> Self { Panel::Radar(p) }
}
impl From<Diagram> for Panel {
    fn from(p: Diagram) -> Self { Panel::Diagram(p) }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: Option<String>,
    pub size: FigureSize,
    pub panels: Vec<Panel>,
}

impl Chart {
    pub fn new(size: FigureSize) -> Self {
        Self { title: None, size, panels: Vec::new() }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_panel(&mut self, panel: impl Into<Panel>) {
        self.panels.push(panel.into());
    }

    /// Pixel dimensions at the resolution in `opts`.
    pub fn pixel_size(&self, opts: &RenderOptions) -> (i32, i32) {
        self.size.to_pixels(opts.dpi)
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        log::debug!("wrote {}", path.display());
        Ok(())
    }

    /// Render the chart and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, pixels)
            .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match {}x{}", w, h))?;
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)
            .map_err(|e| anyhow::anyhow!("encode PNG failed: {e}"))?;
        Ok(out.into_inner())
    }

    /// Render to an unpremultiplied RGBA8 buffer: (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.rasterize(opts)?;
        let (w, h) = self.pixel_size(opts);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back {}x{} pixels failed", w, h);
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    fn rasterize(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let (w, h) = self.pixel_size(opts);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface {}x{}", w, h))?;
        log::debug!("rendering {} panel(s) at {}x{} px ({} dpi)", self.panels.len(), w, h, opts.dpi);
        self.paint(surface.canvas(), opts);
        Ok(surface)
    }

    fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        canvas.clear(opts.theme.figure_background);
        canvas.save();
        let scale = opts.dpi / POINTS_PER_INCH;
        canvas.scale((scale, scale));

        let shaper = opts.draw_labels.then(TextShaper::new);
        let cycle = opts.palette.cycle();
        let ctx = DrawContext::new(&opts.theme, &cycle, shaper.as_ref());

        let (w_pt, h_pt) = self.size.to_points();
        let pad = Insets::new(FIGURE_PAD, FIGURE_PAD, FIGURE_PAD, FIGURE_PAD);
        let mut area = RectF::from_ltwh(0.0, 0.0, w_pt, h_pt).inset(&pad);

        if let Some(title) = &self.title {
            let spec = TextSpec::new(SUPTITLE_SIZE, opts.theme.title).align(HAlign::Center, VAlign::Top);
            let (_, th) = ctx.measure(title, &spec);
            ctx.text(canvas, title, area.center().0, area.top, &spec);
            area.top = (area.top + th + SUPTITLE_SIZE * 0.8).min(area.bottom);
        }

        let cells = area.split_columns(self.panels.len(), PANEL_GAP);
        for (panel, cell) in self.panels.iter().zip(cells) {
            match panel {
                Panel::Bar(p) => p.draw(canvas, cell, &ctx),
                Panel::Pie(p) => p.draw(canvas, cell, &ctx),
                Panel::Radar(p) => p.draw(canvas, cell, &ctx),
                Panel::Diagram(p) => p.draw(canvas, cell, &ctx),
            }
        }
        canvas.restore();
    }
}
