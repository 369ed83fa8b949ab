// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and background pixels.

use chart_core::{BarPanel, Chart, FigureSize, RenderOptions, Series, Theme};

fn chart() -> Chart {
    let mut chart = Chart::new(FigureSize::new(4.0, 3.0));
    chart.add_panel(BarPanel::vertical("", Series::from_pairs([("x", 1.0), ("y", 2.0)]), ""));
    chart
}

#[test]
fn render_rgba8_buffer() {
    let mut opts = RenderOptions::default();
    opts.dpi = 40.0;
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart().render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (160, 120));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is figure background: opaque white for ggplot
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn theme_background_reaches_corner() {
    let mut opts = RenderOptions::default();
    opts.dpi = 20.0;
    opts.draw_labels = false;
    opts.theme = Theme::dark();
    let (px, _, _, _) = chart().render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(&px[0..4], &[18, 18, 20, 255]);
}
