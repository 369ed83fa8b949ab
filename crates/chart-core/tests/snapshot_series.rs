// File: crates/chart-core/tests/snapshot_series.rs
// Purpose: Golden snapshots for the other panel kinds: horizontal bars, pie, radar, diagram.

use chart_core::{BarPanel, Chart, Color, Diagram, FigureSize, Panel, PiePanel, RadarPanel, RenderOptions, Series, Shape};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn in_ci() -> bool {
    std::env::var_os("CI").is_some()
}

/// True when some pixel differs from the top-left (background) pixel.
fn has_ink(img: &image::RgbaImage) -> bool {
    let bg = *img.get_pixel(0, 0);
    img.pixels().any(|p| *p != bg)
}

// Bless on UPDATE_SNAPSHOTS=1, or when the golden is missing outside CI; then
// always compare a fresh render against the golden on disk.
fn write_or_compare(path: &std::path::Path, render: impl Fn() -> Vec<u8>) {
    let bytes = render();
    let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
    assert!(has_ink(&got_img), "render is blank: {}", path.display());

    if bless_mode() || (!path.exists() && !in_ci()) {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).expect("create snapshots dir"); }
        std::fs::write(path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Wrote {} ({} bytes)", path.display(), bytes.len());
    }
    let want = std::fs::read(path)
        .unwrap_or_else(|_| panic!("missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless", path.display()));
    let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
    let again = image::load_from_memory(&render()).expect("decode again").to_rgba8();
    assert_eq!(again.dimensions(), want_img.dimensions(), "size differs: {}", path.display());
    assert_eq!(again.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
}

fn render_to_bytes(panel: impl Into<Panel>) -> Vec<u8> {
    let mut chart = Chart::new(FigureSize::new(4.0, 3.0));
    chart.add_panel(panel);

    let mut opts = RenderOptions::default();
    opts.dpi = 50.0;
    opts.draw_labels = false; // deterministic
    chart.render_to_png_bytes(&opts).expect("render bytes")
}

fn components() -> Series {
    Series::from_pairs([("a", 89.2), ("b", 54.7), ("c", 21.1), ("d", 15.0), ("e", 6.6)])
}

fn snapshot(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

#[test]
fn golden_horizontal_bars() {
    let panel = BarPanel::horizontal("", components(), "");
    write_or_compare(&snapshot("hbars.png"), || render_to_bytes(panel.clone()));
}

#[test]
fn golden_pie() {
    let panel = PiePanel::new("", components());
    write_or_compare(&snapshot("pie.png"), || render_to_bytes(panel.clone()));
}

#[test]
fn golden_radar() {
    let series = Series::from_pairs([("a", 93.0), ("b", 69.5), ("c", 55.8), ("d", 84.3), ("e", 82.7), ("f", 81.9)]);
    let panel = RadarPanel::new("", series);
    write_or_compare(&snapshot("radar.png"), || render_to_bytes(panel.clone()));
}

#[test]
fn golden_diagram() {
    let mut d = Diagram::new("", (-1.6, 1.6), (-1.6, 1.6));
    for (i, color) in [Color::from_rgb(0xFF, 0x6B, 0x6B), Color::from_rgb(0x4E, 0xCD, 0xC4), Color::from_rgb(0x06, 0xD6, 0xA0)].into_iter().enumerate() {
        let a = i as f64 * std::f64::consts::TAU / 3.0;
        d.push(Shape::Box { center: (a.cos(), a.sin()), size: (0.5, 0.3), fill: color, alpha: 0.8, label: String::new(), font_size: 9.0 });
    }
    d.push(Shape::Disc { center: (0.0, 0.0), radius: 0.4, fill: Color::WHITE, alpha: 0.9 });
    write_or_compare(&snapshot("diagram.png"), || render_to_bytes(d.clone()));
}
