// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small bar chart to PNG bytes (labels off).
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - A missing snapshot is written on a local run and is a failure under CI.
// - A fresh render is then compared with the snapshot, pixel for pixel.

use chart_core::{BarPanel, Chart, FigureSize, RenderOptions, Series};

fn render_bytes() -> Vec<u8> {
    let mut chart = Chart::new(FigureSize::new(4.0, 3.0));
    chart.add_panel(
        BarPanel::vertical("", Series::from_pairs([("a", 29.5), ("b", 51.0), ("c", 257.0)]), "")
            .with_colors(RenderOptions::default().colors(3)),
    );

    let mut opts = RenderOptions::default();
    opts.dpi = 50.0;
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    chart.render_to_png_bytes(&opts).expect("render bytes")
}

#[test]
fn golden_basic_chart() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("basic_bars.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    let in_ci = std::env::var_os("CI").is_some();

    if update || (!snap_path.exists() && !in_ci) {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Wrote {} ({} bytes)", snap_path.display(), bytes.len());
    }

    let want = std::fs::read(&snap_path)
        .unwrap_or_else(|_| panic!("missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless", snap_path.display()));
    // Compare decoded pixel buffers to avoid PNG encoder variance
    let got_img = image::load_from_memory(&render_bytes()).expect("decode got").to_rgba8();
    let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
    assert_eq!(got_img.dimensions(), (200, 150));
    assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());

    // the tallest bar (viridis tail, yellow-green) must show up somewhere
    let bars = RenderOptions::default().colors(3);
    let tail = bars[2];
    assert!(
        got_img.pixels().any(|p| p.0 == [tail.r(), tail.g(), tail.b(), 255]),
        "bar color missing from render"
    );
}
