use anyhow::Result;
use chart_core::{BarPanel, Chart, FigureSize, PiePanel, RenderOptions, Series};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart(n: usize) -> Chart {
    let series = Series::from_pairs((0..n).map(|i| (format!("c{i}"), 1.0 + (i as f64 * 0.7).sin().abs() * 10.0)));
    let mut ch = Chart::new(FigureSize::new(12.0, 8.0));
    ch.add_panel(BarPanel::vertical("Bars", series.clone(), "Value"));
    ch.add_panel(PiePanel::new("Pie", series));
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &dpi in &[72.0f32, 150.0f32] {
        group.bench_function(format!("bar_pie_{dpi}dpi"), |b| {
            let ch = build_chart(8);
            let mut opts = RenderOptions::default();
            opts.dpi = dpi;
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
