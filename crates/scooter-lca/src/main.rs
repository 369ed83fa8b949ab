// File: crates/scooter-lca/src/main.rs
// Summary: Renders every LCA chart into results/ and its table into data/ under the project root.

use anyhow::Result;
use chart_core::RenderOptions;
use scooter_lca::OutputLayout;

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let layout = OutputLayout::default();
    let opts = RenderOptions::default();
    scooter_lca::run_all(&layout, &opts)?;

    println!("All visualizations created successfully!");
    println!("Results saved to: {}", layout.results_path().display());
    println!("Data saved to: {}", layout.data_path().display());
    Ok(())
}
