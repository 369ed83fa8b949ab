// File: crates/scooter-lca/src/reports/mod.rs
// Summary: Report trait, publishing (image then table), and the fixed report sequence.

use anyhow::{Context, Result};
use chart_core::{Chart, RenderOptions};

use crate::layout::OutputLayout;
use crate::table::{Cell, Table};

pub mod components;
pub mod economy;
pub mod emissions;
pub mod impacts;
pub mod lifecycle;
pub mod lifespan;

pub use components::{ComponentEmissions, SliceOrder, COMPONENT_PIE_ORDER};
pub use economy::CircularVsLinear;
pub use emissions::EmissionsComparison;
pub use impacts::ImpactCategories;
pub use lifecycle::LifecycleEmissions;
pub use lifespan::LifespanSensitivity;

/// One chart plus (usually) the table behind it.
pub trait Report {
    /// File stem shared by `results/<id>.png` and `data/<id>.csv`.
    fn id(&self) -> &'static str;
    fn chart(&self, opts: &RenderOptions) -> Chart;
    /// Dataset persisted next to the chart; `None` for purely illustrative charts.
    fn table(&self) -> Option<Table> {
        None
    }
}

/// Render `report` into `results/`, then save its table into `data/`.
pub fn publish(report: &dyn Report, layout: &OutputLayout, opts: &RenderOptions) -> Result<Chart> {
    log::info!("rendering {}", report.id());
    let chart = report.chart(opts);
    layout.save_chart(&chart, opts, &format!("{}.png", report.id()))?;
    if let Some(table) = report.table() {
        layout
            .save_table(&table, &format!("{}.csv", report.id()))
            .with_context(|| format!("saving table for {}", report.id()))?;
    }
    Ok(chart)
}

/// All reports in their publishing order.
pub fn all() -> Vec<Box<dyn Report>> {
    vec![
        Box::new(EmissionsComparison::new()),
        Box::new(ComponentEmissions::new()),
        Box::new(LifecycleEmissions::new()),
        Box::new(ImpactCategories::new()),
        Box::new(LifespanSensitivity::new()),
        Box::new(CircularVsLinear),
    ]
}

/// Publish every report in order; the first failure stops the run.
pub fn run_all(layout: &OutputLayout, opts: &RenderOptions) -> Result<Vec<Chart>> {
    all().iter().map(|r| publish(r.as_ref(), layout, opts)).collect()
}

/// Float text the way a bar label shows a raw value: `51.0`, `29.5`, `39.27`.
pub(crate) fn plain_number(v: f64) -> String {
    Cell::Number(v).to_string()
}
