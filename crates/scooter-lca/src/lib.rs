// File: crates/scooter-lca/src/lib.rs
// Summary: Shared e-scooter LCA reports; literal datasets rendered to PNG charts and CSV tables.

pub mod dataset;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod reports;
pub mod table;

pub use error::TableError;
pub use layout::OutputLayout;
pub use reports::{publish, Report};
pub use table::{Cell, Table};

use anyhow::Result;
use chart_core::RenderOptions;

/// Publish every report under `layout`, in order.
pub fn run_all(layout: &OutputLayout, opts: &RenderOptions) -> Result<()> {
    let charts = reports::run_all(layout, opts)?;
    log::info!("published {} charts under {}", charts.len(), layout.root().display());
    Ok(())
}
