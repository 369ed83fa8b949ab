// File: crates/scooter-lca/src/reports/lifecycle.rs
// Summary: Emissions per lifecycle phase from reported shares of a reported total.

use chart_core::{BarPanel, Chart, FigureSize, PiePanel, RenderOptions, Series};

use super::Report;
use crate::dataset::{LIFECYCLE_TOTAL, PHASES, PHASE_SHARES};
use crate::metrics::absolute_from_shares;
use crate::table::{Cell, Table};

const SIZE: FigureSize = FigureSize::new(12.0, 8.0);

pub struct LifecycleEmissions {
    /// Reported percentage share per phase.
    pub shares: Series,
    pub total: f64,
    /// `share * total / 100`, kg CO2-eq.
    pub absolute: Vec<f64>,
}

impl LifecycleEmissions {
    pub fn new() -> Self {
        let shares = Series::from_pairs(PHASES.into_iter().zip(PHASE_SHARES));
        let absolute = absolute_from_shares(&shares.values, LIFECYCLE_TOTAL);
        Self { shares, total: LIFECYCLE_TOTAL, absolute }
    }
}

impl Default for LifecycleEmissions {
    fn default() -> Self { Self::new() }
}

impl Report for LifecycleEmissions {
    fn id(&self) -> &'static str { "lifecycle_emissions" }

    fn chart(&self, opts: &RenderOptions) -> Chart {
        let colors = opts.colors(self.shares.len());
        let absolute = Series::from_pairs(self.shares.labels.iter().cloned().zip(self.absolute.iter().copied()));
        let mut chart = Chart::new(SIZE);
        chart.add_panel(
            BarPanel::vertical("Emissions by Lifecycle Phase", absolute, "kg CO2-eq")
                .with_colors(colors.clone())
                .with_value_labels(self.absolute.iter().map(|v| format!("{v:.1}")).collect(), 2.0),
        );
        chart.add_panel(
            PiePanel::new("Percentage Contribution by Lifecycle Phase", self.shares.clone())
                .with_colors(colors)
                .with_pct_style(10.0, true),
        );
        chart
    }

    fn table(&self) -> Option<Table> {
        Some(
            Table::new()
                .with_column("Lifecycle Phase", self.shares.labels.iter().map(String::as_str))
                .with_column("Emissions (kg CO2-eq)", self.absolute.iter().copied())
                .with_column("Percentage (%)", self.shares.values.iter().map(|v| Cell::reported(*v))),
        )
    }
}
