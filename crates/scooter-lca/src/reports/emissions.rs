// File: crates/scooter-lca/src/reports/emissions.rs
// Summary: Use-phase emissions per transport mode and the reduction vs. the highest-emitting mode.

use chart_core::{BarPanel, Chart, FigureSize, RenderOptions, Series};

use super::{plain_number, Report};
use crate::dataset::{MODE_EMISSIONS, TRANSPORT_MODES};
use crate::metrics::reduction_vs_max;
use crate::table::{Cell, Table};

const SIZE: FigureSize = FigureSize::new(12.0, 8.0);

pub struct EmissionsComparison {
    pub emissions: Series,
    /// `(1 - e / max) * 100` per mode.
    pub reductions: Vec<f64>,
}

impl EmissionsComparison {
    pub fn new() -> Self {
        let emissions = Series::from_pairs(TRANSPORT_MODES.into_iter().zip(MODE_EMISSIONS));
        let reductions = reduction_vs_max(&emissions.values);
        Self { emissions, reductions }
    }
}

impl Default for EmissionsComparison {
    fn default() -> Self { Self::new() }
}

impl Report for EmissionsComparison {
    fn id(&self) -> &'static str { "emissions_comparison" }

    fn chart(&self, opts: &RenderOptions) -> Chart {
        let colors = opts.colors(self.emissions.len());
        let mut chart = Chart::new(SIZE);
        chart.add_panel(
            BarPanel::vertical("Emissions by Transport Mode", self.emissions.clone(), "g CO2-eq/passenger-km")
                .with_colors(colors.clone())
                .with_value_labels(self.emissions.values.iter().map(|v| plain_number(*v)).collect(), 5.0),
        );
        let reductions = Series::from_pairs(self.emissions.labels.iter().cloned().zip(self.reductions.iter().copied()));
        chart.add_panel(
            BarPanel::vertical("Emissions Reduction vs. Car", reductions, "% Reduction vs. Personal Car")
                .with_colors(colors)
                .with_limits(0.0, 100.0)
                .with_value_labels(self.reductions.iter().map(|v| format!("{v:.1}%")).collect(), 2.0),
        );
        chart
    }

    fn table(&self) -> Option<Table> {
        Some(
            Table::new()
                .with_column("Transport Mode", self.emissions.labels.iter().map(String::as_str))
                .with_column("Emissions (g CO2-eq/passenger-km)", self.emissions.values.iter().map(|v| Cell::reported(*v)))
                .with_column("Reduction vs Car (%)", self.reductions.iter().copied()),
        )
    }
}
