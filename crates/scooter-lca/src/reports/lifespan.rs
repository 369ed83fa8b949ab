// File: crates/scooter-lca/src/reports/lifespan.rs
// Summary: Sensitivity of per-km emissions to a shorter scooter lifespan.

use chart_core::{BarPanel, Chart, FigureSize, RenderOptions, Series};

use super::{plain_number, Report};
use crate::dataset::{LIFESPANS, LIFESPAN_EMISSIONS};
use crate::metrics::percent_change;
use crate::table::{Cell, Table};

const SIZE: FigureSize = FigureSize::new(10.0, 6.0);

pub struct LifespanSensitivity {
    /// Shorter scenario first, base scenario second.
    pub emissions: Series,
    /// Change of the shorter lifespan relative to the base, in percent.
    pub change: f64,
}

impl LifespanSensitivity {
    pub fn new() -> Self {
        let emissions = Series::from_pairs(LIFESPANS.into_iter().zip(LIFESPAN_EMISSIONS));
        let change = percent_change(LIFESPAN_EMISSIONS[0], LIFESPAN_EMISSIONS[1]);
        Self { emissions, change }
    }

    pub fn title(&self) -> String {
        format!(
            "Impact of Scooter Lifespan on Emissions\n({:.1}% increase when reducing lifespan from 24 to 18 months)",
            self.change
        )
    }
}

impl Default for LifespanSensitivity {
    fn default() -> Self { Self::new() }
}

impl Report for LifespanSensitivity {
    fn id(&self) -> &'static str { "lifespan_sensitivity" }

    fn chart(&self, opts: &RenderOptions) -> Chart {
        let mut chart = Chart::new(SIZE);
        chart.add_panel(
            BarPanel::vertical(self.title(), self.emissions.clone(), "g CO2-eq/passenger-km")
                .with_colors(opts.colors(self.emissions.len()))
                .with_value_labels(self.emissions.values.iter().map(|v| plain_number(*v)).collect(), 0.5),
        );
        chart
    }

    fn table(&self) -> Option<Table> {
        Some(
            Table::new()
                .with_column("Lifespan", self.emissions.labels.iter().map(String::as_str))
                .with_column("Emissions (g CO2-eq/passenger-km)", self.emissions.values.iter().map(|v| Cell::reported(*v))),
        )
    }
}
