// File: crates/scooter-lca/src/reports/components.rs
// Summary: Emission contribution of each scooter component: sorted horizontal bars beside a pie.

use chart_core::{BarPanel, Chart, FigureSize, PiePanel, RenderOptions, Series};

use super::Report;
use crate::dataset::{COMPONENTS, COMPONENT_EMISSIONS};
use crate::metrics::{descending_order, shares};
use crate::table::{Cell, Table};

const SIZE: FigureSize = FigureSize::new(14.0, 10.0);

/// Slice order used by the pie panel. The bar panel is always sorted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliceOrder {
    /// Components in dataset order.
    Literal,
    /// Same descending order as the bar panel.
    Descending,
}

/// The pie keeps dataset order while the bars are sorted; the two panels differ on purpose.
pub const COMPONENT_PIE_ORDER: SliceOrder = SliceOrder::Literal;

pub struct ComponentEmissions {
    pub emissions: Series,
    /// Share of the total per component, dataset order.
    pub percentages: Vec<f64>,
    /// Indices sorting `emissions` from largest to smallest.
    pub order: Vec<usize>,
    pub pie_order: SliceOrder,
}

impl ComponentEmissions {
    pub fn new() -> Self {
        Self::with_pie_order(COMPONENT_PIE_ORDER)
    }

    pub fn with_pie_order(pie_order: SliceOrder) -> Self {
        let emissions = Series::from_pairs(COMPONENTS.into_iter().zip(COMPONENT_EMISSIONS));
        let percentages = shares(&emissions.values);
        let order = descending_order(&emissions.values);
        Self { emissions, percentages, order, pie_order }
    }

    pub fn sorted(&self) -> Series {
        self.emissions.reordered(&self.order)
    }

    /// Series the pie panel draws, per `pie_order`.
    pub fn pie_series(&self) -> Series {
        match self.pie_order {
            SliceOrder::Literal => self.emissions.clone(),
            SliceOrder::Descending => self.sorted(),
        }
    }
}

impl Default for ComponentEmissions {
    fn default() -> Self { Self::new() }
}

impl Report for ComponentEmissions {
    fn id(&self) -> &'static str { "component_emissions" }

    fn chart(&self, opts: &RenderOptions) -> Chart {
        let colors = opts.colors(self.emissions.len());
        let sorted = self.sorted();
        let labels = sorted.values.iter().map(|v| format!("{v:.1}")).collect();
        let mut chart = Chart::new(SIZE);
        chart.add_panel(
            BarPanel::horizontal("CO2 Emissions by Component", sorted, "kg CO2-eq")
                .with_colors(colors.clone())
                .with_value_labels(labels, 2.0),
        );
        chart.add_panel(
            PiePanel::new("Component Contribution to Total Emissions", self.pie_series())
                .with_colors(colors)
                .with_start_angle(90.0)
                .with_pct_style(9.0, true),
        );
        chart
    }

    fn table(&self) -> Option<Table> {
        Some(
            Table::new()
                .with_column("Component", self.emissions.labels.iter().map(String::as_str))
                .with_column("Emissions (kg CO2-eq)", self.emissions.values.iter().map(|v| Cell::reported(*v)))
                .with_column("Percentage (%)", self.percentages.iter().copied()),
        )
    }
}
