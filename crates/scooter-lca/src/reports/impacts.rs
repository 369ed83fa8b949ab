// File: crates/scooter-lca/src/reports/impacts.rs
// Summary: Radar of impact categories, each scaled against its hand-picked presentation maximum.

use chart_core::{Chart, FigureSize, RadarPanel, RenderOptions, Series};

use super::Report;
use crate::dataset::{IMPACT_CATEGORIES, IMPACT_SCALE_MAXIMA, IMPACT_UNITS, IMPACT_VALUES};
use crate::metrics::normalize_against;
use crate::table::{Cell, Table};

const SIZE: FigureSize = FigureSize::new(14.0, 8.0);

pub struct ImpactCategories {
    pub values: Series,
    pub units: Vec<&'static str>,
    pub maxima: Vec<f64>,
    /// `value / max * 100` per category.
    pub normalized: Vec<f64>,
}

impl ImpactCategories {
    pub fn new() -> Self {
        let values = Series::from_pairs(IMPACT_CATEGORIES.into_iter().zip(IMPACT_VALUES));
        let maxima = IMPACT_SCALE_MAXIMA.to_vec();
        let normalized = normalize_against(&values.values, &maxima);
        Self { values, units: IMPACT_UNITS.to_vec(), maxima, normalized }
    }

    /// Spoke labels: category name over its unit.
    pub fn labels(&self) -> Vec<String> {
        self.values
            .labels
            .iter()
            .zip(&self.units)
            .map(|(cat, unit)| format!("{cat}\n({unit})"))
            .collect()
    }
}

impl Default for ImpactCategories {
    fn default() -> Self { Self::new() }
}

impl Report for ImpactCategories {
    fn id(&self) -> &'static str { "impact_categories" }

    fn chart(&self, _opts: &RenderOptions) -> Chart {
        let series = Series::from_pairs(self.labels().into_iter().zip(self.normalized.iter().copied()));
        let mut chart = Chart::new(SIZE);
        chart.add_panel(
            RadarPanel::new("Environmental Impact Categories (Normalized)", series)
                .with_rings(100.0, vec![20.0, 40.0, 60.0, 80.0, 100.0]),
        );
        chart
    }

    fn table(&self) -> Option<Table> {
        Some(
            Table::new()
                .with_column("Impact Category", self.values.labels.iter().map(String::as_str))
                .with_column("Value", self.values.values.iter().map(|v| Cell::reported(*v)))
                .with_column("Unit", self.units.iter().copied())
                .with_column("Normalized (%)", self.normalized.iter().copied()),
        )
    }
}
