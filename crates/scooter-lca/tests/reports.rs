// File: crates/scooter-lca/tests/reports.rs
// Purpose: Report datasets, persisted table shapes, and the panels each chart is built from.

use chart_core::{Panel, RenderOptions, Shape};
use scooter_lca::reports::*;
use scooter_lca::Report;

fn headers(report: &dyn Report) -> Vec<String> {
    report
        .table()
        .expect("report has a table")
        .headers()
        .map(str::to_string)
        .collect()
}

#[test]
fn table_columns_per_report() {
    assert_eq!(
        headers(&EmissionsComparison::new()),
        ["Transport Mode", "Emissions (g CO2-eq/passenger-km)", "Reduction vs Car (%)"]
    );
    assert_eq!(
        headers(&ComponentEmissions::new()),
        ["Component", "Emissions (kg CO2-eq)", "Percentage (%)"]
    );
    assert_eq!(
        headers(&LifecycleEmissions::new()),
        ["Lifecycle Phase", "Emissions (kg CO2-eq)", "Percentage (%)"]
    );
    assert_eq!(
        headers(&ImpactCategories::new()),
        ["Impact Category", "Value", "Unit", "Normalized (%)"]
    );
    assert_eq!(
        headers(&LifespanSensitivity::new()),
        ["Lifespan", "Emissions (g CO2-eq/passenger-km)"]
    );
    assert!(CircularVsLinear.table().is_none());
}

#[test]
fn emissions_table_bytes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let layout = scooter_lca::OutputLayout::new(dir.path());
    let table = EmissionsComparison::new().table().expect("table");
    let path = layout.save_table(&table, "emissions_comparison.csv").expect("save");
    assert_eq!(
        std::fs::read_to_string(path).expect("read"),
        "Transport Mode,Emissions (g CO2-eq/passenger-km),Reduction vs Car (%)\r\n\
         E-Scooter,29.5,88.52140077821011\r\n\
         Bus,51,80.1556420233463\r\n\
         Personal Car,257,0.0\r\n"
    );
}

#[test]
fn component_table_keeps_dataset_order() {
    let t = ComponentEmissions::new().table().expect("table");
    assert_eq!(t.row_count(), 8);
    let first = t.column("Component").expect("column")[0].to_string();
    assert_eq!(first, "Battery");
}

#[test]
fn component_bars_sorted_pie_literal() {
    let report = ComponentEmissions::new();
    let chart = report.chart(&RenderOptions::default());
    assert_eq!(chart.panels.len(), 2);
    match (&chart.panels[0], &chart.panels[1]) {
        (Panel::Bar(bar), Panel::Pie(pie)) => {
            assert_eq!(bar.series.labels[0], "Controller");
            assert_eq!(pie.series.labels[0], "Battery");
            assert_eq!(pie.colors.len(), 8);
        }
        other => panic!("unexpected panels: {other:?}"),
    }

    let sorted = ComponentEmissions::with_pie_order(SliceOrder::Descending);
    assert_eq!(sorted.pie_series(), sorted.sorted());
}

#[test]
fn lifespan_title_reports_change() {
    let title = LifespanSensitivity::new().title();
    assert!(title.contains("(33.1% increase when reducing lifespan from 24 to 18 months)"), "{title}");
}

#[test]
fn impact_radar_closes_and_labels_units() {
    let report = ImpactCategories::new();
    assert_eq!(report.labels()[0], "Global warming\n(kg CO2 eq)");
    let chart = report.chart(&RenderOptions::default());
    match &chart.panels[0] {
        Panel::Radar(radar) => {
            let ring = radar.closed_ring();
            assert_eq!(ring.len(), 7);
            assert_eq!(ring[0], ring[6]);
            assert_eq!(radar.r_max, 100.0);
        }
        other => panic!("expected radar, got {other:?}"),
    }
}

#[test]
fn reduction_panel_is_fixed_to_percent_range() {
    let chart = EmissionsComparison::new().chart(&RenderOptions::default());
    match &chart.panels[1] {
        Panel::Bar(bar) => {
            assert_eq!((bar.axis.min, bar.axis.max), (0.0, 100.0));
            assert_eq!(bar.value_labels[2], "0.0%");
        }
        other => panic!("expected bar, got {other:?}"),
    }
}

#[test]
fn economy_diagrams_have_expected_shapes() {
    let report = CircularVsLinear;
    let linear = report.linear_diagram();
    assert_eq!(linear.count(|s| matches!(s, Shape::Box { .. })), 5);
    assert_eq!(linear.count(|s| matches!(s, Shape::Arrow { .. })), 4);

    let circular = report.circular_diagram();
    assert_eq!(circular.count(|s| matches!(s, Shape::Box { .. })), 6);
    assert_eq!(circular.count(|s| matches!(s, Shape::CurvedArrow { .. })), 6);
    assert_eq!(circular.count(|s| matches!(s, Shape::Disc { .. })), 1);

    let chart = report.chart(&RenderOptions::default());
    assert_eq!(chart.title.as_deref(), Some("Linear vs. Circular Economy for Shared Electric Scooters"));
}
