// File: crates/scooter-lca/src/reports/economy.rs
// Summary: Schematic comparison of the linear and circular product models for shared scooters.

use std::f64::consts::TAU;

use chart_core::diagram::Pt;
use chart_core::{Chart, Color, Diagram, FigureSize, RenderOptions, Shape};

use super::Report;

const SIZE: FigureSize = FigureSize::new(12.0, 8.0);
const BOX_ALPHA: f32 = 0.8;
const PANEL_TITLE_SIZE: f32 = 16.0;

/// Fixed stage colors (ARGB).
pub mod colors {
    use chart_core::Color;

    pub const EXTRACT: Color = Color::new(0xFF_FF6B6B);
    pub const PRODUCE: Color = Color::new(0xFF_4ECDC4);
    pub const DISTRIBUTE: Color = Color::new(0xFF_FFD166);
    pub const USE: Color = Color::new(0xFF_06D6A0);
    pub const DISPOSE: Color = Color::new(0xFF_073B4C);
    pub const RECYCLE: Color = Color::new(0xFF_8338EC);
    pub const REUSE: Color = Color::new(0xFF_3A86FF);
    pub const REPAIR: Color = Color::new(0xFF_FB5607);
}

pub const LINEAR_STEPS: [(&str, Color); 5] = [
    ("Raw Material\nExtraction", colors::EXTRACT),
    ("Manufacturing", colors::PRODUCE),
    ("Distribution", colors::DISTRIBUTE),
    ("Use", colors::USE),
    ("Disposal", colors::DISPOSE),
];

pub const CIRCULAR_STEPS: [(&str, Color); 6] = [
    ("Sustainable\nMaterial Sourcing", colors::EXTRACT),
    ("Modular\nManufacturing", colors::PRODUCE),
    ("Extended\nUse Phase", colors::USE),
    ("Maintenance\n& Repair", colors::REPAIR),
    ("Refurbishment", colors::REUSE),
    ("Material\nRecycling", colors::RECYCLE),
];

const LINEAR_FINDINGS: &str = "Key Findings from LCA:\n\
    • Manufacturing: 87.8% of emissions\n\
    • Lifespan: 2 years (base scenario)\n\
    • Emissions: 29.5 g CO₂-eq/passenger-km\n\
    • Battery emissions: 30.2% of manufacturing";

const CIRCULAR_IMPROVEMENTS: &str = "Potential Improvements:\n\
    • Extend lifespan to 4+ years (−50% emissions)\n\
    • Efficient material recovery (90%+)\n\
    • Alternative transport routes (−71.7% transport emissions)\n\
    • Improved collection strategies (−27.2% collection emissions)";

/// Radius of the circular loop, world units.
pub const LOOP_RADIUS: f64 = 1.2;
/// Bow of each loop arrow as a fraction of the radius.
const ARROW_BOW: f64 = 0.3;

/// Illustrative only; there is no table behind this chart.
#[derive(Clone, Copy, Debug, Default)]
pub struct CircularVsLinear;

impl CircularVsLinear {
    /// Left-to-right chain of stages with short arrows in the gaps.
    pub fn linear_diagram(&self) -> Diagram {
        let mut d = Diagram::new("Linear Economy Model for E-Scooters", (-0.6, 4.6), (-1.1, 1.0))
            .with_title_size(PANEL_TITLE_SIZE);
        for (i, (label, fill)) in LINEAR_STEPS.iter().enumerate() {
            d.push(Shape::Box {
                center: (i as f64, 0.5),
                size: (0.8, 0.4),
                fill: *fill,
                alpha: BOX_ALPHA,
                label: (*label).to_string(),
                font_size: 10.0,
            });
        }
        for i in 0..LINEAR_STEPS.len() - 1 {
            let x = i as f64;
            d.push(Shape::Arrow { from: (x + 0.4, 0.5), to: (x + 0.6, 0.5), width: 2.0 });
        }
        d.push(Shape::Note {
            at: (2.0, -0.4),
            text: LINEAR_FINDINGS.to_string(),
            font_size: 10.0,
            bold: false,
            boxed: true,
        });
        d
    }

    /// Stage centers on the loop, counterclockwise from +x.
    pub fn loop_positions(&self) -> Vec<Pt> {
        let n = CIRCULAR_STEPS.len();
        (0..n)
            .map(|i| {
                let a = TAU * i as f64 / n as f64;
                (LOOP_RADIUS * a.cos(), LOOP_RADIUS * a.sin())
            })
            .collect()
    }

    /// Control point bowing the arrow `from -> to` outward from the chord.
    pub fn bow_control(from: Pt, to: Pt) -> Pt {
        let mid = ((from.0 + to.0) * 0.5, (from.1 + to.1) * 0.5);
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let dist = dx.hypot(dy);
        if dist == 0.0 {
            return mid;
        }
        let normal = (-dy / dist, dx / dist);
        (mid.0 + normal.0 * LOOP_RADIUS * ARROW_BOW, mid.1 + normal.1 * LOOP_RADIUS * ARROW_BOW)
    }

    /// Stages on a ring joined by curved arrows, with the outcome in the middle.
    pub fn circular_diagram(&self) -> Diagram {
        let mut d = Diagram::new("Circular Economy Model for E-Scooters", (-1.9, 1.9), (-2.4, 1.7))
            .with_title_size(PANEL_TITLE_SIZE);
        let centers = self.loop_positions();
        for ((label, fill), center) in CIRCULAR_STEPS.iter().zip(&centers) {
            d.push(Shape::Box {
                center: *center,
                size: (0.5, 0.3),
                fill: *fill,
                alpha: BOX_ALPHA,
                label: (*label).to_string(),
                font_size: 9.0,
            });
        }
        for (i, &from) in centers.iter().enumerate() {
            let to = centers[(i + 1) % centers.len()];
            d.push(Shape::CurvedArrow { from, control: Self::bow_control(from, to), to, width: 1.5 });
        }
        d.push(Shape::Disc { center: (0.0, 0.0), radius: 0.4, fill: Color::WHITE, alpha: 0.9 })
            .push(Shape::Note {
                at: (0.0, 0.0),
                text: "Reduced\nEnvironmental\nImpact".to_string(),
                font_size: 10.0,
                bold: true,
                boxed: false,
            })
            .push(Shape::Note {
                at: (0.0, -1.8),
                text: CIRCULAR_IMPROVEMENTS.to_string(),
                font_size: 10.0,
                bold: false,
                boxed: true,
            });
        d
    }
}

impl Report for CircularVsLinear {
    fn id(&self) -> &'static str { "circular_vs_linear" }

    fn chart(&self, _opts: &RenderOptions) -> Chart {
        let mut chart = Chart::new(SIZE).with_title("Linear vs. Circular Economy for Shared Electric Scooters");
        chart.add_panel(self.linear_diagram());
        chart.add_panel(self.circular_diagram());
        chart
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_starts_on_positive_x_axis() {
        let p = CircularVsLinear.loop_positions();
        assert_eq!(p.len(), 6);
        assert!((p[0].0 - LOOP_RADIUS).abs() < 1e-12);
        assert!(p[0].1.abs() < 1e-12);
    }

    #[test]
    fn bow_bends_left_of_travel() {
        // Travelling +x, the left normal is +y.
        let c = CircularVsLinear::bow_control((0.0, 0.0), (2.0, 0.0));
        assert!((c.0 - 1.0).abs() < 1e-12);
        assert!((c.1 - LOOP_RADIUS * 0.3).abs() < 1e-12);
        assert_eq!(CircularVsLinear::bow_control((1.0, 1.0), (1.0, 1.0)), (1.0, 1.0));
    }
}
