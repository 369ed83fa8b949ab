// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for figure construction and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod palette;
pub mod text;
pub mod context;
pub mod bar;
pub mod pie;
pub mod radar;
pub mod diagram;

pub use chart::{Chart, Panel, RenderOptions};
pub use series::{Series, SeriesError};
pub use axis::Axis;
pub use theme::Theme;
pub use palette::Palette;
pub use text::TextShaper;
pub use types::FigureSize;
pub use bar::{BarPanel, Orientation};
pub use pie::PiePanel;
pub use radar::RadarPanel;
pub use diagram::{Diagram, Shape};

/// Re-exported so callers can name colors without depending on skia-safe directly.
pub use skia_safe::Color;
