// File: crates/chart-core/src/theme.rs
// Summary: Theme presets for figure, panel, grid and text colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub figure_background: skia::Color,
    pub panel_background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: Option<skia::Color>,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub text: skia::Color,
    pub edge: skia::Color,
    pub ring_label: skia::Color,
}

impl Theme {
    /// Gray panels with white grid, no axis spines.
    pub fn ggplot() -> Self {
        Self {
            name: "ggplot",
            figure_background: skia::Color::from_argb(255, 255, 255, 255),
            panel_background: skia::Color::from_argb(255, 0xe5, 0xe5, 0xe5),
            grid: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: None,
            axis_label: skia::Color::from_argb(255, 0x55, 0x55, 0x55),
            tick: skia::Color::from_argb(255, 0x55, 0x55, 0x55),
            title: skia::Color::from_argb(255, 0, 0, 0),
            text: skia::Color::from_argb(255, 0, 0, 0),
            edge: skia::Color::from_argb(255, 0, 0, 0),
            ring_label: skia::Color::from_argb(255, 0x80, 0x80, 0x80),
        }
    }

    /// White panels with light grid and dark spines.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            figure_background: skia::Color::from_argb(255, 255, 255, 255),
            panel_background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: Some(skia::Color::from_argb(255, 60, 60, 70)),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            title: skia::Color::from_argb(255, 20, 20, 30),
            text: skia::Color::from_argb(255, 20, 20, 30),
            edge: skia::Color::from_argb(255, 0, 0, 0),
            ring_label: skia::Color::from_argb(255, 0x80, 0x80, 0x80),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            figure_background: skia::Color::from_argb(255, 18, 18, 20),
            panel_background: skia::Color::from_argb(255, 28, 28, 32),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: Some(skia::Color::from_argb(255, 180, 180, 190)),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 235, 235, 245),
            text: skia::Color::from_argb(255, 235, 235, 245),
            edge: skia::Color::from_argb(255, 200, 200, 210),
            ring_label: skia::Color::from_argb(255, 150, 150, 160),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::ggplot() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::ggplot(), Theme::classic(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to ggplot.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::ggplot()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_with_fallback() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("no-such-theme").name, "ggplot");
        assert_eq!(presets().len(), 3);
    }
}
