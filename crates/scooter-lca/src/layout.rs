// File: crates/scooter-lca/src/layout.rs
// Summary: Output directory layout (`data/` for tables, `results/` for images) under a project root.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{Chart, RenderOptions};

use crate::table::{self, Table};

/// Directory holding CSV tables.
pub const DATA_DIR: &str = "data";
/// Directory holding rendered PNG charts.
pub const RESULTS_DIR: &str = "results";

/// Create `dir` (and parents) if it does not exist yet.
pub fn ensure_dir(dir: &Path) -> std::io::Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
        log::debug!("created {}", dir.display());
    }
    Ok(())
}

/// Workspace root: two levels above this crate's manifest (`crates/scooter-lca`).
/// The manifest path is baked in at build time; a binary run on another machine
/// (where that checkout does not exist) uses the current directory instead.
pub fn project_root() -> PathBuf {
    root_from_manifest(Path::new(env!("CARGO_MANIFEST_DIR")))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn root_from_manifest(manifest: &Path) -> Option<PathBuf> {
    let root = manifest.ancestors().nth(2)?;
    if root.is_dir() {
        Some(root.to_path_buf())
    } else {
        log::warn!("build-time root {} is gone; using the current directory", root.display());
        None
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Layout rooted at [`project_root`].
    pub fn project() -> Self {
        Self::new(project_root())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/data`, without touching the filesystem.
    pub fn data_path(&self) -> PathBuf {
        self.root.join(DATA_DIR)
    }

    /// `<root>/results`, without touching the filesystem.
    pub fn results_path(&self) -> PathBuf {
        self.root.join(RESULTS_DIR)
    }

    /// `<root>/data`, created if absent.
    pub fn data_dir(&self) -> std::io::Result<PathBuf> {
        let dir = self.data_path();
        ensure_dir(&dir)?;
        Ok(dir)
    }

    /// `<root>/results`, created if absent.
    pub fn results_dir(&self) -> std::io::Result<PathBuf> {
        let dir = self.results_path();
        ensure_dir(&dir)?;
        Ok(dir)
    }

    /// Write `table` to `data/<filename>`, overwriting, and announce the path.
    pub fn save_table(&self, table: &Table, filename: &str) -> crate::error::Result<PathBuf> {
        let path = self.data_dir()?.join(filename);
        table::write_csv(table, &path)?;
        println!("Data saved to {}", path.display());
        Ok(path)
    }

    /// Read `data/<filename>`; `TableError::NotFound` when it is absent.
    pub fn load_table(&self, filename: &str) -> crate::error::Result<Table> {
        table::read_csv(&self.data_path().join(filename))
    }

    /// Render `chart` to `results/<filename>`.
    pub fn save_chart(&self, chart: &Chart, opts: &RenderOptions, filename: &str) -> Result<PathBuf> {
        let path = self.results_dir()?.join(filename);
        chart
            .render_to_png(opts, &path)
            .with_context(|| format!("rendering {}", path.display()))?;
        log::debug!("chart saved to {}", path.display());
        Ok(path)
    }
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::project()
    }
}
