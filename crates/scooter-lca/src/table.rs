// File: crates/scooter-lca/src/table.rs
// Summary: Column-ordered tables of text/number cells and their CSV writer/reader.

use std::fmt;
use std::path::Path;

use crate::error::{Result, TableError};

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Integer(i64),
    Number(f64),
    Text(String),
}

impl Cell {
    /// A literal figure as it was reported: whole numbers stay integers (`51`),
    /// anything else is a float (`29.5`).
    pub fn reported(v: f64) -> Self {
        if v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
            Cell::Integer(v as i64)
        } else {
            Cell::Number(v)
        }
    }

    /// Parse a CSV field (after trimming): an integer, else a float, else the raw text.
    pub fn parse(field: &str) -> Self {
        let trimmed = field.trim();
        if let Ok(v) = trimmed.parse::<i64>() {
            return Cell::Integer(v);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => Cell::Number(v),
            Err(_) => Cell::Text(field.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Integer(v) => Some(*v as f64),
            Cell::Number(v) => Some(*v),
            Cell::Text(_) => None,
        }
    }
}

/// Floats use the shortest round-trip digits and always keep a decimal point
/// (`0.0`, `29.5`, `88.52140077821011`); integers print bare (`257`).
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Integer(v) => write!(f, "{v}"),
            Cell::Number(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            Cell::Number(v) => write!(f, "{v}"),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self { Cell::Integer(v) }
}
impl From<f64> for Cell {
    fn from(v: f64) -> Self { Cell::Number(v) }
}
impl From<&str> for Cell {
    fn from(s: &str) -> Self { Cell::Text(s.to_string()) }
}
impl From<String> for Cell {
    fn from(s: String) -> Self { Cell::Text(s) }
}

/// Ordered mapping from column name to values. Re-inserting a name replaces
/// that column in place, keeping its original position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    columns: Vec<(String, Vec<Cell>)>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_column<I, C>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.insert(name, values);
        self
    }

    pub fn insert<I, C>(&mut self, name: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let name = name.into();
        let values: Vec<Cell> = values.into_iter().map(Into::into).collect();
        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = values,
            None => self.columns.push((name, values)),
        }
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    pub fn column(&self, name: &str) -> Option<&[Cell]> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_slice())
    }

    /// Numeric view of a column; `None` if absent or any cell is text.
    pub fn numbers(&self, name: &str) -> Option<Vec<f64>> {
        self.column(name)?.iter().map(Cell::as_number).collect()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Rows written by [`write_csv`]: the shortest column bounds the count.
    pub fn row_count(&self) -> usize {
        self.columns.iter().map(|(_, v)| v.len()).min().unwrap_or(0)
    }

    /// Transposed rows, truncated to [`Table::row_count`].
    pub fn rows(&self) -> impl Iterator<Item = Vec<&Cell>> + '_ {
        (0..self.row_count()).map(move |i| self.columns.iter().map(|(_, v)| &v[i]).collect())
    }

    fn column_mut_at(&mut self, i: usize) -> Option<&mut Vec<Cell>> {
        self.columns.get_mut(i).map(|(_, v)| v)
    }
}

/// Write `table` as CSV: header row of names, then transposed rows (CRLF line ends).
/// Columns of unequal length are truncated to the shortest one.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let csv_err = |source| TableError::Csv { path: path.to_path_buf(), source };
    if table.is_empty() {
        // header row with no names
        std::fs::write(path, b"\r\n")?;
        return Ok(());
    }
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_path(path)
        .map_err(csv_err)?;
    wtr.write_record(table.headers()).map_err(csv_err)?;
    for row in table.rows() {
        wtr.write_record(row.iter().map(|c| c.to_string())).map_err(csv_err)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read a CSV written by [`write_csv`] (or any CSV with a header row).
/// Ragged rows are tolerated: short rows leave columns shorter, extra cells are dropped.
pub fn read_csv(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(TableError::NotFound(path.to_path_buf()));
    }
    let csv_err = |source| TableError::Csv { path: path.to_path_buf(), source };
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;

    let mut table = Table::new();
    let headers: Vec<String> = rdr.headers().map_err(csv_err)?.iter().map(str::to_string).collect();
    for h in &headers {
        table.insert(h.as_str(), Vec::<Cell>::new());
    }
    let width = table.column_count();
    for rec in rdr.records() {
        let rec = rec.map_err(csv_err)?;
        for (i, field) in rec.iter().enumerate().take(width) {
            if let Some(col) = table.column_mut_at(i) {
                col.push(Cell::parse(field));
            }
        }
    }
    log::debug!("read {} columns from {}", width, path.display());
    Ok(table)
}
