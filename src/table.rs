//! Edge table loading
//!
//! Reads a row-oriented CSV table with named columns. Values are kept as
//! trimmed strings; empty cells stay empty and are skipped by the graph
//! builder.

use std::fmt;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::constants::columns::PANDAS_INDEX;
use crate::error::GenoPhenoError;

/// A loaded edge table: one header row plus string-valued records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl EdgeTable {
    /// Read a table from a CSV file on disk
    pub fn from_path(path: &Path) -> Result<Self, GenoPhenoError> {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|source| GenoPhenoError::InputReadError {
                path: path.to_path_buf(),
                source,
            })?;

        let table = Self::from_csv(reader).map_err(|source| GenoPhenoError::InputReadError {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(
            path = %path.display(),
            rows = table.row_count(),
            columns = table.headers.len(),
            "loaded edge table"
        );
        Ok(table)
    }

    /// Read a table from any CSV source
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, csv::Error> {
        Self::from_csv(
            csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_reader(reader),
        )
    }

    fn from_csv<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Self, csv::Error> {
        let headers = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record?.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    /// Build a table directly from headers and rows
    pub fn from_rows<H, R, V>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = V>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// Position of a named column, or a [`GenoPhenoError::SchemaError`]
    pub fn column_index(&self, name: &str) -> Result<usize, GenoPhenoError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| GenoPhenoError::SchemaError {
                column: name.to_string(),
                available: self.headers.join(", "),
            })
    }

    /// All values of a named column, in row order
    pub fn column(&self, name: &str) -> Result<Vec<&str>, GenoPhenoError> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| cell(row, idx)).collect())
    }

    /// Iterate rows as string slices
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Value of a cell, empty when the row is short
    pub fn value(&self, row: usize, column: usize) -> &str {
        self.rows.get(row).map(|r| cell(r, column)).unwrap_or("")
    }

    /// A printable head/tail view of the table without index columns
    pub fn preview(&self, rows_per_end: usize) -> TablePreview<'_> {
        TablePreview {
            table: self,
            rows_per_end,
        }
    }

    /// Columns shown to users; pandas index columns are dropped
    fn display_columns(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .filter(|(_, h)| !is_index_column(h))
            .map(|(i, _)| i)
            .collect()
    }
}

fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

fn is_index_column(header: &str) -> bool {
    header.is_empty() || header == PANDAS_INDEX
}

/// Head/tail rendering of an [`EdgeTable`], in the familiar dataframe shape
pub struct TablePreview<'a> {
    table: &'a EdgeTable,
    rows_per_end: usize,
}

impl fmt::Display for TablePreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = self.table.display_columns();
        let total = self.table.row_count();

        let shown: Vec<Option<usize>> = if total > self.rows_per_end * 2 {
            (0..self.rows_per_end)
                .map(Some)
                .chain(std::iter::once(None))
                .chain((total - self.rows_per_end..total).map(Some))
                .collect()
        } else {
            (0..total).map(Some).collect()
        };

        let index_width = total.saturating_sub(1).to_string().len().max(3);
        let widths: Vec<usize> = columns
            .iter()
            .map(|&c| {
                shown
                    .iter()
                    .flatten()
                    .map(|&r| self.table.value(r, c).chars().count())
                    .chain(std::iter::once(self.table.headers[c].chars().count()))
                    .max()
                    .unwrap_or(0)
                    .max(3)
            })
            .collect();

        write!(f, "{:index_width$}", "")?;
        for (&c, &width) in columns.iter().zip(&widths) {
            write!(f, "  {:>width$}", self.table.headers[c])?;
        }
        writeln!(f)?;

        for row in &shown {
            match row {
                Some(r) => {
                    write!(f, "{r:<index_width$}")?;
                    for (&c, &width) in columns.iter().zip(&widths) {
                        write!(f, "  {:>width$}", self.table.value(*r, c))?;
                    }
                }
                None => {
                    write!(f, "{:<index_width$}", "...")?;
                    for &width in &widths {
                        write!(f, "  {:>width$}", "...")?;
                    }
                }
            }
            writeln!(f)?;
        }

        write!(f, "\n[{} rows x {} columns]", total, columns.len())
    }
}
