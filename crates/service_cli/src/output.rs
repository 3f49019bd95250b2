//! Rendering of command results as terminal tables or JSON.

use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

/// A command result that can be printed in either output format.
pub trait Report: Serialize {
    /// Render as a box-drawn table.
    fn to_table(&self) -> String;
}

/// Render `report` in the requested format.
pub fn render<R: Report>(report: &R, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(report.to_table()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Fixed-precision rendering used in every table cell holding a number.
pub fn format_value(value: f64) -> String {
    format!("{:.6}", value)
}

/// Box-drawn table with left-aligned columns.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Start a table with the given column headers.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing cells render empty; extra cells are dropped.
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
        self
    }

    /// Render with `┌─┬─┐` borders.
    pub fn render(&self) -> String {
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                self.rows
                    .iter()
                    .map(|row| row[col].chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let border = |left: &str, mid: &str, right: &str| {
            let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{}{}{}", left, segments.join(mid), right)
        };
        let line = |cells: &[String]| {
            let padded: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| format!(" {}{} ", cell, " ".repeat(w - cell.chars().count())))
                .collect();
            format!("│{}│", padded.join("│"))
        };

        let mut out = Vec::with_capacity(self.rows.len() + 4);
        out.push(border("┌", "┬", "┐"));
        out.push(line(&self.headers));
        out.push(border("├", "┼", "┤"));
        out.extend(self.rows.iter().map(|row| line(row)));
        out.push(border("└", "┴", "┘"));
        out.join("\n")
    }
}
