//! Compare command implementation
//!
//! Evaluates every method at the same query point. A method that rejects
//! the samples is reported alongside the others rather than aborting.

use growth_core::estimation::is_extrapolation;
use growth_core::Method;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::output::{format_value, render, Report, Table};
use crate::{CliError, Result};

/// Outcome of one method in a comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompareRow {
    /// Method evaluated
    pub method: Method,
    /// Estimate, if the method accepted the samples
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<f64>,
    /// Rejection reason otherwise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Every method evaluated at one point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompareReport {
    /// Query point
    pub at: f64,
    /// True when `at` lies outside the sample range
    pub extrapolated: bool,
    /// One row per method, in [`Method::ALL`] order
    pub results: Vec<CompareRow>,
}

impl Report for CompareReport {
    fn to_table(&self) -> String {
        self.results
            .iter()
            .fold(Table::new(["Method", "Estimate"]), |table, row| {
                let cell = match (&row.estimate, &row.error) {
                    (Some(value), _) => format_value(*value),
                    (None, Some(reason)) => format!("error: {}", reason),
                    (None, None) => String::new(),
                };
                table.row([row.method.label().to_string(), cell])
            })
            .render()
    }
}

/// Evaluate every method at `at`.
///
/// Fails only if no method produced an estimate, returning the first error.
pub fn compute(xs: &[f64], ys: &[f64], at: f64) -> Result<CompareReport> {
    let mut first_error: Option<CliError> = None;
    let results: Vec<CompareRow> = Method::ALL
        .iter()
        .map(|&method| match method.estimate(xs, ys, at) {
            Ok(value) => CompareRow {
                method,
                estimate: Some(value),
                error: None,
            },
            Err(e) => {
                warn!(method = %method, error = %e, "Method rejected the samples");
                let row = CompareRow {
                    method,
                    estimate: None,
                    error: Some(e.to_string()),
                };
                if first_error.is_none() {
                    first_error = Some(e.into());
                }
                row
            }
        })
        .collect();

    if results.iter().all(|row| row.estimate.is_none()) {
        if let Some(e) = first_error {
            return Err(e);
        }
    }

    let extrapolated = is_extrapolation(xs, at);
    if extrapolated {
        warn!(at, "Query lies outside the sample range; estimates are extrapolations");
    }

    info!(at, methods = results.len(), "Comparison complete");
    Ok(CompareReport {
        at,
        extrapolated,
        results,
    })
}

/// Run the compare command
pub fn run(config: &CliConfig, xs: &[f64], ys: &[f64], at: f64) -> Result<()> {
    let report = compute(xs, ys, at)?;
    println!("{}", render(&report, config.output_format)?);
    Ok(())
}
