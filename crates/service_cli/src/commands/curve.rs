//! Curve command implementation
//!
//! Samples an estimator over an evenly spaced grid, by default the sample
//! range, for plotting elsewhere.

use growth_core::estimation::{sample_curve, sample_curve_between};
use growth_core::Method;
use serde::Serialize;
use tracing::info;

use crate::config::CliConfig;
use crate::output::{format_value, render, Report, Table};
use crate::{CliError, Result};

/// One sampled point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    /// Grid coordinate
    pub x: f64,
    /// Estimate at `x`
    pub y: f64,
}

/// Sampled curve for one method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveReport {
    /// Method used
    pub method: Method,
    /// Grid points, ascending when `from <= to`
    pub points: Vec<CurvePoint>,
}

impl Report for CurveReport {
    fn to_table(&self) -> String {
        self.points
            .iter()
            .fold(Table::new(["x", "y"]), |table, p| {
                table.row([format_value(p.x), format_value(p.y)])
            })
            .render()
    }
}

/// Sample `method` at `steps` grid points.
///
/// `range` overrides the sample range; both ends must be given together.
pub fn compute(
    method: Method,
    xs: &[f64],
    ys: &[f64],
    steps: usize,
    range: (Option<f64>, Option<f64>),
) -> Result<CurveReport> {
    if steps < 2 {
        return Err(CliError::InvalidArgument(format!(
            "--steps must be at least 2, got {}",
            steps
        )));
    }

    let samples = match range {
        (None, None) => sample_curve(method, xs, ys, steps)?,
        (Some(from), Some(to)) => {
            if !from.is_finite() || !to.is_finite() {
                return Err(CliError::InvalidArgument(
                    "--from and --to must be finite".to_string(),
                ));
            }
            sample_curve_between(method, xs, ys, from, to, steps)?
        }
        _ => {
            return Err(CliError::InvalidArgument(
                "--from and --to must be given together".to_string(),
            ))
        }
    };

    info!(method = %method, steps, "Curve sampled");
    Ok(CurveReport {
        method,
        points: samples
            .into_iter()
            .map(|(x, y)| CurvePoint { x, y })
            .collect(),
    })
}

/// Run the curve command
pub fn run(
    config: &CliConfig,
    method: Option<Method>,
    xs: &[f64],
    ys: &[f64],
    steps: Option<usize>,
    range: (Option<f64>, Option<f64>),
) -> Result<()> {
    let report = compute(
        method.unwrap_or(config.default_method),
        xs,
        ys,
        steps.unwrap_or(config.curve_steps),
        range,
    )?;
    println!("{}", render(&report, config.output_format)?);
    Ok(())
}
