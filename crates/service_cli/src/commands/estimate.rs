//! Estimate command implementation
//!
//! Evaluates one method at one query point.

use growth_core::estimation::is_extrapolation;
use growth_core::Method;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::output::{format_value, render, Report, Table};
use crate::Result;

/// Result of a single estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateReport {
    /// Method used
    pub method: Method,
    /// Query point
    pub at: f64,
    /// Estimated value
    pub estimate: f64,
    /// True when `at` lies outside the sample range
    pub extrapolated: bool,
}

impl Report for EstimateReport {
    fn to_table(&self) -> String {
        let at = if self.extrapolated {
            format!("{} (extrapolated)", format_value(self.at))
        } else {
            format_value(self.at)
        };
        Table::new(["Method", "At", "Estimate"])
            .row([self.method.label().to_string(), at, format_value(self.estimate)])
            .render()
    }
}

/// Estimate with `method` at `at`.
pub fn compute(method: Method, xs: &[f64], ys: &[f64], at: f64) -> Result<EstimateReport> {
    let estimate = method.estimate(xs, ys, at)?;

    let extrapolated = is_extrapolation(xs, at);
    if extrapolated {
        warn!(
            method = %method,
            at,
            "Query lies outside the sample range; the estimate is an extrapolation"
        );
    }

    info!(method = %method, at, estimate, "Estimate complete");
    Ok(EstimateReport {
        method,
        at,
        estimate,
        extrapolated,
    })
}

/// Run the estimate command
pub fn run(
    config: &CliConfig,
    method: Option<Method>,
    xs: &[f64],
    ys: &[f64],
    at: f64,
) -> Result<()> {
    let report = compute(method.unwrap_or(config.default_method), xs, ys, at)?;
    println!("{}", render(&report, config.output_format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use approx::assert_relative_eq;
    use growth_core::types::EstimationError;

    const XS: [f64; 5] = [0.0, 1.0, 2.0, 3.0, 4.0];
    const YS: [f64; 5] = [1.0, 3.0, 7.0, 13.0, 21.0];

    #[test]
    fn test_compute_inside_range() {
        let report = compute(Method::Newton, &XS, &YS, 2.5).unwrap();
        assert_relative_eq!(report.estimate, 9.75, epsilon = 1e-12);
        assert!(!report.extrapolated);
    }

    #[test]
    fn test_compute_flags_extrapolation() {
        let report = compute(Method::Lagrange, &XS, &YS, 5.0).unwrap();
        assert_relative_eq!(report.estimate, 31.0, epsilon = 1e-9);
        assert!(report.extrapolated);
        assert!(report.to_table().contains("(extrapolated)"));
    }

    #[test]
    fn test_compute_propagates_estimation_error() {
        let err = compute(Method::CubicSpline, &[0.0, 2.0, 1.0], &[0.0, 1.0, 2.0], 0.5).unwrap_err();
        assert!(matches!(
            err,
            CliError::Estimation(EstimationError::NonMonotonicInput { index: 2 })
        ));
    }
}
