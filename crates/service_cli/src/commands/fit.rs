//! Fit command implementation
//!
//! Fits a regression model and prints its parameters.

use clap::ValueEnum;
use growth_core::math::regression::{ExponentialFit, LinearFit, RegressionModel};
use growth_core::Method;
use serde::Serialize;
use tracing::info;

use crate::config::CliConfig;
use crate::output::{format_value, render, Report, Table};
use crate::Result;

/// Regression models accepted by `growth fit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FitModel {
    /// `y = slope·x + intercept`
    Linear,
    /// `y = amplitude·e^(slope·x)`
    Exponential,
}

impl From<FitModel> for Method {
    fn from(model: FitModel) -> Self {
        match model {
            FitModel::Linear => Method::LinearRegression,
            FitModel::Exponential => Method::ExponentialRegression,
        }
    }
}

/// Fitted model parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitReport {
    /// Model fitted
    pub model: Method,
    /// Slope (growth rate for the exponential model)
    pub slope: f64,
    /// Intercept (of `ln y` for the exponential model)
    pub intercept: f64,
    /// Coefficient of determination (in log space for the exponential model)
    pub r_squared: f64,
    /// `e^intercept`, exponential model only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amplitude: Option<f64>,
}

impl Report for FitReport {
    fn to_table(&self) -> String {
        let mut table = Table::new(["Parameter", "Value"])
            .row(["model", self.model.label()])
            .row(["slope".to_string(), format_value(self.slope)])
            .row(["intercept".to_string(), format_value(self.intercept)])
            .row(["r²".to_string(), format_value(self.r_squared)]);
        if let Some(amplitude) = self.amplitude {
            table = table.row(["amplitude".to_string(), format_value(amplitude)]);
        }
        table.render()
    }
}

/// Fit `model` to the samples.
pub fn compute(model: FitModel, xs: &[f64], ys: &[f64]) -> Result<FitReport> {
    let report = match model {
        FitModel::Linear => {
            let fit = LinearFit::fit(xs, ys)?;
            let (slope, intercept) = fit.params();
            FitReport {
                model: model.into(),
                slope,
                intercept,
                r_squared: fit.r_squared(),
                amplitude: None,
            }
        }
        FitModel::Exponential => {
            let fit = ExponentialFit::fit(xs, ys)?;
            let (slope, intercept) = fit.params();
            FitReport {
                model: model.into(),
                slope,
                intercept,
                r_squared: fit.r_squared(),
                amplitude: Some(fit.amplitude()),
            }
        }
    };

    info!(
        model = %report.model,
        slope = report.slope,
        intercept = report.intercept,
        r_squared = report.r_squared,
        "Fit complete"
    );
    Ok(report)
}

/// Run the fit command
pub fn run(config: &CliConfig, model: FitModel, xs: &[f64], ys: &[f64]) -> Result<()> {
    let report = compute(model, xs, ys)?;
    println!("{}", render(&report, config.output_format)?);
    Ok(())
}
