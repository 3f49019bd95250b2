//! Check command implementation
//!
//! Prints the effective configuration and the available methods.

use growth_core::Method;
use serde::Serialize;
use tracing::info;

use crate::config::CliConfig;
use crate::output::{render, Report, Table};
use crate::{Result, VERSION};

/// Effective configuration plus build information.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    /// `growth` version
    pub version: &'static str,
    /// Configuration after merging every source
    pub config: CliConfig,
    /// Methods this build supports
    pub methods: Vec<Method>,
}

impl Report for CheckReport {
    fn to_table(&self) -> String {
        let methods: Vec<&str> = self.methods.iter().map(|m| m.name()).collect();
        Table::new(["Setting", "Value"])
            .row(["version", self.version])
            .row(["default_method".to_string(), self.config.default_method.to_string()])
            .row(["output_format".to_string(), self.config.output_format.to_string()])
            .row(["curve_steps".to_string(), self.config.curve_steps.to_string()])
            .row(["log_level".to_string(), self.config.log_level.to_string()])
            .row(["methods".to_string(), methods.join(", ")])
            .render()
    }
}

/// Snapshot `config` for display.
pub fn compute(config: &CliConfig) -> CheckReport {
    CheckReport {
        version: VERSION,
        config: config.clone(),
        methods: Method::ALL.to_vec(),
    }
}

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    info!("Checking configuration...");
    let report = compute(config);
    println!("{}", render(&report, config.output_format)?);
    info!("Configuration OK");
    Ok(())
}
