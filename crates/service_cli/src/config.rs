//! CLI configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use growth_core::Method;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Config file read when `--config` is not given. Missing is not an error.
pub const DEFAULT_CONFIG_FILE: &str = "growth.toml";

/// Points sampled by `growth curve` when neither flag nor config say otherwise.
pub const DEFAULT_CURVE_STEPS: usize = 200;

const ENV_METHOD: &str = "GROWTH_METHOD";
const ENV_FORMAT: &str = "GROWTH_FORMAT";
const ENV_CURVE_STEPS: &str = "GROWTH_CURVE_STEPS";
const ENV_LOG_LEVEL: &str = "GROWTH_LOG_LEVEL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level name.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unknown output format name.
    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidFormat(String),

    /// Unknown estimation method name.
    #[error("{0}")]
    InvalidMethod(#[from] growth_core::estimation::ParseMethodError),

    /// Curve sampling needs both endpoints.
    #[error("Invalid curve_steps: {0}. Must be at least 2")]
    InvalidCurveSteps(usize),

    /// Config file missing or malformed.
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Environment variable present but unparseable.
    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels accepted by `--log-level` and `GROWTH_LOG_LEVEL`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything
    Trace,
    /// Dispatch decisions
    Debug,
    /// Progress messages
    Info,
    /// Extrapolation notices and above
    #[default]
    Warn,
    /// Failures only
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Box-drawn table for terminals
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Effective CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Method used when `--method` is omitted
    pub default_method: Method,
    /// Output format
    pub output_format: OutputFormat,
    /// Grid size for `growth curve`
    pub curve_steps: usize,
    /// Log level
    pub log_level: LogLevel,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_method: Method::CubicSpline,
            output_format: OutputFormat::Table,
            curve_steps: DEFAULT_CURVE_STEPS,
            log_level: LogLevel::Warn,
        }
    }
}

impl CliConfig {
    /// Create a new CliConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields for every variable `lookup` returns a value for.
    fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(method) = lookup(ENV_METHOD) {
            self.default_method = Method::from_str(&method)?;
        }

        if let Some(format) = lookup(ENV_FORMAT) {
            self.output_format = OutputFormat::from_str(&format)?;
        }

        if let Some(steps) = lookup(ENV_CURVE_STEPS) {
            self.curve_steps = steps.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!(
                    "{} is not a positive integer: {}",
                    ENV_CURVE_STEPS, steps
                ))
            })?;
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }

        Ok(())
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.curve_steps < 2 {
            return Err(ConfigError::InvalidCurveSteps(self.curve_steps));
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if let Some(format) = cli.format {
            self.output_format = format;
        }
        if let Some(level) = cli.log_level {
            self.log_level = level;
        } else if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
    }
}

/// Global CLI arguments that feed the configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path; `None` means the optional default file
    pub config_file: Option<PathBuf>,
    /// Output format override
    pub format: Option<OutputFormat>,
    /// Log level override
    pub log_level: Option<LogLevel>,
    /// `--verbose` raises the log level to debug unless one was given
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with_env(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                CliConfig::from_file(default_path)?
            } else {
                CliConfig::default()
            }
        }
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli);

    // Final validation
    config.validate()?;

    Ok(config)
}
