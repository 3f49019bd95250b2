//! Growth CLI - estimate growth from sparse observations
//!
//! # Commands
//!
//! - `growth estimate --x .. --y .. --at <t>` - Estimate at one point
//! - `growth curve --x .. --y ..` - Sample an estimator over a grid
//! - `growth compare --x .. --y .. --at <t>` - Evaluate every method at one point
//! - `growth fit --model <m> --x .. --y ..` - Fit a regression model
//! - `growth check` - Show the effective configuration

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use growth_core::Method;
use service_cli::commands::{self, fit::FitModel};
use service_cli::config::{build_config, CliArgs, LogLevel, OutputFormat};
use service_cli::{Result, VERSION};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Growth estimation from sparse observations
#[derive(Parser)]
#[command(name = "growth")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (default: growth.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

/// Observations shared by every estimating command.
#[derive(Args)]
struct SampleArgs {
    /// Sample x-coordinates, comma separated
    #[arg(long = "x", value_delimiter = ',', num_args = 1.., required = true, allow_negative_numbers = true)]
    xs: Vec<f64>,

    /// Sample y-values, comma separated
    #[arg(long = "y", value_delimiter = ',', num_args = 1.., required = true, allow_negative_numbers = true)]
    ys: Vec<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the value at one point
    Estimate {
        /// Estimation method (default from configuration)
        #[arg(short, long)]
        method: Option<Method>,

        #[command(flatten)]
        samples: SampleArgs,

        /// Query point
        #[arg(short, long, allow_negative_numbers = true)]
        at: f64,
    },

    /// Sample an estimator over an evenly spaced grid
    Curve {
        /// Estimation method (default from configuration)
        #[arg(short, long)]
        method: Option<Method>,

        #[command(flatten)]
        samples: SampleArgs,

        /// Number of grid points (default from configuration)
        #[arg(short, long)]
        steps: Option<usize>,

        /// Grid start (default: smallest x)
        #[arg(long, allow_negative_numbers = true, requires = "to")]
        from: Option<f64>,

        /// Grid end (default: largest x)
        #[arg(long, allow_negative_numbers = true, requires = "from")]
        to: Option<f64>,
    },

    /// Evaluate every method at one point
    Compare {
        #[command(flatten)]
        samples: SampleArgs,

        /// Query point
        #[arg(short, long, allow_negative_numbers = true)]
        at: f64,
    },

    /// Fit a regression model and print its parameters
    Fit {
        /// Regression model
        #[arg(short = 'M', long, value_enum, default_value = "linear")]
        model: FitModel,

        #[command(flatten)]
        samples: SampleArgs,
    },

    /// Check configuration
    Check,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = build_config(&CliArgs {
        config_file: cli.config.clone(),
        format: cli.format,
        log_level: cli.log_level,
        verbose: cli.verbose,
    })?;

    init_tracing(config.log_level.as_filter_str());

    info!(version = VERSION, "Growth CLI");
    debug!(
        default_method = %config.default_method,
        output_format = %config.output_format,
        curve_steps = config.curve_steps,
        log_level = %config.log_level,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Estimate {
            method,
            samples,
            at,
        } => commands::estimate::run(&config, method, &samples.xs, &samples.ys, at),
        Commands::Curve {
            method,
            samples,
            steps,
            from,
            to,
        } => commands::curve::run(&config, method, &samples.xs, &samples.ys, steps, (from, to)),
        Commands::Compare { samples, at } => {
            commands::compare::run(&config, &samples.xs, &samples.ys, at)
        }
        Commands::Fit { model, samples } => {
            commands::fit::run(&config, model, &samples.xs, &samples.ys)
        }
        Commands::Check => commands::check::run(&config),
    }
}
