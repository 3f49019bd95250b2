//! Growth CLI - command-line front end for the growth estimation engine
//!
//! The binary (`growth`) parses arguments, merges configuration, installs
//! logging and hands each subcommand to [`commands`]. Everything it computes
//! comes from `growth_core`.
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate is the only one that performs I/O.
//! Command modules return serialisable reports so they can be exercised
//! without capturing stdout.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, Result};

/// Version reported by `growth check`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
