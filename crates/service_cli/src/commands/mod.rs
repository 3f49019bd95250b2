//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands expose a
//! `compute` function returning a serialisable report and a `run` function
//! that prints it in the configured format.

pub mod check;
pub mod compare;
pub mod curve;
pub mod estimate;
pub mod fit;
