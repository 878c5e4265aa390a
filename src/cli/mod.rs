//! CLI module for the circuit-style binary

pub mod commands;
pub mod error;
pub mod output;

pub use error::CliError;
pub use output::ReportFormat;
