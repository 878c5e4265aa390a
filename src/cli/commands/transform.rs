//! Transform command implementation

use std::path::PathBuf;

use tracing::info;

use super::{load_config, read_document, write_document};
use crate::cli::error::CliError;
use crate::cli::output::{ReportFormat, format_report};
use crate::transform::{StyleTransformer, TransformReport};

/// Arguments for the `transform` command
#[derive(Debug, Clone)]
pub struct TransformArgs {
    /// Source style file, or "-" for stdin
    pub input: String,
    /// Derived style file, or "-" for stdout
    pub output: String,
    /// Optional TOML palette/config file
    pub config: Option<PathBuf>,
    /// Overrides the configured style name
    pub name: Option<String>,
    /// How to print the report (to stderr)
    pub report: ReportFormat,
}

/// Handle the `transform` command
pub async fn handle_transform(args: &TransformArgs) -> Result<TransformReport, CliError> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(name) = &args.name {
        config.style_name = name.clone();
        config.validate()?;
    }

    let document = read_document(&args.input).await?;
    let result = StyleTransformer::with_config(config).transform(&document);
    write_document(&args.output, &result.document).await?;

    info!("Wrote derived style to {}", args.output);
    if let Some(text) = format_report(&result.report, args.report) {
        eprintln!("{}", text);
    }

    Ok(result.report)
}
