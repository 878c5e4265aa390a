//! Classify command implementation

use super::read_document;
use crate::cli::error::CliError;
use crate::cli::output::format_classification_table;
use crate::transform::{LayerClassification, StyleTransformer};

/// Handle the `classify` command: print every layer's category to stdout
pub async fn handle_classify(input: &str, format: &str) -> Result<(), CliError> {
    let document = read_document(input).await?;
    let listing = StyleTransformer::new().classify_document(&document);
    print!("{}", render_classification(&listing, format)?);
    Ok(())
}

/// Render a classification listing as `table` or `json`
pub fn render_classification(
    listing: &[LayerClassification],
    format: &str,
) -> Result<String, CliError> {
    match format {
        "table" => Ok(format_classification_table(listing)),
        "json" => {
            let json = serde_json::to_string_pretty(listing).map_err(|e| {
                CliError::InvalidArgument(format!("Failed to render classification: {}", e))
            })?;
            Ok(format!("{}\n", json))
        }
        _ => Err(CliError::InvalidArgument(format!(
            "Unknown format: {}",
            format
        ))),
    }
}
