//! Output formatting for CLI

use std::fmt;
use std::str::FromStr;

use crate::transform::{LayerClassification, TransformReport};

/// How the transform report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Compact,
    Pretty,
    Json,
    /// Print nothing
    None,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Compact => write!(f, "compact"),
            ReportFormat::Pretty => write!(f, "pretty"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::None => write!(f, "none"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(ReportFormat::Compact),
            "pretty" => Ok(ReportFormat::Pretty),
            "json" => Ok(ReportFormat::Json),
            "none" | "quiet" => Ok(ReportFormat::None),
            _ => Err(format!("Unknown report format: {}", s)),
        }
    }
}

/// Render a transform report, or `None` when nothing should be printed
pub fn format_report(report: &TransformReport, format: ReportFormat) -> Option<String> {
    match format {
        ReportFormat::Compact => Some(format_compact_report(report)),
        ReportFormat::Pretty => Some(format_pretty_report(report)),
        ReportFormat::Json => serde_json::to_string_pretty(report).ok(),
        ReportFormat::None => None,
    }
}

/// One-line summary
pub fn format_compact_report(report: &TransformReport) -> String {
    format!(
        "✅ Restyled {} of {} layer(s), {} unclassified",
        report.changed_layers,
        report.total_layers,
        report.unclassified.len()
    )
}

/// Per-category breakdown
pub fn format_pretty_report(report: &TransformReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n✅ Transformed {} layer(s), {} changed\n",
        report.total_layers, report.changed_layers
    ));

    output.push_str("\nLayers by category:\n");
    for (kind, count) in &report.by_category {
        output.push_str(&format!("  {:<14} {}\n", kind.as_str(), count));
    }

    if !report.unclassified.is_empty() {
        output.push_str("\n⚠️  Unclassified (left unchanged):\n");
        for id in &report.unclassified {
            output.push_str(&format!("  - {}\n", id));
        }
    }

    output
}

/// Two-column table of layer ids and categories
pub fn format_classification_table(listing: &[LayerClassification]) -> String {
    let width = listing
        .iter()
        .map(|entry| entry.id.len())
        .max()
        .unwrap_or(0)
        .max("LAYER".len());

    let mut output = format!("{:<width$}  CATEGORY\n", "LAYER", width = width);
    for entry in listing {
        output.push_str(&format!(
            "{:<width$}  {}\n",
            entry.id,
            entry.category,
            width = width
        ));
    }
    output
}
