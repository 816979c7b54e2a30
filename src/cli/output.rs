use anyhow::{Context, Result};

use crate::catalog::report;
use crate::record::ToolRecord;

/// Output format for extraction results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON array
    Json,
    /// One JSON object per line
    Jsonl,
    /// The numbered text-report layout
    Human,
}

/// Formats extracted records for terminal or file output
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Renders the records in the configured format.
    pub fn format_records(&self, records: &[ToolRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(records).context("failed to serialize records")
            }
            OutputFormat::Jsonl => {
                let mut buffer = Vec::new();
                report::write_jsonl(&mut buffer, records)?;
                String::from_utf8(buffer).context("report is not valid UTF-8")
            }
            OutputFormat::Human => {
                let mut buffer = Vec::new();
                report::write_text_report(&mut buffer, records)?;
                String::from_utf8(buffer).context("report is not valid UTF-8")
            }
        }
    }
}
