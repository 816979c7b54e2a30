//! Catalog serialization: a human-readable text report and a line-delimited
//! JSON export.

use std::io::Write;

use anyhow::{Context, Result};

use crate::record::ToolRecord;

/// Writes the plain-text catalog report.
///
/// Each record is a numbered block; inputs that span multiple lines are
/// re-joined with tabs so every block keeps a fixed shape.
pub fn write_text_report<W: Write>(writer: &mut W, records: &[ToolRecord]) -> Result<()> {
    for (index, record) in records.iter().enumerate() {
        let inputs = record.inputs.split('\n').collect::<Vec<_>>().join("\t");

        writeln!(writer, "{}", index)?;
        writeln!(writer, "Name: {}", record.name)?;
        writeln!(writer, "Description: {}", record.description)?;
        writeln!(writer, "Inputs: ")?;
        writeln!(writer, "\t{}", inputs)?;
        writeln!(writer, "Outputs:")?;
        writeln!(writer, "\t{}", record.outputs)?;
    }

    Ok(())
}

/// Writes one JSON object per line.
pub fn write_jsonl<W: Write>(writer: &mut W, records: &[ToolRecord]) -> Result<()> {
    for record in records {
        let line = serde_json::to_string(record).context("failed to serialize record")?;
        writeln!(writer, "{}", line)?;
    }

    Ok(())
}
