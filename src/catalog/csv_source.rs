//! CSV-backed tool collections.
//!
//! Some tool libraries publish their metadata as a spreadsheet instead of
//! source code. Rows with `name,description,inputs,outputs` columns map
//! straight onto records with no parsing logic of their own.

use std::path::Path;

use anyhow::{Context, Result};

use crate::record::ToolRecord;

/// Loads every row of a CSV file as a [`ToolRecord`].
pub fn load_csv(path: &Path) -> Result<Vec<ToolRecord>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("failed to open {}", path.display()))?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: ToolRecord =
            row.with_context(|| format!("invalid row in {}", path.display()))?;
        records.push(record);
    }

    Ok(records)
}
