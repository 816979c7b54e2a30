//! Aggregation of extraction sources into one catalog.
//!
//! The catalog builder drives the extractors over every configured
//! collection, namespaces each record with its collection name, and hands
//! back one flat record list in collection-then-document order. Files are
//! independent of each other: a file that fails to parse is logged and
//! skipped without affecting the rest of its collection.

pub mod csv_source;
pub mod report;

use std::collections::BTreeSet;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ignore::WalkBuilder;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::{CatalogConfig, CollectionConfig, CollectionKind};
use crate::extract::{
    extract_class_tools, extract_delimited_tools, extract_function_tools, ParsedModule,
};
use crate::record::ToolRecord;

/// Drives all configured collections and assembles the combined catalog.
pub struct CatalogBuilder {
    config: CatalogConfig,
}

impl CatalogBuilder {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    /// Harvests every collection. Record names come back namespaced as
    /// `<collection>/<name>`.
    pub fn build(&self) -> Result<Vec<ToolRecord>> {
        let mut records = Vec::new();

        for collection in &self.config.collections {
            let found = self
                .harvest(collection)
                .with_context(|| format!("collection '{}' failed", collection.name))?;

            info!(
                collection = %collection.name,
                tools = found.len(),
                "collection harvested"
            );

            records.extend(
                found
                    .into_iter()
                    .map(|record| record.namespaced(&collection.name)),
            );
        }

        Ok(records)
    }

    fn harvest(&self, collection: &CollectionConfig) -> Result<Vec<ToolRecord>> {
        if collection.kind == CollectionKind::Csv {
            return csv_source::load_csv(&collection.path);
        }

        let files = match &collection.manifest {
            Some(manifest) => manifest_files(&collection.path, manifest)?,
            None => python_files(&collection.path)?,
        };

        let mut records = Vec::new();
        for file in files {
            let source = fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;

            let module = match ParsedModule::parse(source, &file.display().to_string()) {
                Ok(module) => module,
                Err(err) => {
                    warn!(file = %file.display(), error = %err, "skipping unparseable file");
                    continue;
                }
            };

            let extracted = match collection.kind {
                CollectionKind::Classes => extract_class_tools(&module),
                CollectionKind::Functions => extract_function_tools(&module),
                CollectionKind::Delimited => extract_delimited_tools(&module),
                CollectionKind::Csv => unreachable!("csv handled above"),
            };

            debug!(file = %file.display(), tools = extracted.len(), "file extracted");
            records.extend(extracted);
        }

        Ok(records)
    }
}

/// All `.py` files under a collection directory, recursively, skipping
/// `__init__.py`. Sorted so runs are deterministic regardless of directory
/// enumeration order.
fn python_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("collection path is not a directory: {}", dir.display());
    }

    let mut files = Vec::new();
    for result in WalkBuilder::new(dir).hidden(false).git_ignore(false).build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "failed to read directory entry");
                continue;
            }
        };
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("py") {
            continue;
        }
        if path.file_name().and_then(|name| name.to_str()) == Some("__init__.py") {
            continue;
        }
        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

#[derive(Deserialize)]
struct ManifestEntry {
    path: String,
}

/// Reads a `tools.json` manifest (a map of entries each carrying a `path`
/// relative to the collection directory) and returns the referenced files,
/// deduplicated and sorted.
fn manifest_files(base: &Path, manifest: &Path) -> Result<Vec<PathBuf>> {
    let text = fs::read_to_string(manifest)
        .with_context(|| format!("failed to read manifest {}", manifest.display()))?;
    let entries: HashMap<String, ManifestEntry> = serde_json::from_str(&text)
        .with_context(|| format!("invalid manifest {}", manifest.display()))?;

    let paths: BTreeSet<PathBuf> = entries
        .into_values()
        .map(|entry| base.join(entry.path))
        .collect();

    Ok(paths.into_iter().collect())
}
