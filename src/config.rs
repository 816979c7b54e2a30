//! Catalog configuration.
//!
//! A catalog file is a TOML document listing the collections to harvest:
//!
//! ```toml
//! [[collections]]
//! name = "cactus"
//! kind = "classes"
//! path = "vendor/cactus-tools"
//!
//! [[collections]]
//! name = "chemlib"
//! kind = "functions"
//! path = "vendor/chemlib"
//! manifest = "vendor/chemlib/tools.json"
//!
//! [[collections]]
//! name = "chemcrow"
//! kind = "csv"
//! path = "data/chemcrow.csv"
//! ```
//!
//! Each collection's `name` becomes the namespace prefix of every record it
//! produces.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The catalog file could not be read.
    #[error("failed to read {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not valid TOML or has the wrong shape.
    #[error("failed to parse {path}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// The catalog parsed but its contents are inconsistent.
    #[error("configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Which extraction convention a collection uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    /// Python classes with `name`/`description` attributes and `_run`.
    Classes,
    /// Python functions with labeled docstrings.
    Functions,
    /// Python functions with `Args:`/`Returns:` delimited docstrings.
    Delimited,
    /// A CSV file with `name,description,inputs,outputs` columns.
    Csv,
}

/// One source collection of tool definitions.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionConfig {
    /// Collection name, used as the record namespace prefix.
    pub name: String,
    /// Extraction convention.
    pub kind: CollectionKind,
    /// Directory of Python files, or the CSV file itself for `csv`.
    pub path: PathBuf,
    /// Optional `tools.json` manifest restricting which files are parsed.
    #[serde(default)]
    pub manifest: Option<PathBuf>,
}

/// The full catalog: every collection to harvest, in order.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub collections: Vec<CollectionConfig>,
}

impl CatalogConfig {
    /// Loads and validates a catalog file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|err| ConfigError::Read {
            path: path.display().to_string(),
            source: err,
        })?;
        let config: Self = toml::from_str(&text).map_err(|err| ConfigError::Parse {
            path: path.display().to_string(),
            source: err,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that collection names are usable as namespace prefixes and
    /// unique, and that options fit the collection kind.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();

        for collection in &self.collections {
            if collection.name.is_empty() {
                return Err(ConfigError::ValidationFailed(
                    "collection name must not be empty".to_string(),
                ));
            }
            if collection.name.contains('/') {
                return Err(ConfigError::ValidationFailed(format!(
                    "collection name '{}' must not contain '/'",
                    collection.name
                )));
            }
            if !seen.insert(collection.name.as_str()) {
                return Err(ConfigError::ValidationFailed(format!(
                    "duplicate collection name '{}'",
                    collection.name
                )));
            }
            if collection.kind == CollectionKind::Csv && collection.manifest.is_some() {
                return Err(ConfigError::ValidationFailed(format!(
                    "collection '{}': a csv collection cannot take a manifest",
                    collection.name
                )));
            }
        }

        Ok(())
    }
}
