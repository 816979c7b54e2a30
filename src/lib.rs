//! # toolharvest
//!
//! Static extraction of tool metadata from Python tool libraries.
//!
//! toolharvest analyzes Python sources without executing them and produces
//! normalized [`ToolRecord`]s (name, description, inputs, outputs). Three
//! docstring conventions are supported:
//!
//! - **classes**: tool classes carrying annotated `name`/`description`
//!   attributes and a `_run` method with a numpy-style docstring
//! - **functions**: top-level functions with labeled `Name:`/`Description:`/
//!   `Parameters:`/`Returns:` docstrings
//! - **delimited**: functions with free-form docstrings split at `Args:` and
//!   `Returns:` markers
//!
//! CSV-backed collections are loaded directly, and a catalog builder
//! aggregates any mix of sources into one namespaced record list.
//!
//! # Example
//!
//! ```
//! use toolharvest::extract::{extract_class_tools, ParsedModule};
//!
//! let source = r#"
//! class MolWt:
//!     name: str = "CalculateMolWt"
//!     description: str = "Calculate molecular weight."
//!
//!     def _run(self, smiles: str) -> float:
//!         return 0.0
//! "#;
//!
//! let module = ParsedModule::parse(source, "tools.py").unwrap();
//! let tools = extract_class_tools(&module);
//! assert_eq!(tools[0].name, "CalculateMolWt");
//! assert_eq!(tools[0].inputs, "smiles: str");
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod record;
pub mod util;

pub use catalog::CatalogBuilder;
pub use config::{CatalogConfig, CollectionConfig, CollectionKind};
pub use error::ExtractError;
pub use record::ToolRecord;

/// Version of the toolharvest crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the toolharvest crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
