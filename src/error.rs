//! Error types for the extraction core.
//!
//! The core distinguishes exactly one fatal condition: the source text is not
//! valid Python, so no records can be produced from that file. Everything
//! else (missing docstrings, missing sections, unresolved constants,
//! declarations that are not tool-shaped) is expected traversal noise and is
//! handled by per-declaration skip or fallback rules, never as an error.

use thiserror::Error;

/// Errors surfaced by the extraction core.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The module source failed to parse. Callers must skip the whole file;
    /// this is distinct from "parsed fine but zero tools found".
    #[error("invalid Python syntax in {file}")]
    Parse {
        file: String,
        #[source]
        source: rustpython_parser::ParseError,
    },
}
