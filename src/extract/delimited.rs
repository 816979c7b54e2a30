//! Delimited-docstring tool extraction.
//!
//! The third docstring convention: the literal markers `Args:` and
//! `Returns:` split the docstring into description, inputs, and outputs by
//! position. When either marker is missing (or they appear out of order),
//! the whole docstring becomes the description and the signature is rendered
//! verbosely instead, default values included. Functions without a docstring
//! are skipped.

use rustpython_parser::ast;

use crate::extract::signature::{describe_inputs, describe_output, SignatureStyle};
use crate::extract::{docstring, ParsedModule};
use crate::record::ToolRecord;

const ARGS_MARKER: &str = "Args:";
const RETURNS_MARKER: &str = "Returns:";

/// Extracts every documented function from a module using the delimited
/// convention, in document order.
pub fn extract_delimited_tools(module: &ParsedModule) -> Vec<ToolRecord> {
    module
        .all_statements()
        .into_iter()
        .filter_map(|stmt| match stmt {
            ast::Stmt::FunctionDef(func) => delimited_tool(func, module.source()),
            _ => None,
        })
        .collect()
}

fn delimited_tool(func: &ast::StmtFunctionDef, source: &str) -> Option<ToolRecord> {
    let doc = docstring(&func.body).filter(|doc| !doc.is_empty())?;
    let name = func.name.to_string();

    if let Some((description, inputs, outputs)) = split_delimited(doc) {
        return Some(ToolRecord {
            name,
            description,
            inputs,
            outputs,
        });
    }

    Some(ToolRecord {
        name,
        description: doc.trim().to_string(),
        inputs: describe_inputs(
            &func.args,
            source,
            SignatureStyle::Multiline { with_defaults: true },
        ),
        outputs: describe_output(func.returns.as_deref(), source),
    })
}

/// Splits on the first `Args:` and `Returns:` occurrences. Both must be
/// present with `Args:` first; each segment is trimmed of surrounding
/// whitespace.
fn split_delimited(doc: &str) -> Option<(String, String, String)> {
    let args_idx = doc.find(ARGS_MARKER)?;
    let returns_idx = doc.find(RETURNS_MARKER)?;
    if returns_idx < args_idx {
        return None;
    }

    let description = doc[..args_idx].trim().to_string();
    let inputs = doc[args_idx + ARGS_MARKER.len()..returns_idx].trim().to_string();
    let outputs = doc[returns_idx + RETURNS_MARKER.len()..].trim().to_string();

    Some((description, inputs, outputs))
}
