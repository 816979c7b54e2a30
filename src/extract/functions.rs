//! Function-based tool extraction.
//!
//! A tool function carries a labeled docstring: `Name:` and `Description:`
//! capture the rest of their own line; `Parameters:` and `Returns:` open
//! multi-line sections whose non-empty `:`-containing lines are captured.
//! Functions without a docstring are not candidates at all, unlike the
//! class-based path where a missing docstring merely triggers the signature
//! fallback for the inputs/outputs fields.
//!
//! This labeled convention is deliberately distinct from the sectioned
//! convention in [`classes`](crate::extract::classes): it has no decorative
//! underline handling, and its returns section keeps exactly one line.

use rustpython_parser::ast;
use tracing::debug;

use crate::extract::signature::{describe_inputs, describe_output, SignatureStyle};
use crate::extract::{docstring, ParsedModule};
use crate::record::ToolRecord;

/// Extracts every documented function from a module, in document order.
pub fn extract_function_tools(module: &ParsedModule) -> Vec<ToolRecord> {
    module
        .all_statements()
        .into_iter()
        .filter_map(|stmt| match stmt {
            ast::Stmt::FunctionDef(func) => function_tool(func, module.source()),
            _ => None,
        })
        .collect()
}

/// Builds a record for one function, or `None` when it has no docstring.
///
/// The record name is always the function's syntactic identifier. A
/// docstring-declared `Name:` is parsed but never overrides it; a
/// disagreement is only logged.
fn function_tool(func: &ast::StmtFunctionDef, source: &str) -> Option<ToolRecord> {
    let doc = docstring(&func.body).filter(|doc| !doc.is_empty())?;
    let sections = parse_labeled_docstring(doc);
    let name = func.name.to_string();

    if let Some(declared) = &sections.name {
        if declared != &name {
            debug!(
                function = %name,
                declared = %declared,
                "docstring-declared name differs from function name; keeping the function name"
            );
        }
    }

    let inputs = if sections.parameters.is_empty() {
        describe_inputs(
            &func.args,
            source,
            SignatureStyle::Multiline { with_defaults: false },
        )
    } else {
        sections.parameters.join("\n")
    };
    let outputs = sections
        .returns
        .unwrap_or_else(|| describe_output(func.returns.as_deref(), source));

    Some(ToolRecord {
        name,
        description: sections.description.unwrap_or_default(),
        inputs,
        outputs,
    })
}

/// Parsed sections of a labeled docstring. `None` means the section was
/// absent, distinct from present-but-blank.
#[derive(Debug, Default)]
struct LabeledSections {
    name: Option<String>,
    description: Option<String>,
    parameters: Vec<String>,
    returns: Option<String>,
}

/// Scans the docstring top to bottom. Labels are matched case-sensitively
/// as stripped-line prefixes. A line inside a section that matches no label
/// and has no `:` contributes nothing but does not close the section.
/// Within `Returns:`, a later matching line overwrites an earlier one, so
/// exactly one descriptive returns line survives.
fn parse_labeled_docstring(doc: &str) -> LabeledSections {
    #[derive(Clone, Copy, PartialEq)]
    enum Section {
        None,
        Name,
        Description,
        Parameters,
        Returns,
    }

    let mut sections = LabeledSections::default();
    let mut current = Section::None;

    for raw in doc.trim().lines() {
        let line = raw.trim();

        if let Some(rest) = line.strip_prefix("Name:") {
            current = Section::Name;
            sections.name = Some(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix("Description:") {
            current = Section::Description;
            sections.description = Some(rest.trim().to_string());
        } else if line.starts_with("Parameters:") {
            current = Section::Parameters;
        } else if line.starts_with("Returns:") {
            current = Section::Returns;
        } else if current == Section::Parameters && !line.is_empty() && line.contains(':') {
            sections.parameters.push(line.to_string());
        } else if current == Section::Returns && !line.is_empty() && line.contains(':') {
            sections.returns = Some(line.to_string());
        }
    }

    sections
}
