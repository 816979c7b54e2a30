//! Class-based tool extraction.
//!
//! A tool class declares `name` and `description` as annotated class
//! attributes (inline literals, or bare identifiers resolved through the
//! module constant table) and implements a `_run` method. Parameter and
//! return descriptions come from the `_run` docstring's numpy-style
//! `Parameters`/`Returns` sections, falling back to static signature
//! introspection when the docstring is absent or yields nothing usable.
//!
//! Classes missing any of the three ingredients are silently skipped; most
//! classes in a module are not tools and that is not an error.

use rustpython_parser::ast;

use crate::extract::constants::ConstantTable;
use crate::extract::signature::{describe_inputs, describe_output, SignatureStyle};
use crate::extract::{docstring, string_literal, ParsedModule};
use crate::record::ToolRecord;

/// Extracts every qualifying tool class from a module, in document order.
/// A module with no tool classes yields an empty list, never an error.
pub fn extract_class_tools(module: &ParsedModule) -> Vec<ToolRecord> {
    let constants = ConstantTable::from_statements(module.statements());

    module
        .all_statements()
        .into_iter()
        .filter_map(|stmt| match stmt {
            ast::Stmt::ClassDef(class) => class_tool(class, &constants, module.source()),
            _ => None,
        })
        .collect()
}

/// Builds a record for one class, or `None` when the class is not a tool:
/// the completeness invariant requires a non-empty resolved `name`, a
/// non-empty resolved `description`, and a `_run` method.
fn class_tool(
    class: &ast::StmtClassDef,
    constants: &ConstantTable,
    source: &str,
) -> Option<ToolRecord> {
    let name = attribute_value(class, "name", constants)?;
    let description = attribute_value(class, "description", constants)?;
    let run = run_method(class)?;
    let (inputs, outputs) = describe_run(run, source);

    Some(ToolRecord {
        name,
        description,
        inputs,
        outputs,
    })
}

/// Resolves an annotated class attribute (`name: str = ...`) to its string
/// value. Literal values are taken verbatim; a bare identifier is looked up
/// in the constant table. When the attribute appears more than once, the
/// last resolvable occurrence wins. Unresolved or empty values yield `None`.
fn attribute_value(
    class: &ast::StmtClassDef,
    attribute: &str,
    constants: &ConstantTable,
) -> Option<String> {
    let mut resolved = None;

    for stmt in &class.body {
        let ast::Stmt::AnnAssign(assign) = stmt else {
            continue;
        };
        let ast::Expr::Name(target) = assign.target.as_ref() else {
            continue;
        };
        if target.id.as_str() != attribute {
            continue;
        }
        let Some(value) = assign.value.as_deref() else {
            continue;
        };

        if let Some(text) = string_literal(value) {
            resolved = Some(text.to_string());
        } else if let ast::Expr::Name(reference) = value {
            if let Some(text) = constants.get(reference.id.as_str()) {
                resolved = Some(text.to_string());
            }
        }
    }

    resolved.filter(|text| !text.is_empty())
}

/// The first `_run` method among the class's direct children.
fn run_method(class: &ast::StmtClassDef) -> Option<&ast::StmtFunctionDef> {
    class.body.iter().find_map(|stmt| match stmt {
        ast::Stmt::FunctionDef(func) if func.name.as_str() == "_run" => Some(func),
        _ => None,
    })
}

/// Inputs/outputs for a `_run` method: docstring sections when they produce
/// anything, otherwise the inline signature rendering. The fallback is a
/// hard requirement; many tool definitions omit structured docstrings.
fn describe_run(func: &ast::StmtFunctionDef, source: &str) -> (String, String) {
    if let Some(doc) = docstring(&func.body) {
        let (inputs, outputs) = parse_sectioned_docstring(doc);
        if !inputs.is_empty() || !outputs.is_empty() {
            return (inputs, outputs);
        }
    }

    (
        describe_inputs(&func.args, source, SignatureStyle::Inline),
        describe_output(func.returns.as_deref(), source),
    )
}

/// Splits a docstring into `Parameters`/`Returns` sections.
///
/// A line whose stripped text starts with `Parameters` or `Returns` opens
/// the corresponding section; a decorative dash underline is skipped. Inside
/// the parameters section only non-empty lines containing a `:` (and not
/// starting with `-`) are kept, verbatim; inside the returns section any
/// non-empty line not starting with `-` is kept. Inputs join with `", "`,
/// outputs with `" "`.
fn parse_sectioned_docstring(doc: &str) -> (String, String) {
    #[derive(PartialEq)]
    enum Section {
        None,
        Parameters,
        Returns,
    }

    let mut section = Section::None;
    let mut inputs: Vec<&str> = Vec::new();
    let mut outputs: Vec<&str> = Vec::new();

    for raw in doc.lines() {
        let line = raw.trim();

        if line.starts_with("Parameters") {
            section = Section::Parameters;
            continue;
        }
        if line.starts_with("Returns") {
            section = Section::Returns;
            continue;
        }
        if line.starts_with("---") {
            continue;
        }

        match section {
            Section::Parameters
                if !line.is_empty() && !line.starts_with('-') && line.contains(':') =>
            {
                inputs.push(line);
            }
            Section::Returns if !line.is_empty() && !line.starts_with('-') => {
                outputs.push(line);
            }
            _ => {}
        }
    }

    (inputs.join(", "), outputs.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(source: &str) -> Vec<ToolRecord> {
        let module = ParsedModule::parse(source, "<test>").unwrap();
        extract_class_tools(&module)
    }

    const MOL_WT_TOOL: &str = r#"
class CalculateMolWt:
    name: str = "CalculateMolWt"
    description: str = "Calculate molecular weight."

    def _run(self, smiles: str) -> float:
        """Calculate molecular weight.

        Parameters
        ----------
        smiles : str
            SMILES string of the molecule

        Returns
        -------
        float
            The molecular weight
        """
        pass
"#;

    #[test]
    fn test_docstring_sections_extracted() {
        let tools = extract(MOL_WT_TOOL);
        assert_eq!(tools.len(), 1);

        let tool = &tools[0];
        assert_eq!(tool.name, "CalculateMolWt");
        assert_eq!(tool.description, "Calculate molecular weight.");
        // The indented prose continuation has no `:` and is dropped.
        assert_eq!(tool.inputs, "smiles : str");
        assert_eq!(tool.outputs, "float The molecular weight");
    }

    #[test]
    fn test_decorative_underlines_skipped() {
        let tools = extract(MOL_WT_TOOL);
        assert!(!tools[0].inputs.contains("---"));
        assert!(!tools[0].outputs.contains("---"));
    }

    #[test]
    fn test_constant_resolution() {
        let source = r#"
DESC = "hello"

class Tool:
    name: str = "tool"
    description: str = DESC

    def _run(self):
        pass
"#;
        let tools = extract(source);
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].description, "hello");
    }

    #[test]
    fn test_unresolved_constant_excludes_class() {
        let source = r#"
class Tool:
    name: str = "tool"
    description: str = MISSING

    def _run(self):
        pass
"#;
        assert!(extract(source).is_empty());
    }

    #[test]
    fn test_signature_fallback_when_no_docstring() {
        let source = r#"
class Tool:
    name: str = "tool"
    description: str = "desc"

    def _run(self, a: int, b: str = "x") -> str:
        pass
"#;
        let tools = extract(source);
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].inputs, "a: int, b: str");
        assert_eq!(tools[0].outputs, "str");
    }

    #[test]
    fn test_signature_fallback_when_docstring_has_no_sections() {
        let source = r#"
class Tool:
    name: str = "tool"
    description: str = "desc"

    def _run(self, a: int):
        """Just prose, no structured sections."""
        pass
"#;
        let tools = extract(source);
        assert_eq!(tools[0].inputs, "a: int");
        assert_eq!(tools[0].outputs, "");
    }

    #[test]
    fn test_class_without_run_is_excluded() {
        let source = r#"
class NotATool:
    name: str = "named"
    description: str = "described"

    def execute(self):
        pass
"#;
        assert!(extract(source).is_empty());
    }

    #[test]
    fn test_class_without_name_is_excluded() {
        let source = r#"
class Helper:
    description: str = "described"

    def _run(self):
        pass
"#;
        assert!(extract(source).is_empty());
    }

    #[test]
    fn test_empty_literal_name_is_excluded() {
        let source = r#"
class Tool:
    name: str = ""
    description: str = "described"

    def _run(self):
        pass
"#;
        assert!(extract(source).is_empty());
    }

    #[test]
    fn test_plain_assignment_attributes_not_recognized() {
        // Only annotated assignments declare tool attributes.
        let source = r#"
class Tool:
    name = "tool"
    description = "desc"

    def _run(self):
        pass
"#;
        assert!(extract(source).is_empty());
    }

    #[test]
    fn test_document_order_preserved() {
        let source = r#"
class Zeta:
    name: str = "zeta"
    description: str = "z"

    def _run(self):
        pass

class Alpha:
    name: str = "alpha"
    description: str = "a"

    def _run(self):
        pass
"#;
        let names: Vec<String> = extract(source).into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_empty_module_yields_empty_list() {
        assert!(extract("x = 1\n").is_empty());
    }

    #[test]
    fn test_determinism() {
        let first = extract(MOL_WT_TOOL);
        let second = extract(MOL_WT_TOOL);
        assert_eq!(first, second);
    }

    #[test]
    fn test_completeness_invariant() {
        let source = r#"
EMPTY = ""

class A:
    name: str = "a"
    description: str = EMPTY

    def _run(self):
        pass

class B:
    name: str = "b"
    description: str = "ok"

    def _run(self):
        pass
"#;
        let tools = extract(source);
        for tool in &tools {
            assert!(!tool.name.is_empty());
            assert!(!tool.description.is_empty());
        }
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "b");
    }
}
