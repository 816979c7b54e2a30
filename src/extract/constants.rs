//! Module-level constant resolution.
//!
//! Tool classes commonly write `description = SOME_CONSTANT` instead of an
//! inline literal. The constant table maps each top-level identifier that is
//! assigned a string literal to that literal's value, so attribute lookups
//! can resolve the indirection. Resolution is deliberately flat: one level,
//! no scope nesting, no flow analysis.

use std::collections::HashMap;

use rustpython_parser::ast;

use crate::extract::string_literal;

/// Mapping from top-level identifier to its string literal value.
///
/// Built once per module before class extraction, never mutated afterwards.
/// Non-string assignments, multi-target assignments, and destructuring are
/// ignored; a later assignment to the same name wins. Unresolvable names are
/// simply absent, never an error.
pub struct ConstantTable {
    values: HashMap<String, String>,
}

impl ConstantTable {
    /// Scans the top-level statements of a module for string constants.
    /// Handles both `NAME = "..."` and annotated `NAME: str = "..."` forms;
    /// values are trimmed of surrounding whitespace.
    pub fn from_statements(body: &[ast::Stmt]) -> Self {
        let mut values = HashMap::new();

        for stmt in body {
            match stmt {
                ast::Stmt::Assign(assign) => {
                    if let [ast::Expr::Name(target)] = assign.targets.as_slice() {
                        if let Some(text) = string_literal(&assign.value) {
                            values.insert(target.id.to_string(), text.trim().to_string());
                        }
                    }
                }
                ast::Stmt::AnnAssign(assign) => {
                    if let ast::Expr::Name(target) = assign.target.as_ref() {
                        if let Some(text) = assign.value.as_deref().and_then(string_literal) {
                            values.insert(target.id.to_string(), text.trim().to_string());
                        }
                    }
                }
                _ => {}
            }
        }

        Self { values }
    }

    /// Looks up a constant by identifier.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Number of resolved constants.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no constants were resolved.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
