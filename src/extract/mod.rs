//! Static extraction of tool metadata from Python source.
//!
//! This is the core of the crate: it parses a module's raw source text into
//! a syntax tree, locates tool-defining constructs (classes or functions
//! following a convention), and derives the four semantic fields of a
//! [`ToolRecord`](crate::record::ToolRecord) by combining structured
//! docstring sections with static signature introspection as a fallback.
//! No parsed code is ever executed.
//!
//! Three extraction conventions are supported:
//!
//! - [`classes`]: classes declaring `name`/`description` attributes and a
//!   `_run` method (numpy-style `Parameters`/`Returns` docstring sections)
//! - [`functions`]: free functions with `Name:`/`Description:`/
//!   `Parameters:`/`Returns:` labeled docstrings
//! - [`delimited`]: functions with `Args:`/`Returns:` delimited docstrings

pub mod classes;
pub mod constants;
pub mod delimited;
pub mod functions;
pub mod signature;

pub use classes::extract_class_tools;
pub use delimited::extract_delimited_tools;
pub use functions::extract_function_tools;

use rustpython_parser::ast::{self, Ranged};
use rustpython_parser::Parse;

use crate::error::ExtractError;

/// A Python module parsed for extraction.
///
/// Owns both the raw source text and the parsed statement list; the source
/// is kept because annotation and default-value text is recovered by slicing
/// it with node ranges. All extraction state is scoped to one module and
/// discarded with it.
pub struct ParsedModule {
    source: String,
    body: ast::Suite,
}

impl ParsedModule {
    /// Parses a full module's source text. A syntactically broken file is a
    /// fatal [`ExtractError::Parse`]; there is no partial recovery.
    pub fn parse(source: impl Into<String>, file_name: &str) -> Result<Self, ExtractError> {
        let source = source.into();
        let body = ast::Suite::parse(&source, file_name).map_err(|err| ExtractError::Parse {
            file: file_name.to_string(),
            source: err,
        })?;
        Ok(Self { source, body })
    }

    /// The raw source text the module was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Top-level statements in document order.
    pub fn statements(&self) -> &[ast::Stmt] {
        &self.body
    }

    /// Every statement in the module, depth-first in document order,
    /// including those nested in classes, functions, and control flow.
    pub(crate) fn all_statements(&self) -> Vec<&ast::Stmt> {
        let mut out = Vec::new();
        walk(&self.body, &mut out);
        out
    }
}

fn walk<'a>(body: &'a [ast::Stmt], out: &mut Vec<&'a ast::Stmt>) {
    for stmt in body {
        out.push(stmt);
        match stmt {
            ast::Stmt::FunctionDef(inner) => walk(&inner.body, out),
            ast::Stmt::AsyncFunctionDef(inner) => walk(&inner.body, out),
            ast::Stmt::ClassDef(inner) => walk(&inner.body, out),
            ast::Stmt::If(inner) => {
                walk(&inner.body, out);
                walk(&inner.orelse, out);
            }
            ast::Stmt::While(inner) => {
                walk(&inner.body, out);
                walk(&inner.orelse, out);
            }
            ast::Stmt::For(inner) => {
                walk(&inner.body, out);
                walk(&inner.orelse, out);
            }
            ast::Stmt::AsyncFor(inner) => {
                walk(&inner.body, out);
                walk(&inner.orelse, out);
            }
            ast::Stmt::With(inner) => walk(&inner.body, out),
            ast::Stmt::AsyncWith(inner) => walk(&inner.body, out),
            ast::Stmt::Try(inner) => {
                walk(&inner.body, out);
                for handler in &inner.handlers {
                    let ast::ExceptHandler::ExceptHandler(handler) = handler;
                    walk(&handler.body, out);
                }
                walk(&inner.orelse, out);
                walk(&inner.finalbody, out);
            }
            ast::Stmt::TryStar(inner) => {
                walk(&inner.body, out);
                for handler in &inner.handlers {
                    let ast::ExceptHandler::ExceptHandler(handler) = handler;
                    walk(&handler.body, out);
                }
                walk(&inner.orelse, out);
                walk(&inner.finalbody, out);
            }
            _ => {}
        }
    }
}

/// The docstring of a statement body: a leading expression statement whose
/// value is a string literal. Returns the raw string content.
pub(crate) fn docstring(body: &[ast::Stmt]) -> Option<&str> {
    match body.first()? {
        ast::Stmt::Expr(stmt) => string_literal(&stmt.value),
        _ => None,
    }
}

/// The string content of a literal expression, if it is one.
pub(crate) fn string_literal(expr: &ast::Expr) -> Option<&str> {
    match expr {
        ast::Expr::Constant(constant) => match &constant.value {
            ast::Constant::Str(value) => Some(value),
            _ => None,
        },
        _ => None,
    }
}

/// The exact source text a node was parsed from.
pub(crate) fn span<'a>(source: &'a str, node: &impl Ranged) -> &'a str {
    let start = u32::from(node.start()) as usize;
    let end = u32::from(node.end()) as usize;
    &source[start..end]
}
