//! Signature introspection: descriptive text derived from a callable's
//! declared parameters and return annotation, with no execution.
//!
//! Used when a tool definition carries no usable docstring. Only plain
//! positional parameters are described; `*args`, `**kwargs`, keyword-only
//! and positional-only parameters are ignored, as is the `self` receiver.

use rustpython_parser::ast;

use crate::extract::span;

/// How extracted parameter text is rendered. The calling extractor selects
/// the style; the shapes are part of the output contract and must not drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureStyle {
    /// Comma-joined entries: `a: int, b: str`. Unannotated parameters render
    /// as the bare name.
    Inline,
    /// One line per parameter: `a (int)`, unannotated as the bare name.
    /// With `with_defaults`, a parameter's default is appended as
    /// `\tDefault: <value>` using the default expression's source text.
    Multiline { with_defaults: bool },
}

/// Renders the parameter list of a callable in the requested style.
/// Zero parameters yield an empty string.
pub fn describe_inputs(args: &ast::Arguments, source: &str, style: SignatureStyle) -> String {
    let mut entries = Vec::new();

    for param in &args.args {
        let name = param.def.arg.as_str();
        if name == "self" {
            continue;
        }
        let annotation = param.def.annotation.as_deref().map(|a| span(source, a));

        let entry = match style {
            SignatureStyle::Inline => match annotation {
                Some(ty) => format!("{}: {}", name, ty),
                None => name.to_string(),
            },
            SignatureStyle::Multiline { with_defaults } => {
                let mut line = match annotation {
                    Some(ty) => format!("{} ({})", name, ty),
                    None => name.to_string(),
                };
                if with_defaults {
                    if let Some(default) = param.default.as_deref() {
                        line.push_str("\tDefault: ");
                        line.push_str(span(source, default));
                    }
                }
                line
            }
        };
        entries.push(entry);
    }

    match style {
        SignatureStyle::Inline => entries.join(", "),
        SignatureStyle::Multiline { .. } => entries.join("\n"),
    }
}

/// The return annotation's source text, or an empty string when the callable
/// is unannotated. Never an error.
pub fn describe_output(returns: Option<&ast::Expr>, source: &str) -> String {
    returns
        .map(|annotation| span(source, annotation).to_string())
        .unwrap_or_default()
}
