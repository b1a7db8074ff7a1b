//! Whole-body resolution for raw request bodies.
//!
//! JSON bodies get one extra rule: a value substituted inside a JSON string
//! literal is escaped, so a binding containing quotes or backslashes cannot
//! break the document. Everything else substitutes verbatim.

use super::engine::{MAX_EXPANDED_LEN, resolve_template};
use super::parser::parse_variables;
use super::scope::Scope;

/// Returns true for JSON media types, including `+json` suffixes.
#[must_use]
pub fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json" || essence == "text/json" || essence.ends_with("+json")
}

/// Resolves placeholders in a raw body of the given content type.
///
/// Unbound placeholders are left literal. Bound values are fully expanded
/// before insertion. Once the output has grown by more than
/// [`MAX_EXPANDED_LEN`] bytes, remaining placeholders are left literal too.
#[must_use]
pub fn resolve_body_template(raw: &str, content_type: &str, scope: &Scope) -> String {
    if !is_json_content_type(content_type) {
        return resolve_template(raw, scope);
    }

    let references = parse_variables(raw);
    if references.is_empty() {
        return raw.to_string();
    }

    let budget = raw.len().saturating_add(MAX_EXPANDED_LEN);
    let mut output = String::with_capacity(raw.len());
    let mut literal = JsonStringTracker::default();
    let mut last_end = 0;

    for var_ref in &references {
        let preceding = &raw[last_end..var_ref.span.start];
        literal.advance(preceding);
        output.push_str(preceding);

        match scope.lookup(&var_ref.name) {
            Some(value) if output.len() <= budget => {
                let expanded = resolve_template(value, scope);
                if literal.inside {
                    output.push_str(&escape_json_fragment(&expanded));
                } else {
                    output.push_str(&expanded);
                }
            }
            _ => output.push_str(&raw[var_ref.span.clone()]),
        }

        last_end = var_ref.span.end;
    }

    output.push_str(&raw[last_end..]);
    output
}

/// Tracks whether a scan position sits inside a JSON string literal.
#[derive(Debug, Default)]
struct JsonStringTracker {
    inside: bool,
    escaped: bool,
}

impl JsonStringTracker {
    fn advance(&mut self, text: &str) {
        for ch in text.chars() {
            if !self.inside {
                self.inside = ch == '"';
                continue;
            }
            if self.escaped {
                self.escaped = false;
            } else if ch == '\\' {
                self.escaped = true;
            } else if ch == '"' {
                self.inside = false;
            }
        }
    }
}

/// Escapes `value` for use between the quotes of a JSON string.
fn escape_json_fragment(value: &str) -> String {
    serde_json::to_string(value).map_or_else(
        |_| value.to_string(),
        |quoted| quoted[1..quoted.len() - 1].to_string(),
    )
}
