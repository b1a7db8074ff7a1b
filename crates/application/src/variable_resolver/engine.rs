//! Variable resolution engine
//!
//! Resolves `{{variable}}` references against a [`Scope`]. Bound values may
//! themselves contain references; those are expanded in further passes up to
//! [`MAX_EXPANSION_DEPTH`], and the expanded text may grow by at most
//! [`MAX_EXPANDED_LEN`] bytes over the input.

use thiserror::Error;

use super::parser::parse_variables;
use super::scope::Scope;

/// Maximum number of substitution passes over a single string.
pub const MAX_EXPANSION_DEPTH: usize = 10;

/// Maximum number of bytes expansion may add to a single string.
pub const MAX_EXPANDED_LEN: usize = 1024 * 1024;

/// Failure reported by [`resolve_template_checked`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A placeholder has no binding in scope.
    #[error("unbound variable: {name}")]
    Unbound {
        /// Name of the first unbound placeholder
        name: String,
    },

    /// Nested expansion did not settle within the pass or size limit.
    #[error(
        "variable expansion exceeded {} passes or {} added bytes",
        MAX_EXPANSION_DEPTH,
        MAX_EXPANDED_LEN
    )]
    ExpansionLimit,
}

/// Result of variable resolution for a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    /// The resolved string; unbound references are kept literally.
    pub resolved: String,

    /// Names that could not be resolved in the final pass.
    pub unresolved: Vec<String>,

    /// Whether expansion settled within the pass and size limits.
    pub settled: bool,
}

impl ResolutionResult {
    /// Creates a result for input with no variables.
    #[must_use]
    pub fn no_variables(input: &str) -> Self {
        Self {
            resolved: input.to_string(),
            unresolved: Vec::new(),
            settled: true,
        }
    }

    /// Returns true if every reference was bound and expansion settled.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_complete(&self) -> bool {
        self.settled && self.unresolved.is_empty()
    }
}

/// Output of a single substitution pass.
struct Pass {
    text: String,
    substituted: usize,
    unresolved: Vec<String>,
    overflowed: bool,
}

/// Substitutes each reference once, giving up as soon as `text` passes `budget`.
fn substitute_once(input: &str, scope: &Scope, budget: usize) -> Pass {
    let references = parse_variables(input);
    let mut text = String::with_capacity(input.len());
    let mut substituted = 0;
    let mut unresolved = Vec::new();
    let mut last_end = 0;

    for var_ref in &references {
        text.push_str(&input[last_end..var_ref.span.start]);

        if let Some(value) = scope.lookup(&var_ref.name) {
            text.push_str(value);
            substituted += 1;
        } else {
            // Keep the original {{variable}} for unresolved
            text.push_str(&input[var_ref.span.clone()]);
            unresolved.push(var_ref.name.clone());
        }

        last_end = var_ref.span.end;

        if text.len() > budget {
            return Pass {
                text,
                substituted,
                unresolved,
                overflowed: true,
            };
        }
    }

    text.push_str(&input[last_end..]);

    Pass {
        overflowed: text.len() > budget,
        text,
        substituted,
        unresolved,
    }
}

/// Resolves all variables in `input`, reporting what could not be bound.
#[must_use]
pub fn resolve(input: &str, scope: &Scope) -> ResolutionResult {
    if parse_variables(input).is_empty() {
        return ResolutionResult::no_variables(input);
    }

    let budget = input.len().saturating_add(MAX_EXPANDED_LEN);
    let mut current = input.to_string();
    for _ in 0..MAX_EXPANSION_DEPTH {
        let pass = substitute_once(&current, scope, budget);
        if pass.overflowed {
            tracing::debug!(
                input_len = input.len(),
                limit = MAX_EXPANDED_LEN,
                "variable expansion exceeded size budget"
            );
            break;
        }
        if pass.substituted == 0 {
            return ResolutionResult {
                resolved: pass.text,
                unresolved: pass.unresolved,
                settled: true,
            };
        }
        current = pass.text;
    }

    let unresolved = parse_variables(&current)
        .into_iter()
        .filter(|r| scope.lookup(&r.name).is_none())
        .map(|r| r.name)
        .collect();

    ResolutionResult {
        resolved: current,
        unresolved,
        settled: false,
    }
}

/// Substitutes every bound placeholder, leaving unbound ones as literal text.
///
/// Never fails: when nested expansion does not settle, the text produced by
/// the last pass that stayed within the size budget is returned.
#[must_use]
pub fn resolve_template(input: &str, scope: &Scope) -> String {
    resolve(input, scope).resolved
}

/// Like [`resolve_template`], but fails instead of leaving literals behind.
///
/// # Errors
///
/// Returns [`TemplateError::Unbound`] for the first placeholder without a
/// binding and [`TemplateError::ExpansionLimit`] when nested expansion does
/// not settle.
pub fn resolve_template_checked(input: &str, scope: &Scope) -> Result<String, TemplateError> {
    let result = resolve(input, scope);
    if !result.settled {
        return Err(TemplateError::ExpansionLimit);
    }
    if let Some(name) = result.unresolved.into_iter().next() {
        return Err(TemplateError::Unbound { name });
    }
    Ok(result.resolved)
}
