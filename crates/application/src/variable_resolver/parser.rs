//! Placeholder parser for {{variable}} syntax
//!
//! Parses strings to extract variable references with their positions.

use std::ops::Range;

/// A parsed `{{name}}` reference in a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableReference {
    /// The variable name (without {{ }}), trimmed.
    pub name: String,

    /// Byte range in the original string covering the whole `{{ ... }}`.
    pub span: Range<usize>,
}

impl VariableReference {
    /// Creates a new variable reference.
    #[must_use]
    pub fn new(name: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// Parses a string and extracts all variable references.
///
/// Whitespace inside the braces is ignored, `{{}}` is not a reference, and an
/// unclosed `{{` stops the scan: everything after it is plain text.
///
/// # Examples
///
/// ```
/// use materia_application::variable_resolver::parse_variables;
///
/// let refs = parse_variables("Hello {{name}}, see {{ page }}");
/// assert_eq!(refs.len(), 2);
/// assert_eq!(refs[0].name, "name");
/// assert_eq!(refs[1].name, "page");
/// ```
#[must_use]
pub fn parse_variables(input: &str) -> Vec<VariableReference> {
    let mut references = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        if ch != '{' || !matches!(chars.peek(), Some((_, '{'))) {
            continue;
        }
        chars.next(); // second {

        let mut name = String::new();
        let mut end = None;

        while let Some((_, ch)) = chars.next() {
            if ch == '}'
                && let Some((close_idx, '}')) = chars.peek().copied()
            {
                chars.next();
                end = Some(close_idx + 1);
                break;
            }
            name.push(ch);
        }

        let Some(end) = end else {
            break;
        };

        let trimmed = name.trim();
        if !trimmed.is_empty() {
            references.push(VariableReference::new(trimmed, start..end));
        }
    }

    references
}

/// Returns true if the input string contains any variable references.
#[must_use]
pub fn has_variables(input: &str) -> bool {
    !parse_variables(input).is_empty()
}

/// Extracts just the variable names from the input without full parsing info.
#[must_use]
pub fn extract_variable_names(input: &str) -> Vec<String> {
    parse_variables(input).into_iter().map(|r| r.name).collect()
}
