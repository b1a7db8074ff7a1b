//! Environment variable types

use serde::{Deserialize, Serialize};

/// A single `key = value` binding.
///
/// Keys are not required to be unique within a list; lookups take the
/// first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    /// The variable name (without {{ }}).
    pub key: String,
    /// The variable value. May itself contain placeholders.
    #[serde(default)]
    pub value: String,
}

impl Variable {
    /// Creates a new binding.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A named set of variable bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Bindings in declaration order
    #[serde(default)]
    pub variables: Vec<Variable>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: Vec::new(),
        }
    }

    /// Appends a variable. Existing bindings for the same key are kept and
    /// shadow the new one.
    pub fn add_variable(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.push(Variable::new(key, value));
    }

    /// Builder form of [`Environment::add_variable`].
    #[must_use]
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_variable(key, value);
        self
    }

    /// Returns the first value bound to `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|v| v.key == key)
            .map(|v| v.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_binding_wins() {
        let env = Environment::new("dev")
            .with_variable("host", "first")
            .with_variable("host", "second");
        assert_eq!(env.get("host"), Some("first"));
        assert_eq!(env.variables.len(), 2);
    }

    #[test]
    fn test_missing_key() {
        assert_eq!(Environment::new("empty").get("host"), None);
    }
}
