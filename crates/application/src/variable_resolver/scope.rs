//! Ordered variable scopes.
//!
//! A scope is a flat list of bindings scanned front to back; the first
//! binding with a matching key wins. Shadowing is resolved at lookup time,
//! never by eager deduplication.

use materia_domain::Variable;

/// An ordered lookup table of variable bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    bindings: Vec<Variable>,
}

impl Scope {
    /// Creates an empty scope.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Creates a scope from bindings in precedence order.
    #[must_use]
    pub fn from_bindings(bindings: impl IntoIterator<Item = Variable>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
        }
    }

    /// Returns a new scope with `local` bindings placed ahead of this one.
    #[must_use]
    pub fn with_local(&self, local: &[Variable]) -> Self {
        Self {
            bindings: local.iter().chain(&self.bindings).cloned().collect(),
        }
    }

    /// Returns the first value bound to `key`.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|v| v.key == key)
            .map(|v| v.value.as_str())
    }

    /// Returns the bindings in precedence order.
    #[must_use]
    pub fn bindings(&self) -> &[Variable] {
        &self.bindings
    }

    /// Returns the number of bindings, shadowed ones included.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if the scope holds no bindings.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Merges environment bindings followed by global bindings into one scope.
#[must_use]
pub fn merge_scope(environment: &[Variable], globals: &[Variable]) -> Scope {
    Scope::from_bindings(environment.iter().chain(globals).cloned())
}
