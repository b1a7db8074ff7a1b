//! In-memory global variable store.

use std::sync::Arc;

use materia_application::ports::GlobalVariables;
use materia_domain::Variable;
use parking_lot::RwLock;

/// Shared, mutable global variable scope.
///
/// Clones share the same bindings, so the host can keep one handle for
/// editing while the assembler reads through another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGlobals {
    bindings: Arc<RwLock<Vec<Variable>>>,
}

impl InMemoryGlobals {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `variables`, kept in the given order.
    #[must_use]
    pub fn from_variables(variables: Vec<Variable>) -> Self {
        Self {
            bindings: Arc::new(RwLock::new(variables)),
        }
    }

    /// Sets `key` to `value`.
    ///
    /// The first binding with that key is updated in place; otherwise a new
    /// binding is appended.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        let mut bindings = self.bindings.write();

        if let Some(existing) = bindings.iter_mut().find(|v| v.key == key) {
            existing.value = value;
        } else {
            bindings.push(Variable::new(key, value));
        }
    }

    /// Removes every binding for `key`. Returns whether anything was removed.
    pub fn remove(&self, key: &str) -> bool {
        let mut bindings = self.bindings.write();
        let before = bindings.len();
        bindings.retain(|v| v.key != key);
        bindings.len() != before
    }

    /// Replaces all bindings at once.
    pub fn replace(&self, variables: Vec<Variable>) {
        *self.bindings.write() = variables;
        tracing::debug!(count = self.bindings.read().len(), "global variables replaced");
    }

    /// Removes all bindings.
    pub fn clear(&self) {
        self.bindings.write().clear();
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.read().len()
    }

    /// Returns true when no bindings exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.read().is_empty()
    }
}

impl GlobalVariables for InMemoryGlobals {
    fn snapshot(&self) -> Vec<Variable> {
        self.bindings.read().clone()
    }
}
