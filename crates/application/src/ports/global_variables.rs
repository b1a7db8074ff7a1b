//! Global variable port

use std::sync::Arc;

use materia_domain::Variable;

/// Port for reading the process-wide global variable scope.
///
/// Implementations hand out a snapshot; the engine never writes through
/// this port.
pub trait GlobalVariables: Send + Sync {
    /// Returns the current global bindings in precedence order.
    fn snapshot(&self) -> Vec<Variable>;
}

/// No global variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGlobals;

impl GlobalVariables for NoGlobals {
    fn snapshot(&self) -> Vec<Variable> {
        Vec::new()
    }
}

/// A fixed list of bindings, useful for tests and one-off resolutions.
impl GlobalVariables for Vec<Variable> {
    fn snapshot(&self) -> Vec<Variable> {
        self.clone()
    }
}

impl<T: GlobalVariables + ?Sized> GlobalVariables for Arc<T> {
    fn snapshot(&self) -> Vec<Variable> {
        (**self).snapshot()
    }
}
