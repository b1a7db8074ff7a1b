//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the engine and state it does not own.
//! Each port is a trait that can be implemented by adapters in the
//! infrastructure layer.

mod global_variables;

pub use global_variables::{GlobalVariables, NoGlobals};
