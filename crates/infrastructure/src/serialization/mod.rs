//! JSON serialization for files written by Materia.
//!
//! Output uses 2-space indentation and a trailing newline so saved files
//! diff cleanly.

mod json;

pub use json::{SerializationError, from_json_bytes, to_json_stable, to_json_stable_bytes};
