//! Materia Application - Request materialization engine
//!
//! This crate turns a declarative [`materia_domain::Request`] plus an
//! environment into the concrete [`materia_domain::EffectiveRequest`] that
//! would be sent: variables substituted, auth and content-type headers
//! computed, and the body encoded.
//!
//! Global variables are read through the [`ports::GlobalVariables`] port;
//! adapters live in the infrastructure layer.

pub mod assembler;
pub mod body_materializer;
pub mod computed;
pub mod error;
pub mod ports;
pub mod raw_entries;
pub mod stream;
pub mod variable_resolver;

pub use assembler::EffectiveRequestAssembler;
pub use body_materializer::{materialize_body, materialize_body_with};
pub use computed::{ComputedHeader, ComputedParam, ComputedSource, computed_headers, computed_params};
pub use error::{ApplicationError, ApplicationResult};
pub use raw_entries::{RawEntry, RawEntryError, parse_raw_entries};
pub use stream::{EffectiveRequestStream, resolve_stream};
pub use variable_resolver::{Scope, TemplateError, merge_scope, resolve_template};
