//! Computed headers and query parameters.
//!
//! These are entries the user never typed but that the request's auth and
//! body configuration imply. They are prepended to the declared entries by
//! the assembler.

mod headers;
mod params;

pub use headers::{
    AUTHORIZATION, CONTENT_TYPE, ComputedHeader, HeaderMatch, computed_headers, declares_header,
};
pub use params::{ComputedParam, computed_params};

/// Origin of a computed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputedSource {
    /// Implied by authentication
    Auth,
    /// Implied by the body content type
    Body,
}
