//! HTTP infrastructure utilities.
//!
//! Converts effective requests into `reqwest` requests. Sending them is up
//! to the caller.

mod request_builder;

pub use request_builder::{RequestBuildError, build_request};
