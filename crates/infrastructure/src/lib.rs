//! Materia Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer, settings persistence, and the bridge from
//! effective requests to `reqwest`.

pub mod globals;
pub mod http;
pub mod persistence;
pub mod serialization;
pub mod telemetry;

pub use globals::InMemoryGlobals;
pub use http::{RequestBuildError, build_request};
pub use persistence::{SETTINGS_FILE_NAME, SettingsError, SettingsRepository};
pub use serialization::{SerializationError, from_json_bytes, to_json_stable, to_json_stable_bytes};
pub use telemetry::init_tracing;
