//! Materia Domain - Core request types
//!
//! This crate defines the domain model for the Materia request
//! materialization engine: declarative requests, environments, and the
//! effective requests derived from them.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod effective;
pub mod environment;
pub mod error;
pub mod multipart;
pub mod request;
pub mod settings;

pub use auth::{ApiKeyLocation, Auth, AuthConfig};
pub use effective::{EffectiveRequest, FinalBody};
pub use environment::{Environment, Variable};
pub use error::{DomainError, DomainResult};
pub use multipart::{MultipartForm, MultipartPart, PartValue};
pub use request::{
    Blob, FormDataEntry, FormDataValue, Header, HttpMethod, Param, Request, RequestBody,
    ResolvedHeader, ResolvedParam,
};
pub use settings::ResolverSettings;
