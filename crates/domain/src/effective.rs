//! Effective (fully resolved) request types.

use serde::{Deserialize, Serialize};

use crate::environment::Variable;
use crate::multipart::MultipartForm;
use crate::request::{Request, ResolvedHeader, ResolvedParam};

/// Materialized body of an effective request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum FinalBody {
    /// No body is sent
    #[default]
    Absent,
    /// Text payload (url-encoded or raw)
    Text(String),
    /// Multipart payload
    Multipart(MultipartForm),
}

impl FinalBody {
    /// Returns the text payload, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Absent | Self::Multipart(_) => None,
        }
    }

    /// Returns the multipart payload, if any.
    #[must_use]
    pub const fn as_multipart(&self) -> Option<&MultipartForm> {
        match self {
            Self::Multipart(form) => Some(form),
            Self::Absent | Self::Text(_) => None,
        }
    }

    /// Returns true when no body is sent.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// A declarative request together with its resolved, executable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveRequest {
    /// The request this was derived from, untouched
    pub request: Request,
    /// Endpoint with all placeholders substituted
    pub final_url: String,
    /// Computed and declared headers, filtered and resolved
    pub final_headers: Vec<ResolvedHeader>,
    /// Computed and declared query parameters, filtered and resolved
    pub final_params: Vec<ResolvedParam>,
    /// Materialized body
    pub final_body: FinalBody,
    /// Request-local variables, passed through unresolved
    pub final_vars: Vec<Variable>,
}

impl EffectiveRequest {
    /// Returns the first final header value for `name`, ignoring ASCII case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.final_headers
            .iter()
            .find(|h| h.key.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }

    /// Returns every final header value for `name`, ignoring ASCII case.
    pub fn headers_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.final_headers
            .iter()
            .filter(move |h| h.key.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }

    /// Returns the first final parameter value for `key`.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.final_params
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }
}
