//! HTTP Header types

use serde::{Deserialize, Serialize};

/// A single declared HTTP header.
///
/// Both `key` and `value` may contain `{{variable}}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// The header name (e.g., "Content-Type")
    pub key: String,
    /// The header value (e.g., "application/json")
    pub value: String,
    /// Whether this header is sent
    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

impl Header {
    /// Creates a new active header.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            active: true,
        }
    }

    /// Creates a new inactive header.
    #[must_use]
    pub fn inactive(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            active: false,
        }
    }

    /// Returns true if the header name matches `name`, ignoring ASCII case.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.key.eq_ignore_ascii_case(name)
    }

    /// Returns true if this header survives final filtering.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // String::is_empty is not const
    pub fn is_sendable(&self) -> bool {
        self.active && !self.key.is_empty()
    }
}

/// A fully resolved header, as it appears on the effective request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedHeader {
    /// The resolved header name
    pub key: String,
    /// The resolved header value
    pub value: String,
}

impl ResolvedHeader {
    /// Creates a resolved header.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
