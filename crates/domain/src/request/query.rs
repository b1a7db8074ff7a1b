//! Query parameter types

use serde::{Deserialize, Serialize};

/// A query parameter key-value pair.
///
/// Supports enable/disable without deletion for UI convenience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    /// The parameter key
    pub key: String,
    /// The parameter value
    pub value: String,
    /// Whether this parameter is sent
    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

impl Param {
    /// Creates a new active query parameter.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            active: true,
        }
    }

    /// Creates an inactive query parameter.
    #[must_use]
    pub fn inactive(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            active: false,
        }
    }

    /// Returns true if this parameter survives final filtering.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_sendable(&self) -> bool {
        self.active && !self.key.is_empty()
    }
}

/// A resolved query parameter on the effective request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedParam {
    /// The resolved key
    pub key: String,
    /// The resolved value
    pub value: String,
}

impl ResolvedParam {
    /// Creates a resolved parameter.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_creation() {
        let param = Param::new("page", "1");
        assert_eq!(param.key, "page");
        assert_eq!(param.value, "1");
        assert!(param.active);
    }

    #[test]
    fn test_inactive_param() {
        let param = Param::inactive("debug", "true");
        assert!(!param.active);
        assert!(!param.is_sendable());
    }

    #[test]
    fn test_empty_key_is_filtered() {
        assert!(!Param::new("", "1").is_sendable());
        assert!(Param::new("limit", "").is_sendable());
    }
}
