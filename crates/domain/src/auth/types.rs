//! Authentication configuration types

use serde::{Deserialize, Serialize};

/// Authentication attached to a request, with an on/off switch.
///
/// Switching auth off keeps the configuration around so it can be
/// re-enabled without re-entering credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Auth {
    /// Whether authentication is applied
    #[serde(default)]
    pub active: bool,
    /// The configured scheme
    #[serde(default)]
    pub config: AuthConfig,
}

impl Auth {
    /// Creates an active authentication.
    #[must_use]
    pub const fn active(config: AuthConfig) -> Self {
        Self {
            active: true,
            config,
        }
    }

    /// Creates an inactive authentication that keeps its configuration.
    #[must_use]
    pub const fn inactive(config: AuthConfig) -> Self {
        Self {
            active: false,
            config,
        }
    }

    /// Returns the configuration if auth is switched on and not `None`.
    #[must_use]
    pub const fn effective(&self) -> Option<&AuthConfig> {
        if self.active && self.config.is_configured() {
            Some(&self.config)
        } else {
            None
        }
    }
}

/// Authentication scheme for a request.
///
/// All string fields may contain `{{variable}}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthConfig {
    /// No authentication
    #[default]
    None,
    /// Basic authentication
    Basic {
        /// Username (may contain variables)
        username: String,
        /// Password (may contain variables)
        password: String,
    },
    /// Bearer token authentication
    Bearer {
        /// The bearer token (may contain variables like `{{access_token}}`)
        token: String,
    },
    /// `OAuth2` with an already acquired access token
    #[serde(rename = "oauth2")]
    OAuth2 {
        /// The access token
        token: String,
    },
    /// API Key authentication
    ApiKey {
        /// Header or query parameter name
        key: String,
        /// The API key value
        value: String,
        /// Where to add the key
        #[serde(default)]
        add_to: ApiKeyLocation,
    },
}

/// Location for API key authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApiKeyLocation {
    /// Add to request headers
    #[default]
    Headers,
    /// Add to query parameters
    QueryParams,
}

impl AuthConfig {
    /// Returns true if authentication is configured.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Creates a bearer token authentication.
    #[must_use]
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Creates an `OAuth2` token authentication.
    #[must_use]
    pub fn oauth2(token: impl Into<String>) -> Self {
        Self::OAuth2 {
            token: token.into(),
        }
    }

    /// Creates a basic authentication.
    #[must_use]
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Creates an API key authentication in header.
    #[must_use]
    pub fn api_key_header(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ApiKey {
            key: key.into(),
            value: value.into(),
            add_to: ApiKeyLocation::Headers,
        }
    }

    /// Creates an API key authentication in the query string.
    #[must_use]
    pub fn api_key_query(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ApiKey {
            key: key.into(),
            value: value.into(),
            add_to: ApiKeyLocation::QueryParams,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_none() {
        let auth = Auth::active(AuthConfig::None);
        assert!(!auth.config.is_configured());
        assert!(auth.effective().is_none());
    }

    #[test]
    fn test_inactive_auth_has_no_effective_config() {
        let auth = Auth::inactive(AuthConfig::bearer("my-token"));
        assert!(auth.effective().is_none());
    }

    #[test]
    fn test_bearer_auth() {
        let auth = Auth::active(AuthConfig::bearer("my-token"));
        let Some(AuthConfig::Bearer { token }) = auth.effective() else {
            unreachable!("Expected Bearer auth variant");
        };
        assert_eq!(token, "my-token");
    }

    #[test]
    fn test_api_key_location_defaults_to_headers() {
        let config: AuthConfig =
            serde_json::from_str(r#"{"type":"api_key","key":"X-Key","value":"v"}"#)
                .unwrap_or_else(|e| unreachable!("valid auth json: {e}"));
        assert_eq!(config, AuthConfig::api_key_header("X-Key", "v"));
    }

    #[test]
    fn test_oauth2_tag() {
        let json = serde_json::to_string(&AuthConfig::oauth2("t"))
            .unwrap_or_else(|e| unreachable!("serializable: {e}"));
        assert!(json.contains(r#""type":"oauth2""#));
    }
}
