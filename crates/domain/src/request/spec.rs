//! Declarative request type

use serde::{Deserialize, Serialize};

use super::{Header, HttpMethod, Param, RequestBody};
use crate::auth::Auth;
use crate::environment::Variable;

/// A declarative, template-bearing HTTP request.
///
/// Nothing here is resolved; placeholders are substituted when the request
/// is turned into an effective request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Human-readable name
    #[serde(default)]
    pub name: String,
    /// HTTP method
    #[serde(default)]
    pub method: HttpMethod,
    /// Target URL (may contain variable placeholders)
    pub endpoint: String,
    /// Declared headers in order
    #[serde(default)]
    pub headers: Vec<Header>,
    /// Declared query parameters in order
    #[serde(default)]
    pub params: Vec<Param>,
    /// Request-local variables, visible only to the endpoint
    #[serde(default)]
    pub vars: Vec<Variable>,
    /// Authentication configuration
    #[serde(default)]
    pub auth: Auth,
    /// Request body
    #[serde(default)]
    pub body: RequestBody,
}

impl Request {
    /// Creates a GET request for the given endpoint.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            method: HttpMethod::Get,
            endpoint: endpoint.into(),
            headers: Vec::new(),
            params: Vec::new(),
            vars: Vec::new(),
            auth: Auth::default(),
            body: RequestBody::None,
        }
    }

    /// Sets the method.
    #[must_use]
    pub const fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Appends a header.
    #[must_use]
    pub fn with_header(mut self, header: Header) -> Self {
        self.headers.push(header);
        self
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Appends a request-local variable.
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.push(Variable::new(key, value));
        self
    }

    /// Sets the authentication.
    #[must_use]
    pub fn with_auth(mut self, auth: Auth) -> Self {
        self.auth = auth;
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }
}

impl Default for Request {
    fn default() -> Self {
        Self::new(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthConfig;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_request() {
        let req = Request::new("https://example.com");
        assert_eq!(req.method, HttpMethod::Get);
        assert!(req.headers.is_empty());
        assert_eq!(req.body, RequestBody::None);
    }

    #[test]
    fn test_builder_keeps_declaration_order() {
        let req = Request::new("/items")
            .with_method(HttpMethod::Post)
            .with_header(Header::new("A", "1"))
            .with_header(Header::new("B", "2"))
            .with_var("id", "7")
            .with_auth(Auth::active(AuthConfig::bearer("t")));

        let keys: Vec<_> = req.headers.iter().map(|h| h.key.as_str()).collect();
        assert_eq!(keys, ["A", "B"]);
        assert_eq!(req.vars[0].key, "id");
        assert!(req.auth.active);
    }

    #[test]
    fn test_deserialize_minimal_request() {
        let req: Request = serde_json::from_str(r#"{"endpoint":"https://api.test"}"#)
            .unwrap_or_else(|e| unreachable!("valid request json: {e}"));
        assert_eq!(req.endpoint, "https://api.test");
        assert!(!req.auth.active);
    }
}
