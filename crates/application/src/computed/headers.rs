//! Headers implied by authentication and body configuration.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use materia_domain::{ApiKeyLocation, AuthConfig, Header, Request};

use super::ComputedSource;
use crate::variable_resolver::{Scope, resolve_template};

/// Name of the header synthesized by basic, bearer and `OAuth2` auth.
pub const AUTHORIZATION: &str = "Authorization";

/// Name of the header synthesized from the body content type.
pub const CONTENT_TYPE: &str = "content-type";

/// A header the user did not declare but the configuration implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputedHeader {
    /// What implied it
    pub source: ComputedSource,
    /// The header; always active
    pub header: Header,
}

/// How [`declares_header`] treats inactive headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMatch {
    /// Any declared header counts, active or not
    Any,
    /// Only active headers count
    Active,
}

/// Returns true if `headers` declares `name` (ASCII case-insensitive).
#[must_use]
pub fn declares_header(headers: &[Header], name: &str, mode: HeaderMatch) -> bool {
    headers
        .iter()
        .filter(|h| mode == HeaderMatch::Any || h.active)
        .any(|h| h.is_named(name))
}

/// Derives the headers implied by `request`'s auth and body.
///
/// Auth headers come first, then the body content type.
#[must_use]
pub fn computed_headers(request: &Request, scope: &Scope) -> Vec<ComputedHeader> {
    let mut computed = Vec::with_capacity(2);

    if declares_header(&request.headers, AUTHORIZATION, HeaderMatch::Any) {
        tracing::trace!("request declares Authorization, skipping auth header");
    } else if let Some(header) = request.auth.effective().and_then(|c| auth_header(c, scope)) {
        computed.push(ComputedHeader {
            source: ComputedSource::Auth,
            header,
        });
    }

    if declares_header(&request.headers, CONTENT_TYPE, HeaderMatch::Active) {
        tracing::trace!("request declares content-type, skipping body header");
    } else if let Some(content_type) = request.body.content_type() {
        computed.push(ComputedHeader {
            source: ComputedSource::Body,
            header: Header::new(CONTENT_TYPE, content_type),
        });
    }

    computed
}

fn auth_header(config: &AuthConfig, scope: &Scope) -> Option<Header> {
    match config {
        AuthConfig::None
        | AuthConfig::ApiKey {
            add_to: ApiKeyLocation::QueryParams,
            ..
        } => None,
        AuthConfig::Basic { username, password } => {
            let credentials = format!(
                "{}:{}",
                resolve_template(username, scope),
                resolve_template(password, scope)
            );
            Some(Header::new(
                AUTHORIZATION,
                format!("Basic {}", STANDARD.encode(credentials)),
            ))
        }
        AuthConfig::Bearer { token } | AuthConfig::OAuth2 { token } => Some(Header::new(
            AUTHORIZATION,
            format!("Bearer {}", resolve_template(token, scope)),
        )),
        AuthConfig::ApiKey {
            key,
            value,
            add_to: ApiKeyLocation::Headers,
        } => Some(Header::new(
            resolve_template(key, scope),
            resolve_template(value, scope),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use materia_domain::{Auth, RequestBody, Variable};
    use pretty_assertions::assert_eq;

    fn scope(pairs: &[(&str, &str)]) -> Scope {
        Scope::from_bindings(pairs.iter().map(|(k, v)| Variable::new(*k, *v)))
    }

    fn headers_of(request: &Request, scope: &Scope) -> Vec<(String, String)> {
        computed_headers(request, scope)
            .into_iter()
            .map(|c| (c.header.key, c.header.value))
            .collect()
    }

    #[test]
    fn test_basic_auth_header() {
        let request = Request::new("/").with_auth(Auth::active(AuthConfig::basic("u", "p")));
        assert_eq!(
            headers_of(&request, &Scope::new()),
            vec![(AUTHORIZATION.to_string(), "Basic dTpw".to_string())]
        );
    }

    #[test]
    fn test_basic_auth_resolves_credentials() {
        let request = Request::new("/")
            .with_auth(Auth::active(AuthConfig::basic("{{user}}", "{{pass}}")));
        let scope = scope(&[("user", "Aladdin"), ("pass", "open sesame")]);
        assert_eq!(
            headers_of(&request, &scope)[0].1,
            "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ=="
        );
    }

    #[test]
    fn test_bearer_and_oauth2_headers() {
        let scope = scope(&[("token", "abc")]);
        for config in [AuthConfig::bearer("{{token}}"), AuthConfig::oauth2("{{token}}")] {
            let request = Request::new("/").with_auth(Auth::active(config));
            assert_eq!(headers_of(&request, &scope)[0].1, "Bearer abc");
        }
    }

    #[test]
    fn test_api_key_in_header() {
        let request = Request::new("/")
            .with_auth(Auth::active(AuthConfig::api_key_header("{{name}}", "{{key}}")));
        let scope = scope(&[("name", "X-Api-Key"), ("key", "secret")]);
        assert_eq!(
            headers_of(&request, &scope),
            vec![("X-Api-Key".to_string(), "secret".to_string())]
        );
    }

    #[test]
    fn test_api_key_in_query_yields_no_header() {
        let request =
            Request::new("/").with_auth(Auth::active(AuthConfig::api_key_query("X", "v")));
        assert!(computed_headers(&request, &Scope::new()).is_empty());
    }

    #[test]
    fn test_inactive_auth_yields_no_header() {
        let request = Request::new("/").with_auth(Auth::inactive(AuthConfig::bearer("t")));
        assert!(computed_headers(&request, &Scope::new()).is_empty());
    }

    #[test]
    fn test_declared_authorization_suppresses_auth_header() {
        let request = Request::new("/")
            .with_header(Header::new("authorization", "Custom x"))
            .with_auth(Auth::active(AuthConfig::bearer("t")));
        assert!(computed_headers(&request, &Scope::new()).is_empty());
    }

    #[test]
    fn test_inactive_declared_authorization_still_suppresses() {
        let request = Request::new("/")
            .with_header(Header::inactive("Authorization", "Custom x"))
            .with_auth(Auth::active(AuthConfig::bearer("t")));
        assert!(computed_headers(&request, &Scope::new()).is_empty());
    }

    #[test]
    fn test_body_content_type_header_is_verbatim() {
        let request = Request::new("/").with_body(RequestBody::raw("application/{{kind}}", "{}"));
        let scope = scope(&[("kind", "json")]);
        let computed = computed_headers(&request, &scope);
        assert_eq!(computed.len(), 1);
        assert_eq!(computed[0].source, ComputedSource::Body);
        assert_eq!(computed[0].header.value, "application/{{kind}}");
    }

    #[test]
    fn test_active_content_type_suppresses_body_header() {
        let request = Request::new("/")
            .with_header(Header::new("Content-Type", "text/csv"))
            .with_body(RequestBody::text("a,b"));
        assert!(computed_headers(&request, &Scope::new()).is_empty());
    }

    #[test]
    fn test_inactive_content_type_does_not_suppress() {
        let request = Request::new("/")
            .with_header(Header::inactive("Content-Type", "text/csv"))
            .with_body(RequestBody::url_encoded("a=1"));
        assert_eq!(
            headers_of(&request, &Scope::new()),
            vec![(
                CONTENT_TYPE.to_string(),
                "application/x-www-form-urlencoded".to_string()
            )]
        );
    }

    #[test]
    fn test_no_body_no_content_type() {
        assert!(computed_headers(&Request::new("/"), &Scope::new()).is_empty());
    }

    #[test]
    fn test_auth_precedes_body_header() {
        let request = Request::new("/")
            .with_auth(Auth::active(AuthConfig::bearer("t")))
            .with_body(RequestBody::json("{}"));
        let sources: Vec<_> = computed_headers(&request, &Scope::new())
            .into_iter()
            .map(|c| c.source)
            .collect();
        assert_eq!(sources, vec![ComputedSource::Auth, ComputedSource::Body]);
    }
}
