//! Query parameters implied by authentication.

use materia_domain::{ApiKeyLocation, AuthConfig, Param, Request};

use super::ComputedSource;
use crate::variable_resolver::{Scope, resolve_template};

/// A query parameter the user did not declare but the configuration implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputedParam {
    /// What implied it
    pub source: ComputedSource,
    /// The parameter; always active
    pub param: Param,
}

/// Derives the query parameters implied by `request`'s auth.
///
/// Only an active API key configured for the query string produces one.
#[must_use]
pub fn computed_params(request: &Request, scope: &Scope) -> Vec<ComputedParam> {
    match request.auth.effective() {
        Some(AuthConfig::ApiKey {
            key,
            value,
            add_to: ApiKeyLocation::QueryParams,
        }) => vec![ComputedParam {
            source: ComputedSource::Auth,
            param: Param::new(resolve_template(key, scope), resolve_template(value, scope)),
        }],
        _ => Vec::new(),
    }
}
