//! Effective Request Assembler
//!
//! Combines scope merging, computed entries and body materialization into
//! the [`EffectiveRequest`] handed to whatever executes or previews it.

use materia_domain::{
    ApiKeyLocation, AuthConfig, EffectiveRequest, Environment, FormDataValue, Header, Param, Request,
    RequestBody, ResolvedHeader, ResolvedParam, ResolverSettings, Variable,
};

use crate::body_materializer::materialize_body_with;
use crate::computed::{
    AUTHORIZATION, HeaderMatch, computed_headers, computed_params, declares_header,
};
use crate::ports::GlobalVariables;
use crate::raw_entries::parse_raw_entries;
use crate::variable_resolver::{Scope, merge_scope, resolve, resolve_template};

/// Resolves declarative requests into effective requests.
///
/// Holds the injected global scope and settings; resolution itself is a pure
/// function of its inputs and the global snapshot taken at call time.
///
/// # Example
///
/// ```
/// use materia_application::{EffectiveRequestAssembler, ports::NoGlobals};
/// use materia_domain::{Environment, Request};
///
/// let assembler = EffectiveRequestAssembler::new(NoGlobals);
/// let env = Environment::new("dev").with_variable("host", "api.test");
///
/// let effective = assembler.resolve(&Request::new("https://{{host}}/users"), &env);
/// assert_eq!(effective.final_url, "https://api.test/users");
/// ```
#[derive(Debug, Clone)]
pub struct EffectiveRequestAssembler<G: GlobalVariables> {
    globals: G,
    settings: ResolverSettings,
}

impl<G: GlobalVariables> EffectiveRequestAssembler<G> {
    /// Creates an assembler with default settings.
    pub fn new(globals: G) -> Self {
        Self::with_settings(globals, ResolverSettings::default())
    }

    /// Creates an assembler with explicit settings.
    pub const fn with_settings(globals: G, settings: ResolverSettings) -> Self {
        Self { globals, settings }
    }

    /// Returns the active settings.
    pub const fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// Resolves `request` against `environment` and the current global scope.
    pub fn resolve(&self, request: &Request, environment: &Environment) -> EffectiveRequest {
        self.resolve_with_globals(request, environment, &self.global_snapshot())
    }

    /// Resolves `request` against `environment` and an explicit global snapshot.
    pub fn resolve_with_globals(
        &self,
        request: &Request,
        environment: &Environment,
        globals: &[Variable],
    ) -> EffectiveRequest {
        let scope = merge_scope(&environment.variables, globals);

        let final_headers = resolve_headers(request, &scope);
        let final_params = resolve_params(request, &scope);
        let final_body = materialize_body_with(&request.body, &scope, &self.settings);
        let final_url = resolve_template(&request.endpoint, &scope.with_local(&request.vars));

        tracing::debug!(
            environment = %environment.name,
            headers = final_headers.len(),
            params = final_params.len(),
            body = request.body.kind_name(),
            "assembled effective request"
        );

        EffectiveRequest {
            request: request.clone(),
            final_url,
            final_headers,
            final_params,
            final_body,
            final_vars: request.vars.clone(),
        }
    }

    /// Lists placeholder names that would stay literal after resolution.
    ///
    /// Only text that reaches the request is inspected: sendable headers and
    /// params, auth that a declared `Authorization` header does not replace,
    /// and active url-encoded entries with a key. Names are reported once, in
    /// first-seen order: endpoint, auth, headers, params, body.
    pub fn unresolved_variables(&self, request: &Request, environment: &Environment) -> Vec<String> {
        let scope = merge_scope(&environment.variables, &self.global_snapshot());
        let mut names = resolve(&request.endpoint, &scope.with_local(&request.vars)).unresolved;
        let mut inspect = |template: &str| names.extend(resolve(template, &scope).unresolved);

        if let Some(config) = request.auth.effective()
            && auth_is_sent(request, config)
        {
            auth_templates(config).into_iter().for_each(&mut inspect);
        }
        for header in request.headers.iter().filter(|h| h.is_sendable()) {
            inspect(&header.key);
            inspect(&header.value);
        }
        for param in request.params.iter().filter(|p| p.is_sendable()) {
            inspect(&param.key);
            inspect(&param.value);
        }
        for template in body_templates(&request.body) {
            inspect(&template);
        }

        let mut seen = Vec::with_capacity(names.len());
        names.retain(|name| {
            if seen.contains(name) {
                false
            } else {
                seen.push(name.clone());
                true
            }
        });
        names
    }

    fn global_snapshot(&self) -> Vec<Variable> {
        if self.settings.include_globals {
            self.globals.snapshot()
        } else {
            Vec::new()
        }
    }
}

/// Whether `config` still contributes a header or param to `request`.
///
/// A declared `Authorization` header, active or not, replaces every auth
/// header; an API key in the query string is unaffected.
fn auth_is_sent(request: &Request, config: &AuthConfig) -> bool {
    matches!(
        config,
        AuthConfig::ApiKey {
            add_to: ApiKeyLocation::QueryParams,
            ..
        }
    ) || !declares_header(&request.headers, AUTHORIZATION, HeaderMatch::Any)
}

fn auth_templates(config: &AuthConfig) -> Vec<&str> {
    match config {
        AuthConfig::None => Vec::new(),
        AuthConfig::Basic { username, password } => vec![username, password],
        AuthConfig::Bearer { token } | AuthConfig::OAuth2 { token } => vec![token],
        AuthConfig::ApiKey { key, value, .. } => vec![key, value],
    }
}

fn body_templates(body: &RequestBody) -> Vec<String> {
    match body {
        RequestBody::None => Vec::new(),
        RequestBody::Raw { raw, .. } => vec![raw.clone()],
        // A malformed body is sent empty, so nothing in it is reported.
        RequestBody::UrlEncoded { raw } => parse_raw_entries(raw)
            .unwrap_or_default()
            .into_iter()
            .filter(|e| e.active && !e.key.is_empty())
            .flat_map(|e| [e.key, e.value])
            .collect(),
        RequestBody::Multipart { entries } => entries
            .iter()
            .filter(|e| e.active && !e.key.is_empty())
            .flat_map(|e| match &e.value {
                FormDataValue::Text(value) => vec![e.key.clone(), value.clone()],
                FormDataValue::Files(_) => vec![e.key.clone()],
            })
            .collect(),
    }
}

/// Computed headers first, then declared ones; filtered, then resolved.
fn resolve_headers(request: &Request, scope: &Scope) -> Vec<ResolvedHeader> {
    let computed = computed_headers(request, scope);

    computed
        .iter()
        .map(|c| &c.header)
        .chain(&request.headers)
        .filter(|h| Header::is_sendable(h))
        .map(|h| {
            ResolvedHeader::new(
                resolve_template(&h.key, scope),
                resolve_template(&h.value, scope),
            )
        })
        .collect()
}

/// Computed params first, then declared ones; filtered, then resolved.
fn resolve_params(request: &Request, scope: &Scope) -> Vec<ResolvedParam> {
    let computed = computed_params(request, scope);

    computed
        .iter()
        .map(|c| &c.param)
        .chain(&request.params)
        .filter(|p| Param::is_sendable(p))
        .map(|p| {
            ResolvedParam::new(
                resolve_template(&p.key, scope),
                resolve_template(&p.value, scope),
            )
        })
        .collect()
}
