//! Body materialization.
//!
//! Turns a declared [`RequestBody`] into the [`FinalBody`] that is actually
//! sent, resolving placeholders along the way.

use materia_domain::{
    FinalBody, FormDataEntry, FormDataValue, MultipartForm, RequestBody, ResolverSettings,
};

use crate::raw_entries::parse_raw_entries;
use crate::variable_resolver::{
    Scope, resolve_body_template, resolve_template, resolve_template_checked,
};

/// Materializes `body` against `scope` with default settings.
#[must_use]
pub fn materialize_body(body: &RequestBody, scope: &Scope) -> FinalBody {
    materialize_body_with(body, scope, &ResolverSettings::default())
}

/// Materializes `body` against `scope`.
#[must_use]
pub fn materialize_body_with(
    body: &RequestBody,
    scope: &Scope,
    settings: &ResolverSettings,
) -> FinalBody {
    match body {
        RequestBody::None => FinalBody::Absent,
        RequestBody::UrlEncoded { raw } => FinalBody::Text(encode_url_encoded(raw, scope)),
        RequestBody::Multipart { entries } => {
            FinalBody::Multipart(build_multipart(entries, scope, settings))
        }
        RequestBody::Raw { content_type, raw } => {
            FinalBody::Text(resolve_body_template(raw, content_type, scope))
        }
    }
}

/// Resolves and serializes a url-encoded body.
///
/// Entries that fail to resolve are dropped. A body that cannot be parsed at
/// all serializes to the empty string.
fn encode_url_encoded(raw: &str, scope: &Scope) -> String {
    let entries = match parse_raw_entries(raw) {
        Ok(entries) => entries,
        Err(error) => {
            tracing::debug!(%error, "url-encoded body is malformed, sending empty body");
            return String::new();
        }
    };

    let mut groups: Vec<(String, Vec<String>)> = Vec::new();

    for entry in entries
        .into_iter()
        .filter(|e| e.active && !e.key.is_empty())
    {
        let resolved = resolve_template_checked(&entry.key, scope).and_then(|key| {
            resolve_template_checked(&entry.value, scope).map(|value| (key, value))
        });

        let (key, value) = match resolved {
            Ok(pair) => pair,
            Err(error) => {
                tracing::debug!(key = %entry.key, %error, "dropping url-encoded entry");
                continue;
            }
        };

        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value),
            None => groups.push((key, vec![value])),
        }
    }

    let pairs: Vec<(&str, &str)> = groups
        .iter()
        .flat_map(|(key, values)| values.iter().map(move |v| (key.as_str(), v.as_str())))
        .collect();

    serde_urlencoded::to_string(pairs).unwrap_or_else(|error| {
        tracing::debug!(%error, "url-encoded serialization failed, sending empty body");
        String::new()
    })
}

/// Builds the multipart container: text fields first, then files.
fn build_multipart(
    entries: &[FormDataEntry],
    scope: &Scope,
    settings: &ResolverSettings,
) -> MultipartForm {
    let mut sendable: Vec<&FormDataEntry> = entries
        .iter()
        .filter(|e| e.active && !e.key.is_empty())
        .collect();
    sendable.sort_by_key(|e| e.is_file());

    let mut form = MultipartForm::new();
    for entry in sendable {
        let key = resolve_template(&entry.key, scope);
        match &entry.value {
            FormDataValue::Text(value) => form.push_text(key, resolve_template(value, scope)),
            FormDataValue::Files(blobs) => {
                for blob in blobs {
                    let mut blob = blob.clone();
                    if blob.file_name.is_none() {
                        blob.file_name = Some(settings.default_file_name.clone());
                    }
                    form.push_file(key.clone(), blob);
                }
            }
        }
    }

    form
}
