//! Effective request to `reqwest::Request` conversion.

use materia_domain::{EffectiveRequest, FinalBody, HttpMethod, MultipartForm, PartValue};
use reqwest::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method};
use url::Url;

/// Error type for request building.
#[derive(Debug, thiserror::Error)]
pub enum RequestBuildError {
    /// The resolved URL is not absolute or not parseable.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        /// The offending URL
        url: String,
        /// Parser error
        #[source]
        source: url::ParseError,
    },

    /// A resolved header name or value is not valid on the wire.
    #[error("Invalid header '{name}': {message}")]
    InvalidHeader {
        /// Header name as resolved
        name: String,
        /// What was wrong with it
        message: String,
    },

    /// A multipart file carries an unusable MIME type.
    #[error("Invalid MIME type '{mime}': {message}")]
    InvalidMimeType {
        /// The MIME type as given
        mime: String,
        /// What was wrong with it
        message: String,
    },

    /// reqwest rejected the assembled request.
    #[error("Failed to build request: {0}")]
    Http(#[from] reqwest::Error),
}

/// Builds a ready-to-send request from `effective`.
///
/// Params are appended to the URL's existing query in order. For multipart
/// bodies any declared content-type is left out so that reqwest can set one
/// carrying the boundary.
///
/// # Errors
///
/// Returns an error if the URL, a header or a part's MIME type is invalid.
pub fn build_request(
    client: &Client,
    effective: &EffectiveRequest,
) -> Result<reqwest::Request, RequestBuildError> {
    let url = build_url(effective)?;
    let multipart = matches!(effective.final_body, FinalBody::Multipart(_));

    let mut builder = client.request(to_method(effective.request.method), url);

    for header in &effective.final_headers {
        let name = HeaderName::from_bytes(header.key.as_bytes()).map_err(|e| {
            RequestBuildError::InvalidHeader {
                name: header.key.clone(),
                message: e.to_string(),
            }
        })?;
        if multipart && name == CONTENT_TYPE {
            tracing::trace!(value = %header.value, "leaving content-type to multipart encoder");
            continue;
        }
        let value = HeaderValue::from_str(&header.value).map_err(|e| {
            RequestBuildError::InvalidHeader {
                name: header.key.clone(),
                message: e.to_string(),
            }
        })?;
        builder = builder.header(name, value);
    }

    builder = match &effective.final_body {
        FinalBody::Absent => builder,
        FinalBody::Text(text) => builder.body(text.clone()),
        FinalBody::Multipart(form) => builder.multipart(build_form(form)?),
    };

    Ok(builder.build()?)
}

fn build_url(effective: &EffectiveRequest) -> Result<Url, RequestBuildError> {
    let mut url =
        Url::parse(&effective.final_url).map_err(|source| RequestBuildError::InvalidUrl {
            url: effective.final_url.clone(),
            source,
        })?;

    if !effective.final_params.is_empty() {
        let mut query = url.query_pairs_mut();
        for param in &effective.final_params {
            query.append_pair(&param.key, &param.value);
        }
    }

    Ok(url)
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
        HttpMethod::Head => Method::HEAD,
        HttpMethod::Options => Method::OPTIONS,
    }
}

/// Converts the ordered multipart container into a reqwest form.
fn build_form(multipart: &MultipartForm) -> Result<Form, RequestBuildError> {
    let mut form = Form::new();

    for part in multipart.parts() {
        match &part.value {
            PartValue::Text(value) => {
                form = form.text(part.key.clone(), value.clone());
            }
            PartValue::File(blob) => {
                let file_name = blob.file_name.clone().unwrap_or_default();
                let mime = blob.mime_type.clone().unwrap_or_else(|| {
                    mime_guess::from_path(&file_name)
                        .first_or_octet_stream()
                        .to_string()
                });

                let file = Part::bytes(blob.bytes.clone())
                    .file_name(file_name)
                    .mime_str(&mime)
                    .map_err(|e| RequestBuildError::InvalidMimeType {
                        mime: mime.clone(),
                        message: e.to_string(),
                    })?;

                form = form.part(part.key.clone(), file);
            }
        }
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use materia_application::EffectiveRequestAssembler;
    use materia_application::ports::NoGlobals;
    use materia_domain::{
        Auth, AuthConfig, Blob, Environment, FormDataEntry, Header, Param, Request, RequestBody,
    };
    use pretty_assertions::assert_eq;

    fn effective(request: &Request) -> EffectiveRequest {
        let env = Environment::new("dev")
            .with_variable("host", "api.test")
            .with_variable("token", "abc");
        EffectiveRequestAssembler::new(NoGlobals).resolve(request, &env)
    }

    fn build(request: &Request) -> Result<reqwest::Request, RequestBuildError> {
        build_request(&Client::new(), &effective(request))
    }

    #[test]
    fn test_builds_url_with_params() {
        let request = Request::new("https://{{host}}/search?lang=en")
            .with_param(Param::new("q", "a b"))
            .with_auth(Auth::active(AuthConfig::api_key_query("key", "{{token}}")));

        let built = build(&request).unwrap_or_else(|e| unreachable!("valid request: {e}"));
        assert_eq!(
            built.url().as_str(),
            "https://api.test/search?lang=en&key=abc&q=a+b"
        );
        assert_eq!(built.method(), &Method::GET);
    }

    #[test]
    fn test_url_without_params_has_no_query() {
        let built = build(&Request::new("https://{{host}}/"))
            .unwrap_or_else(|e| unreachable!("valid request: {e}"));
        assert_eq!(built.url().query(), None);
    }

    #[test]
    fn test_text_body_and_headers() {
        let request = Request::new("https://{{host}}/users")
            .with_method(HttpMethod::Post)
            .with_auth(Auth::active(AuthConfig::bearer("{{token}}")))
            .with_body(RequestBody::json(r#"{"name": "x"}"#));

        let built = build(&request).unwrap_or_else(|e| unreachable!("valid request: {e}"));
        assert_eq!(built.method(), &Method::POST);
        assert_eq!(
            built.headers().get("authorization").and_then(|v| v.to_str().ok()),
            Some("Bearer abc")
        );
        assert_eq!(
            built.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
        assert_eq!(
            built.body().and_then(reqwest::Body::as_bytes),
            Some(br#"{"name": "x"}"#.as_slice())
        );
    }

    #[test]
    fn test_multipart_sets_boundary_content_type() {
        let request = Request::new("https://{{host}}/upload")
            .with_method(HttpMethod::Post)
            .with_body(RequestBody::multipart(vec![
                FormDataEntry::text("title", "t"),
                FormDataEntry::files("file", vec![Blob::new(b"data".to_vec())]),
            ]));

        let built = build(&request).unwrap_or_else(|e| unreachable!("valid request: {e}"));
        let content_types: Vec<_> = built
            .headers()
            .get_all(CONTENT_TYPE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect();

        assert_eq!(content_types.len(), 1);
        assert!(content_types[0].starts_with("multipart/form-data; boundary="));
    }

    #[test]
    fn test_relative_url_is_rejected() {
        let result = build(&Request::new("/users"));
        assert!(matches!(result, Err(RequestBuildError::InvalidUrl { .. })));
    }

    #[test]
    fn test_invalid_header_name_is_rejected() {
        let request =
            Request::new("https://{{host}}/").with_header(Header::new("bad header", "x"));
        let result = build(&request);
        assert!(matches!(
            result,
            Err(RequestBuildError::InvalidHeader { name, .. }) if name == "bad header"
        ));
    }

    #[test]
    fn test_invalid_blob_mime_is_rejected() {
        let blob = Blob::new(b"x".to_vec()).with_mime_type("not a mime");
        let request = Request::new("https://{{host}}/")
            .with_body(RequestBody::multipart(vec![FormDataEntry::files("f", vec![blob])]));

        let result = build(&request);
        assert!(matches!(result, Err(RequestBuildError::InvalidMimeType { .. })));
    }
}
