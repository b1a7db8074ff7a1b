//! HTTP Request body types

use serde::{Deserialize, Serialize};

/// Content type reported by url-encoded bodies.
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Content type reported by multipart bodies.
pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// The declared body of a request, tagged by content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RequestBody {
    /// No body
    #[default]
    None,
    /// Form URL encoded body, declared as raw `key=value` entries
    UrlEncoded {
        /// Raw entry text (newline or `&` separated)
        raw: String,
    },
    /// Multipart form data
    Multipart {
        /// Form entries in declaration order
        #[serde(default)]
        entries: Vec<FormDataEntry>,
    },
    /// Raw text body (JSON, XML, plain text, ...)
    Raw {
        /// The content type (e.g., "application/json", "text/plain")
        content_type: String,
        /// The body text, may contain `{{variable}}` placeholders
        #[serde(default)]
        raw: String,
    },
}

impl RequestBody {
    /// Creates a url-encoded body from raw entry text.
    #[must_use]
    pub fn url_encoded(raw: impl Into<String>) -> Self {
        Self::UrlEncoded { raw: raw.into() }
    }

    /// Creates a multipart body.
    #[must_use]
    pub const fn multipart(entries: Vec<FormDataEntry>) -> Self {
        Self::Multipart { entries }
    }

    /// Creates a JSON body.
    #[must_use]
    pub fn json(raw: impl Into<String>) -> Self {
        Self::raw("application/json", raw)
    }

    /// Creates a plain text body.
    #[must_use]
    pub fn text(raw: impl Into<String>) -> Self {
        Self::raw("text/plain", raw)
    }

    /// Creates a raw body with an arbitrary content type.
    #[must_use]
    pub fn raw(content_type: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::Raw {
            content_type: content_type.into(),
            raw: raw.into(),
        }
    }

    /// Returns the declared content type, or `None` for an empty body.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::UrlEncoded { .. } => Some(FORM_URLENCODED),
            Self::Multipart { .. } => Some(MULTIPART_FORM_DATA),
            Self::Raw { content_type, .. } => Some(content_type),
        }
    }

    /// Short name of the body kind, used in logs.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::UrlEncoded { .. } => "urlencoded",
            Self::Multipart { .. } => "multipart",
            Self::Raw { .. } => "raw",
        }
    }
}

/// One entry of a multipart body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDataEntry {
    /// Field name, may contain placeholders
    pub key: String,
    /// Whether the entry is sent
    #[serde(default = "default_active")]
    pub active: bool,
    /// Field payload
    pub value: FormDataValue,
}

const fn default_active() -> bool {
    true
}

impl FormDataEntry {
    /// Creates an active text entry.
    #[must_use]
    pub fn text(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            active: true,
            value: FormDataValue::Text(value.into()),
        }
    }

    /// Creates an active file entry holding the given blobs.
    #[must_use]
    pub fn files(key: impl Into<String>, blobs: Vec<Blob>) -> Self {
        Self {
            key: key.into(),
            active: true,
            value: FormDataValue::Files(blobs),
        }
    }

    /// Marks this entry inactive.
    #[must_use]
    pub const fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }

    /// Returns true for file entries.
    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self.value, FormDataValue::Files(_))
    }
}

/// Payload of a multipart entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum FormDataValue {
    /// Plain text field
    Text(String),
    /// One or more attached files
    Files(Vec<Blob>),
}

/// In-memory file content attached to a multipart entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blob {
    /// Original file name, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// MIME type, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// File bytes
    #[serde(default)]
    pub bytes: Vec<u8>,
}

impl Blob {
    /// Creates an anonymous blob.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: None,
            mime_type: None,
            bytes: bytes.into(),
        }
    }

    /// Sets the file name.
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Sets the MIME type.
    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}
