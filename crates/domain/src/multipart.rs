//! Wire-ready multipart container.

use serde::{Deserialize, Serialize};

use crate::request::Blob;

/// Ordered multipart form produced from a resolved multipart body.
///
/// Field order is significant and preserved exactly as built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultipartForm {
    parts: Vec<MultipartPart>,
}

/// A single named part of a [`MultipartForm`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipartPart {
    /// Field name
    pub key: String,
    /// Field payload
    pub value: PartValue,
}

/// Payload of a multipart part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum PartValue {
    /// Text field
    Text(String),
    /// File field
    File(Blob),
}

impl MultipartForm {
    /// Creates an empty form.
    #[must_use]
    pub const fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Appends a text part.
    pub fn push_text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.parts.push(MultipartPart {
            key: key.into(),
            value: PartValue::Text(value.into()),
        });
    }

    /// Appends a file part.
    pub fn push_file(&mut self, key: impl Into<String>, blob: Blob) {
        self.parts.push(MultipartPart {
            key: key.into(),
            value: PartValue::File(blob),
        });
    }

    /// Returns the parts in order.
    #[must_use]
    pub fn parts(&self) -> &[MultipartPart] {
        &self.parts
    }

    /// Returns the field names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|p| p.key.as_str())
    }

    /// Returns the number of parts.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns true if there are no parts.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl FromIterator<MultipartPart> for MultipartForm {
    fn from_iter<T: IntoIterator<Item = MultipartPart>>(iter: T) -> Self {
        Self {
            parts: iter.into_iter().collect(),
        }
    }
}
