//! Resolver settings.
//!
//! Tunables for the materialization engine, persisted as JSON.

use serde::{Deserialize, Serialize};

/// File name browsers give to anonymous blobs in multipart forms.
pub const DEFAULT_FILE_NAME: &str = "blob";

/// Settings consulted by the effective request assembler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverSettings {
    /// Whether the process-wide global scope is consulted after the
    /// environment.
    #[serde(default = "default_include_globals")]
    pub include_globals: bool,

    /// File name used for multipart blobs that carry none.
    #[serde(default = "default_file_name")]
    pub default_file_name: String,
}

const fn default_include_globals() -> bool {
    true
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            include_globals: default_include_globals(),
            default_file_name: default_file_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ResolverSettings::default();
        assert!(settings.include_globals);
        assert_eq!(settings.default_file_name, "blob");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: ResolverSettings = serde_json::from_str(r#"{"include_globals":false}"#)
            .unwrap_or_else(|e| unreachable!("valid settings json: {e}"));
        assert!(!settings.include_globals);
        assert_eq!(settings.default_file_name, DEFAULT_FILE_NAME);
    }
}
