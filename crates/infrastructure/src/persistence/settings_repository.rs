//! Resolver settings persistence.
//!
//! Settings live in a single JSON file, `settings.json` by default, inside a
//! directory chosen by the host application.

use std::path::{Path, PathBuf};

use materia_domain::ResolverSettings;
use tokio::fs;

use crate::serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};

/// Default settings file name.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),
}

/// Repository for [`ResolverSettings`].
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    path: PathBuf,
}

impl SettingsRepository {
    /// Creates a repository reading and writing `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a repository for [`SETTINGS_FILE_NAME`] inside `dir`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(SETTINGS_FILE_NAME))
    }

    /// Returns the settings file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads settings from disk.
    ///
    /// Returns defaults if the file doesn't exist. Fields missing from the
    /// file take their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load(&self) -> Result<ResolverSettings, SettingsError> {
        if !fs::try_exists(&self.path).await? {
            tracing::debug!(path = %self.path.display(), "no settings file, using defaults");
            return Ok(ResolverSettings::default());
        }

        let content = fs::read(&self.path).await?;
        Ok(from_json_bytes(&content)?)
    }

    /// Saves settings to disk, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub async fn save(&self, settings: &ResolverSettings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        let content = to_json_stable_bytes(settings)?;
        fs::write(&self.path, content).await?;
        tracing::debug!(path = %self.path.display(), "settings saved");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn temp_dir() -> TempDir {
        TempDir::new().unwrap_or_else(|e| unreachable!("temp dir: {e}"))
    }

    #[tokio::test]
    async fn test_load_returns_defaults_when_no_file() {
        let dir = temp_dir();
        let repo = SettingsRepository::in_dir(dir.path());

        let settings = repo.load().await.ok();
        assert_eq!(settings, Some(ResolverSettings::default()));
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = temp_dir();
        let repo = SettingsRepository::new(dir.path().join("nested").join("materia.json"));
        let settings = ResolverSettings {
            include_globals: false,
            default_file_name: "attachment".to_string(),
        };

        assert!(repo.save(&settings).await.is_ok());
        assert_eq!(repo.load().await.ok(), Some(settings));
    }

    #[tokio::test]
    async fn test_partial_file_fills_defaults() {
        let dir = temp_dir();
        let repo = SettingsRepository::in_dir(dir.path());
        assert!(fs::write(repo.path(), br#"{"include_globals": false}"#).await.is_ok());

        let settings = repo.load().await.ok();
        assert_eq!(
            settings,
            Some(ResolverSettings {
                include_globals: false,
                ..ResolverSettings::default()
            })
        );
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = temp_dir();
        let repo = SettingsRepository::in_dir(dir.path());
        assert!(fs::write(repo.path(), b"not json").await.is_ok());

        assert!(matches!(
            repo.load().await,
            Err(SettingsError::Serialization(_))
        ));
    }
}
