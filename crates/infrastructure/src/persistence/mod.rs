//! File-backed persistence.

mod settings_repository;

pub use settings_repository::{SETTINGS_FILE_NAME, SettingsError, SettingsRepository};
