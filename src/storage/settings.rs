//! Client settings and configuration

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which key/value store backs local storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// SQLite database in the data directory
    Sqlite,
    /// Single JSON file in the data directory
    JsonFile,
    /// Nothing persisted (lost on exit)
    Memory,
}

/// Client settings
///
/// Settings are stored in JSON format and can be loaded/saved from disk.
/// Missing fields take their defaults, so older settings files keep working.
///
/// # Example
/// ```rust,no_run
/// use guru_site::storage::Settings;
///
/// // Load settings (returns default if file doesn't exist)
/// let mut settings = Settings::load("settings.json").expect("Failed to load");
///
/// settings.sync_interval_secs = 300;
/// settings.save("settings.json").expect("Failed to save");
///
/// println!("Data directory: {}", settings.data_dir);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory for local storage and logs
    pub data_dir: String,
    /// Local storage backend
    pub storage_backend: StorageBackend,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
    /// Interval between automatic offline queue syncs in seconds (0 disables)
    pub sync_interval_secs: u64,
    /// How long a notification stays on screen in milliseconds
    pub notification_duration_ms: u64,
}

impl Settings {
    /// Load settings from a JSON file
    ///
    /// # Returns
    /// The loaded settings, or default settings if the file doesn't exist or is empty
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read settings: {}", e)))?;

        if data.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_str(&data)
            .map_err(|e| Error::Config(format!("Failed to parse settings: {}", e)))
    }

    /// Save settings to a JSON file, creating the parent directory if needed
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create settings directory: {}", e)))?;
        }

        let json = serde_json::to_string_pretty(self)?;

        std::fs::write(path, json)
            .map_err(|e| Error::Config(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }

    /// HTTP request timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Automatic sync interval, `None` when disabled
    pub fn sync_interval(&self) -> Option<Duration> {
        (self.sync_interval_secs > 0).then(|| Duration::from_secs(self.sync_interval_secs))
    }

    /// Notification lifetime
    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_duration_ms)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: "./data".to_string(),
            storage_backend: StorageBackend::Sqlite,
            request_timeout_secs: 10,
            sync_interval_secs: 600, // 10 minutes
            notification_duration_ms: 5000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.storage_backend, StorageBackend::Sqlite);
        assert_eq!(settings.notification_duration(), Duration::from_millis(5000));
        assert_eq!(settings.sync_interval(), Some(Duration::from_secs(600)));
    }

    #[test]
    fn test_load_missing_returns_default() {
        let dir = TempDir::new().expect("temp dir");
        let settings = Settings::load(dir.path().join("missing.json")).expect("load");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("config").join("settings.json");

        let settings = Settings {
            storage_backend: StorageBackend::JsonFile,
            sync_interval_secs: 0,
            ..Settings::default()
        };
        settings.save(&path).expect("save");

        let loaded = Settings::load(&path).expect("load");
        assert_eq!(loaded.storage_backend, StorageBackend::JsonFile);
        assert_eq!(loaded.sync_interval(), None);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"storage_backend":"memory"}"#).expect("write");

        let loaded = Settings::load(&path).expect("load");
        assert_eq!(loaded.storage_backend, StorageBackend::Memory);
        assert_eq!(loaded.request_timeout_secs, 10);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "nope").expect("write");

        assert!(matches!(Settings::load(&path), Err(Error::Config(_))));
    }
}
