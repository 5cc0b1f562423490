//! Endpoint/credential persistence
//!
//! A small JSON file under the platform config directory. The rest of the
//! app receives the loaded config explicitly; nothing reads it ambiently.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configured endpoint and credential, both plain strings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
}

/// Default config file location
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gearscope")
        .join("config.json")
}

impl AppConfig {
    /// Load from disk; a missing or unreadable file just means defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("ignoring malformed config {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                tracing::debug!("no config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Persist to disk, creating the directory on first save.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = AppConfig {
            endpoint: "https://api.example.com/Prod/gearboxes".to_string(),
            api_key: "secret".to_string(),
        };
        config.save(&path).unwrap();
        assert_eq!(AppConfig::load(&path), config);
    }

    #[test]
    fn test_missing_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            AppConfig::load(&dir.path().join("absent.json")),
            AppConfig::default()
        );
    }

    #[test]
    fn test_malformed_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        assert_eq!(AppConfig::load(&path), AppConfig::default());
    }
}
