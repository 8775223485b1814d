// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for the setlist library.
//!
//! Settles where documents live, the keys they are stored under and how
//! logging is set up. Read from a TOML file; every field has a default.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::storage::{FileStore, SETS_KEY, SONGS_KEY};

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Directory holding the persisted documents
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Key of the song dictionary document
    #[serde(default = "default_songs_key")]
    pub songs_key: String,
    /// Key of the performance set document
    #[serde(default = "default_sets_key")]
    pub sets_key: String,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
fn default_songs_key() -> String {
    SONGS_KEY.to_string()
}
fn default_sets_key() -> String {
    SETS_KEY.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            songs_key: default_songs_key(),
            sets_key: default_sets_key(),
            logging: LoggingConfig::default(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML configuration")
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize configuration to TOML")
    }

    /// Save configuration to a TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let text = self.to_toml()?;
        fs::write(path.as_ref(), text)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Document store rooted at `data_dir`
    pub fn open_file_store(&self) -> FileStore {
        FileStore::new(&self.data_dir)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Filter directives, overridden by `RUST_LOG`
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Include the event target in log lines
    #[serde(default)]
    pub with_target: bool,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            with_target: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_config() {
        let text = r#"
data_dir = "/var/lib/setlist"
songs_key = "songs"
sets_key = "sets"

[logging]
filter = "setlist=debug"
with_target = true
"#;

        let config = StoreConfig::from_toml(text).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/setlist"));
        assert_eq!(config.songs_key, "songs");
        assert_eq!(config.sets_key, "sets");
        assert_eq!(config.logging.filter, "setlist=debug");
        assert!(config.logging.with_target);
    }

    #[test]
    fn test_default_values() {
        let config = StoreConfig::from_toml("").unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.songs_key, "songdictionary");
        assert_eq!(config.sets_key, "performancesets");
        assert_eq!(config.logging.filter, "info");
        assert!(!config.logging.with_target);
    }

    #[test]
    fn test_round_trip_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("setlist.toml");

        let original = StoreConfig {
            data_dir: dir.path().join("docs"),
            ..StoreConfig::default()
        };
        original.save(&path).unwrap();

        let loaded = StoreConfig::load(&path).unwrap();
        assert_eq!(loaded, original);
        assert_eq!(loaded.open_file_store().dir(), dir.path().join("docs"));
    }

    #[test]
    fn test_invalid_config() {
        assert!(StoreConfig::from_toml("data_dir = [").is_err());
        assert!(StoreConfig::load("/definitely/not/here.toml").is_err());
    }
}
