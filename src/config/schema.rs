use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strum::Display;

use crate::error::ConfigError;
use crate::journal::DEFAULT_CAPACITY;

// ── Top-level config ──────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// `~/.wbg` - computed from home, not serialized
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub libraries: LibrariesConfig,

    #[serde(default)]
    pub journal: JournalConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.journal.capacity == 0 {
            return Err(ConfigError::Validation(
                "journal.capacity must be at least 1".into(),
            ));
        }
        if let Some(dir) = &self.libraries.dir
            && dir.as_os_str().is_empty()
        {
            return Err(ConfigError::Validation(
                "libraries.dir must not be empty when set".into(),
            ));
        }
        Ok(())
    }

    /// Explicit `journal.path`, else `journal.json` next to the config.
    pub fn journal_path(&self) -> PathBuf {
        self.journal
            .path
            .clone()
            .unwrap_or_else(|| self.data_dir.join("journal.json"))
    }
}

// ── Content libraries ────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibrariesConfig {
    /// Directory holding replacement library JSON files (default: built-in)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

// ── Generation journal ───────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalConfig {
    /// Record each successful generation (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Journal file (default: ~/.wbg/journal.json)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Entries retained, oldest dropped first (default: 100)
    #[serde(default = "default_journal_capacity")]
    pub capacity: usize,
}

fn default_true() -> bool {
    true
}

fn default_journal_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
            capacity: default_journal_capacity(),
        }
    }
}

// ── Output ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert!(config.journal.enabled);
        assert_eq!(config.journal.capacity, 100);
        assert!(config.libraries.dir.is_none());
        assert_eq!(config.output.format, OutputFormat::Text);
        config.validate().unwrap();
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.journal.enabled);
        assert_eq!(config.journal.capacity, DEFAULT_CAPACITY);
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let raw = r#"
[journal]
capacity = 5

[output]
format = "json"
"#;
        let config: Config = toml::from_str(raw).unwrap();
        assert!(config.journal.enabled);
        assert_eq!(config.journal.capacity, 5);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn zero_capacity_is_invalid() {
        let mut config = Config::default();
        config.journal.capacity = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn journal_path_defaults_next_to_config() {
        let config = Config {
            data_dir: PathBuf::from("/home/user/.wbg"),
            ..Config::default()
        };
        assert_eq!(config.journal_path(), PathBuf::from("/home/user/.wbg/journal.json"));
    }

    #[test]
    fn toml_roundtrip_skips_computed_paths() {
        let config = Config {
            data_dir: PathBuf::from("/tmp/wbg"),
            config_path: PathBuf::from("/tmp/wbg/config.toml"),
            ..Config::default()
        };
        let raw = toml::to_string_pretty(&config).unwrap();
        assert!(!raw.contains("/tmp/wbg"));
        let parsed: Config = toml::from_str(&raw).unwrap();
        assert_eq!(parsed.journal.capacity, config.journal.capacity);
    }
}
