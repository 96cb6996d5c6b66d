//! # Configuration State
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (later overrides earlier)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line flags (highest priority)                              │
//! │     --json, --sequential-ids                                           │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     SHOPLIST_TITLE="Weekend groceries"                                 │
//! │     SHOPLIST_OUTPUT=json                                               │
//! │     SHOPLIST_ID_STRATEGY=sequential                                    │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/shoplist/shoplist.toml (Linux)                           │
//! │     ~/Library/Application Support/com.shoplist.shoplist/... (macOS)    │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [ui]
//! title = "Shopping List"
//! empty_message = "Add an item to start your shopping list."
//! confirm_prompt = "Delete this item?"
//! output = "text"   # text | json
//!
//! [store]
//! id_strategy = "uuid"  # uuid | sequential
//! ```
//!
//! Configuration is read-only after startup.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shoplist_core::IdStrategy;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "shoplist.toml";

// =============================================================================
// Errors
// =============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    /// The config file could not be read.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for this schema.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range or malformed.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Output Format
// =============================================================================

/// How the list is written to the terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable rows with checkboxes
    #[default]
    Text,

    /// One JSON document per render, for scripting
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::Invalid(format!(
                "output must be 'text' or 'json', got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

/// Screen copy and output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Header shown above the list
    pub title: String,

    /// Shown instead of rows when the list is empty
    pub empty_message: String,

    /// Question asked before deleting an item
    pub confirm_prompt: String,

    /// Text or JSON rendering
    pub output: OutputFormat,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            title: "Shopping List".to_string(),
            empty_message: "Add an item to start your shopping list.".to_string(),
            confirm_prompt: "Delete this item?".to_string(),
            output: OutputFormat::Text,
        }
    }
}

/// List store settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StoreConfig {
    /// Kind of ids handed out to new items
    pub id_strategy: IdStrategy,
}

// =============================================================================
// App Config
// =============================================================================

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub store: StoreConfig,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`explicit_path`, or the platform default if it exists)
    /// 3. Environment variables
    ///
    /// A missing `explicit_path` is an error; a missing default file is not.
    pub fn load(explicit_path: Option<&Path>) -> ConfigResult<Self> {
        Self::load_with(explicit_path, env_lookup)
    }

    /// [`load`](Self::load) with overrides read through `lookup`.
    pub fn load_with<F>(explicit_path: Option<&Path>, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match explicit_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Self::from_file(path)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_overrides(lookup);
        config.validate()?;

        Ok(config)
    }

    /// Loads config, replacing only the file layer with defaults if it fails.
    ///
    /// Environment overrides still apply on top of the fallback.
    pub fn load_or_default(explicit_path: Option<&Path>) -> Self {
        Self::load_or_default_with(explicit_path, env_lookup)
    }

    /// [`load_or_default`](Self::load_or_default) with overrides read through
    /// `lookup`.
    pub fn load_or_default_with<F>(explicit_path: Option<&Path>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let err = match Self::load_with(explicit_path, &lookup) {
            Ok(config) => return config,
            Err(e) => e,
        };
        warn!("Failed to load config: {}. Using defaults.", err);

        let mut config = Self::default();
        config.apply_overrides(&lookup);
        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                warn!("Ignoring environment overrides: {}", e);
                Self::default()
            }
        }
    }

    /// Parses a config file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parses config from a TOML string.
    pub fn from_toml(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.ui.title.trim().is_empty() {
            return Err(ConfigError::Invalid("ui.title must not be empty".into()));
        }

        if self.ui.confirm_prompt.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "ui.confirm_prompt must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Applies overrides from a key lookup (the environment in production).
    ///
    /// Unparseable values are logged and skipped.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(title) = lookup("SHOPLIST_TITLE") {
            debug!(title = %title, "Overriding title from environment");
            self.ui.title = title;
        }

        if let Some(output) = lookup("SHOPLIST_OUTPUT") {
            match output.parse() {
                Ok(parsed) => self.ui.output = parsed,
                Err(e) => warn!("Ignoring SHOPLIST_OUTPUT: {}", e),
            }
        }

        if let Some(strategy) = lookup("SHOPLIST_ID_STRATEGY") {
            match strategy.parse() {
                Ok(parsed) => self.store.id_strategy = parsed,
                Err(e) => warn!("Ignoring SHOPLIST_ID_STRATEGY: {}", e),
            }
        }
    }

    /// Platform config file location.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "shoplist", "shoplist")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

/// Reads an override from the process environment.
fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.ui.title, "Shopping List");
        assert_eq!(config.ui.output, OutputFormat::Text);
        assert_eq!(config.store.id_strategy, IdStrategy::Uuid);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [store]
            id_strategy = "sequential"
            "#,
        )
        .unwrap();

        assert_eq!(config.store.id_strategy, IdStrategy::Sequential);
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_invalid_toml_value() {
        let err = AppConfig::from_toml("[ui]\noutput = \"yaml\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\ntitle = \"Weekend\"\noutput = \"json\"").unwrap();

        let config = AppConfig::load_with(Some(file.path()), lookup_from(&[])).unwrap();
        assert_eq!(config.ui.title, "Weekend");
        assert_eq!(config.ui.output, OutputFormat::Json);
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = AppConfig::load_with(Some(&missing), lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\ntitle = \"   \"").unwrap();

        let err = AppConfig::load_with(Some(file.path()), lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_overrides() {
        let mut config = AppConfig::default();
        config.apply_overrides(lookup_from(&[
            ("SHOPLIST_TITLE", "Party"),
            ("SHOPLIST_OUTPUT", "JSON"),
            ("SHOPLIST_ID_STRATEGY", "sequential"),
        ]));

        assert_eq!(config.ui.title, "Party");
        assert_eq!(config.ui.output, OutputFormat::Json);
        assert_eq!(config.store.id_strategy, IdStrategy::Sequential);
    }

    #[test]
    fn test_fallback_keeps_env_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui\nbroken").unwrap();

        let config = AppConfig::load_or_default_with(
            Some(file.path()),
            lookup_from(&[
                ("SHOPLIST_OUTPUT", "json"),
                ("SHOPLIST_ID_STRATEGY", "sequential"),
                ("SHOPLIST_TITLE", "Party"),
            ]),
        );

        assert_eq!(config.ui.output, OutputFormat::Json);
        assert_eq!(config.store.id_strategy, IdStrategy::Sequential);
        assert_eq!(config.ui.title, "Party");
    }

    #[test]
    fn test_fallback_drops_invalid_env_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\ntitle = \"\"").unwrap();

        let config = AppConfig::load_or_default_with(
            Some(file.path()),
            lookup_from(&[("SHOPLIST_TITLE", "  "), ("SHOPLIST_OUTPUT", "json")]),
        );

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_with_applies_overrides_after_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\ntitle = \"Weekend\"\noutput = \"text\"").unwrap();

        let config =
            AppConfig::load_with(Some(file.path()), lookup_from(&[("SHOPLIST_OUTPUT", "json")]))
                .unwrap();
        assert_eq!(config.ui.title, "Weekend");
        assert_eq!(config.ui.output, OutputFormat::Json);
    }

    #[test]
    fn test_bad_overrides_are_skipped() {
        let mut config = AppConfig::default();
        config.apply_overrides(lookup_from(&[
            ("SHOPLIST_OUTPUT", "xml"),
            ("SHOPLIST_ID_STRATEGY", "clock"),
        ]));

        assert_eq!(config.ui.output, OutputFormat::Text);
        assert_eq!(config.store.id_strategy, IdStrategy::Uuid);
    }
}
