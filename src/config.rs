//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treeviz/treeviz.toml`
//! 3. Explicit config file (`--config <path>`)
//! 4. Environment variables: `TREEVIZ_*` prefix

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::HeapStrategy;

/// How a visualization is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indexed array line and an ASCII tree
    #[default]
    Text,
    /// JSON snapshot for an external renderer
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

/// Unified configuration for treeviz.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Output format (default: text)
    pub format: OutputFormat,
    /// Heap construction used by the heap view (default: sift-up)
    pub heap_strategy: HeapStrategy,
    /// Colored terminal output (default: true)
    pub color: bool,
    /// Print `[i]` labels in the array view (default: true)
    pub show_indices: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            heap_strategy: HeapStrategy::SiftUp,
            color: true,
            show_indices: true,
        }
    }
}

/// Raw settings for intermediate parsing.
///
/// Every field is optional so a layer only overrides what it specifies.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub format: Option<OutputFormat>,
    pub heap_strategy: Option<HeapStrategy>,
    pub color: Option<bool>,
    pub show_indices: Option<bool>,
}

/// Get the XDG config directory for treeviz.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treeviz").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treeviz.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            format: overlay.format.unwrap_or(self.format),
            heap_strategy: overlay.heap_strategy.unwrap_or(self.heap_strategy),
            color: overlay.color.unwrap_or(self.color),
            show_indices: overlay.show_indices.unwrap_or(self.show_indices),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/treeviz/treeviz.toml`
    /// 3. Explicit config file
    /// 4. Environment variables: `TREEVIZ_*` prefix
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("loading global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = config_file {
            debug!("loading config file: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        Self::apply_env_overrides(current, None)
    }

    /// Apply TREEVIZ_* environment variables as explicit overrides.
    ///
    /// `source` replaces the process environment, for tests.
    fn apply_env_overrides(
        mut settings: Self,
        source: Option<config::Map<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("TREEVIZ")
                    .prefix_separator("_")
                    .separator("__")
                    .source(source),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = present(config.get_string("format"))? {
            settings.format = val.parse().map_err(config_message)?;
        }
        if let Some(val) = present(config.get_string("heap_strategy"))? {
            settings.heap_strategy = val.parse().map_err(config_message)?;
        }
        if let Some(val) = present(config.get_bool("color"))? {
            settings.color = val;
        }
        if let Some(val) = present(config.get_bool("show_indices"))? {
            settings.show_indices = val;
        }

        Ok(settings)
    }

    /// Serialize settings to TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize: {}", e),
        })
    }

    /// Commented config template for `config init`.
    pub fn template() -> String {
        r#"# treeviz configuration
# Global: ~/.config/treeviz/treeviz.toml

# Output format: "text" or "json"
# format = "text"

# Heap construction for the heap view: "sift-up" or "sift-down"
# heap_strategy = "sift-up"

# Colored terminal output
# color = true

# Print [i] labels in the array view
# show_indices = true
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

fn config_message(message: String) -> ApplicationError {
    ApplicationError::Config { message }
}

/// A missing key is no override; any other lookup failure is an error.
fn present<T>(lookup: Result<T, ConfigError>) -> Result<Option<T>, ApplicationError> {
    match lookup {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}
