//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/comfort-rings/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/comfort-rings/` (~/.config/comfort-rings/)
//! - State/Logs: `$XDG_STATE_HOME/comfort-rings/` (~/.local/state/comfort-rings/)

use crate::api::parse_archetypes;
use crate::error::{Error, Result};
use crate::types::Archetype;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "comfort-rings";

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Report output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Default dislikes and archetypes
    #[serde(default)]
    pub profile: ProfileConfig,
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

/// Report formats
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Md,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "terminal" => Ok(OutputFormat::Terminal),
            "md" => Ok(OutputFormat::Md),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "unknown output format: {}. Use 'terminal', 'md' or 'json'",
                s
            )),
        }
    }
}

/// Report output configuration
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Include per-dimension contributions in terminal output
    #[serde(default)]
    pub show_contributions: bool,
}

/// Defaults applied when a request names no dislikes or archetypes
#[derive(Debug, Deserialize, Default)]
pub struct ProfileConfig {
    #[serde(default)]
    pub archetypes: Vec<String>,

    #[serde(default)]
    pub dislikes: Vec<String>,
}

impl ProfileConfig {
    /// Parsed default archetypes.
    pub fn archetype_set(&self) -> Result<BTreeSet<Archetype>> {
        parse_archetypes(&self.archetypes)
    }
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate values serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        self.profile
            .archetype_set()
            .map_err(|e| Error::Config(format!("profile.archetypes: {}", e)))?;
        Ok(())
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/comfort-rings/config.toml` (~/.config/comfort-rings/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join(APP_DIR).join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/comfort-rings/` (~/.local/state/comfort-rings/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join(APP_DIR)
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/comfort-rings/comfort-rings.log`
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("comfort-rings.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.max_files, 5);
        assert_eq!(config.output.format, OutputFormat::Terminal);
        assert!(!config.output.show_contributions);
        assert!(config.profile.archetypes.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[logging]
level = "debug"

[output]
format = "json"
show_contributions = true

[profile]
archetypes = ["heat_seeker", "flavor_explorer"]
dislikes = ["Haggis"]
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.show_contributions);
        let archetypes = config.profile.archetype_set().unwrap();
        assert!(archetypes.contains(&Archetype::HeatSeeker));
        assert_eq!(config.profile.dislikes, vec!["Haggis".to_string()]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_profile_archetype() {
        let config: Config = toml::from_str("[profile]\narchetypes = [\"snacker\"]\n").unwrap();
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\nformat = \"md\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output.format, OutputFormat::Md);

        std::fs::write(&path, "[output\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_paths() {
        assert!(Config::config_path().ends_with("comfort-rings/config.toml"));
        assert!(Config::log_path().ends_with("comfort-rings.log"));
    }
}
