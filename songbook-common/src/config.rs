//! Configuration loading and data file resolution
//!
//! # Settings Sources Priority
//!
//! Config file location:
//! 1. Command-line argument (`--config`)
//! 2. `SONGBOOK_CONFIG` environment variable
//! 3. `<config dir>/songbook/config.toml`
//! 4. Compiled defaults (no file)
//!
//! Individual settings: command-line flags override the TOML file, which
//! overrides compiled defaults. A missing or malformed config file never
//! stops the application; it logs a warning and the defaults apply.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::persistence::{write_atomic, Format};
use crate::{Error, Result};

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "SONGBOOK_CONFIG";

/// Bootstrap configuration loaded from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Songs data file; defaults to `songs.<format extension>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub songs_file: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artists_file: Option<PathBuf>,

    /// Data file format; inferred from the songs file extension when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (logs to stderr if not specified)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Values given on the command line, each optional
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub songs_file: Option<PathBuf>,
    pub artists_file: Option<PathBuf>,
    pub format: Option<Format>,
}

/// Fully resolved settings the application runs with
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub songs_file: PathBuf,
    pub artists_file: PathBuf,
    pub format: Format,
    pub logging: LoggingConfig,
}

impl TomlConfig {
    /// Apply command-line overrides and fill the gaps with defaults
    pub fn resolve(self, overrides: &Overrides) -> Settings {
        let songs_file = overrides.songs_file.clone().or(self.songs_file);
        let artists_file = overrides.artists_file.clone().or(self.artists_file);

        let format = overrides
            .format
            .or(self.format)
            .or_else(|| songs_file.as_deref().and_then(Format::from_path))
            .unwrap_or_default();

        Settings {
            songs_file: songs_file
                .unwrap_or_else(|| PathBuf::from(format!("songs.{}", format.extension()))),
            artists_file: artists_file
                .unwrap_or_else(|| PathBuf::from(format!("artists.{}", format.extension()))),
            format,
            logging: self.logging,
        }
    }
}

/// Locates and loads the config file
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    cli_path: Option<PathBuf>,
}

impl ConfigResolver {
    pub fn new(cli_path: Option<PathBuf>) -> Self {
        Self { cli_path }
    }

    /// Config file to read, if any
    ///
    /// An explicitly named file (argument or environment) is returned even
    /// when it does not exist so the caller can warn about it; the default
    /// location is only returned when the file is present.
    pub fn config_path(&self) -> Option<PathBuf> {
        // Priority 1: Command-line argument
        if let Some(path) = &self.cli_path {
            return Some(path.clone());
        }

        // Priority 2: Environment variable
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }

        // Priority 3: Per-user config directory
        default_config_path().filter(|path| path.exists())
    }

    /// Load the config, falling back to defaults on any failure.
    ///
    /// Nothing is logged here: the config decides how logging is set up, so
    /// the caller reports the outcome with [`LoadedConfig::log_source`] once
    /// tracing is initialized.
    pub fn load(&self) -> LoadedConfig {
        let Some(path) = self.config_path() else {
            return LoadedConfig {
                config: TomlConfig::default(),
                source: ConfigSource::Defaults,
            };
        };
        match load_toml_config(&path) {
            Ok(config) => LoadedConfig {
                config,
                source: ConfigSource::File(path),
            },
            Err(error) => LoadedConfig {
                config: TomlConfig::default(),
                source: ConfigSource::Failed { path, error },
            },
        }
    }
}

/// Where the effective config came from
#[derive(Debug)]
pub enum ConfigSource {
    File(PathBuf),
    /// No config file applies
    Defaults,
    /// The file exists or was named explicitly but could not be used
    Failed { path: PathBuf, error: Error },
}

/// Result of [`ConfigResolver::load`]
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: TomlConfig,
    pub source: ConfigSource,
}

impl LoadedConfig {
    pub fn log_source(&self) {
        match &self.source {
            ConfigSource::File(path) => info!(path = %path.display(), "Loaded config file"),
            ConfigSource::Defaults => info!("No config file found, using defaults"),
            ConfigSource::Failed { path, error } => warn!(
                path = %path.display(),
                error = %error,
                "Could not load config file, using defaults"
            ),
        }
    }
}

/// `<config dir>/songbook/config.toml`, when the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("songbook").join("config.toml"))
}

/// Read and parse a config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;
    Ok(toml::from_str(&content)?)
}

/// Write a config file atomically (temp file + rename), creating its directory
pub fn write_toml_config(config: &TomlConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    write_atomic(path, &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = TomlConfig::default().resolve(&Overrides::default());
        assert_eq!(settings.songs_file, PathBuf::from("songs.json"));
        assert_eq!(settings.artists_file, PathBuf::from("artists.json"));
        assert_eq!(settings.format, Format::Json);
        assert_eq!(settings.logging.level, "info");
        assert!(settings.logging.file.is_none());
    }

    #[test]
    fn test_format_names_default_files() {
        let config = TomlConfig {
            format: Some(Format::Yaml),
            ..Default::default()
        };
        let settings = config.resolve(&Overrides::default());
        assert_eq!(settings.songs_file, PathBuf::from("songs.yaml"));
        assert_eq!(settings.artists_file, PathBuf::from("artists.yaml"));
    }

    #[test]
    fn test_format_inferred_from_songs_file() {
        let config = TomlConfig {
            songs_file: Some(PathBuf::from("/data/library.toml")),
            ..Default::default()
        };
        let settings = config.resolve(&Overrides::default());
        assert_eq!(settings.format, Format::Toml);
        assert_eq!(settings.artists_file, PathBuf::from("artists.toml"));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let config = TomlConfig {
            songs_file: Some(PathBuf::from("file-songs.json")),
            artists_file: Some(PathBuf::from("file-artists.json")),
            format: Some(Format::Json),
            logging: LoggingConfig::default(),
        };
        let overrides = Overrides {
            songs_file: Some(PathBuf::from("cli-songs.yaml")),
            artists_file: None,
            format: Some(Format::Yaml),
        };
        let settings = config.resolve(&overrides);
        assert_eq!(settings.songs_file, PathBuf::from("cli-songs.yaml"));
        assert_eq!(settings.artists_file, PathBuf::from("file-artists.json"));
        assert_eq!(settings.format, Format::Yaml);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: TomlConfig = toml::from_str(
            r#"
            format = "yaml"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.format, Some(Format::Yaml));
        assert!(config.songs_file.is_none());
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result: std::result::Result<TomlConfig, _> = toml::from_str(r#"format = "csv""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_path_takes_priority() {
        let resolver = ConfigResolver::new(Some(PathBuf::from("/nonexistent/songbook.toml")));
        assert_eq!(
            resolver.config_path(),
            Some(PathBuf::from("/nonexistent/songbook.toml"))
        );
        // Missing explicit file degrades to defaults
        let loaded = resolver.load();
        assert_eq!(loaded.config, TomlConfig::default());
        assert!(matches!(loaded.source, ConfigSource::Failed { .. }));
    }
}
