//! Configuration loader
//!
//! Layered loading of [`NotifierConfig`] from a configuration directory,
//! with environment variables taking final precedence.

use std::path::{Path, PathBuf};

use config::{Config, Environment as EnvSource, File, FileFormat};

use crate::config::environment::Environment;
use crate::config::error::ConfigError;
use crate::config::settings::NotifierConfig;

/// Environment variable for the configuration directory
const CONFIG_DIR_ENV: &str = "CI_NOTIFY_CONFIG_DIR";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "CI_NOTIFY";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Loads notifier configuration from layered sources, in priority order:
/// 1. `default.toml` (required)
/// 2. `{environment}.toml` (optional)
/// 3. `local.toml` (optional)
/// 4. `CI_NOTIFY_*` environment variables (highest priority)
#[derive(Debug)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    environment: Environment,
}

impl ConfigLoader {
    /// Creates a loader from process environment: directory from
    /// `CI_NOTIFY_CONFIG_DIR` (default `config/`), environment from
    /// `CI_NOTIFY_ENV`.
    pub fn new() -> Self {
        let config_dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));

        Self {
            config_dir,
            environment: Environment::from_env(),
        }
    }

    /// Creates a loader with an explicit directory and environment.
    pub fn with_dir(config_dir: impl Into<PathBuf>, environment: Environment) -> Self {
        Self {
            config_dir: config_dir.into(),
            environment,
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Loads configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error when `default.toml` is missing or any source fails
    /// to parse or deserialize.
    pub fn load(&self) -> Result<NotifierConfig, ConfigError> {
        let default_path = self.config_dir.join("default.toml");
        if !default_path.is_file() {
            return Err(ConfigError::FileNotFound(
                default_path.display().to_string(),
            ));
        }

        let env_path = self
            .config_dir
            .join(format!("{}.toml", self.environment.as_str()));
        let local_path = self.config_dir.join("local.toml");

        let config = Config::builder()
            .add_source(File::from(default_path).format(FileFormat::Toml))
            .add_source(File::from(env_path).format(FileFormat::Toml).required(false))
            .add_source(
                File::from(local_path)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                EnvSource::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR),
            )
            .build()?;

        Self::deserialize(config)
    }

    /// Loads a single explicit configuration file, skipping layering.
    /// Environment variables still apply on top.
    pub fn load_file(path: &Path) -> Result<NotifierConfig, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let config = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml))
            .add_source(
                EnvSource::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR),
            )
            .build()?;

        Self::deserialize(config)
    }

    fn deserialize(config: Config) -> Result<NotifierConfig, ConfigError> {
        config.try_deserialize().map_err(|e| {
            ConfigError::Parse(format!("Failed to deserialize configuration: {}", e))
        })
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
