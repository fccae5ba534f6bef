//! Configuration loader for push-notify-rs
//!
//! Sources, lowest priority first:
//! 1. `config/default.toml` (optional)
//! 2. `config/local.toml` (optional)
//! 3. `PUSH_NOTIFY_*` environment variables
//!
//! When an explicit file is given (`--config` or `PUSH_NOTIFY_CONFIG_FILE`)
//! it replaces steps 1 and 2 and must exist.

use std::path::{Path, PathBuf};

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};

use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for a specific configuration file
const CONFIG_FILE_ENV: &str = "PUSH_NOTIFY_CONFIG_FILE";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "PUSH_NOTIFY";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Layered settings loader
#[derive(Debug)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    config_file: Option<PathBuf>,
}

impl ConfigLoader {
    /// Loader using `PUSH_NOTIFY_CONFIG_FILE` if set, else the `config/` directory
    pub fn new() -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file: std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from),
        }
    }

    /// Override the configuration file; `None` keeps the current choice
    pub fn with_file(mut self, path: Option<&Path>) -> Self {
        if let Some(path) = path {
            self.config_file = Some(path.to_path_buf());
        }
        self
    }

    /// Override the configuration directory used for layered loading
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = dir.into();
        self
    }

    /// Load, deserialize and validate settings
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        tracing::debug!(
            config_file = ?self.config_file,
            config_dir = %self.config_dir.display(),
            "Configuration loaded"
        );

        Ok(settings)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder();

        let builder = match self.config_file {
            Some(ref file) => Self::add_file_source(builder, file, true)?,
            None => {
                let builder =
                    Self::add_file_source(builder, &self.config_dir.join("default.toml"), false)?;
                Self::add_file_source(builder, &self.config_dir.join("local.toml"), false)?
            }
        };

        // PUSH_NOTIFY_LOGGER__LEVEL -> logger.level
        let builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        );

        builder.build().map_err(ConfigError::from)
    }

    fn add_file_source(
        builder: ConfigBuilder<DefaultState>,
        path: &Path,
        required: bool,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        if required && !path.exists() {
            return Err(ConfigError::file_not_found(path.display().to_string()));
        }

        Ok(builder.add_source(
            File::new(path.to_str().unwrap_or_default(), FileFormat::Toml).required(required),
        ))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
