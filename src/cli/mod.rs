//! CLI module for push-notify-rs
//!
//! - Argument parsing with clap
//! - Settings loading and logger setup
//! - Command execution through an in-process plugin host

pub mod executor;
pub mod parser;

pub use executor::{CliHost, execute_command};
pub use parser::{Cli, Commands, PriorityArg};

use crate::config::{ConfigLoader, Settings};
use crate::logger::init_logger;

/// Load settings, honoring `--config`
pub fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let settings = ConfigLoader::new()
        .with_file(cli.config.as_deref())
        .load()?;
    Ok(settings)
}

/// Initialize logging from settings, applying `--verbose` / `--quiet`
pub fn init_logging(cli: &Cli, settings: &Settings) -> anyhow::Result<()> {
    let mut config = settings.logger.clone();
    if let Some(level) = cli.log_level_override() {
        config = config.with_level(level);
    }
    init_logger(&config)
}
