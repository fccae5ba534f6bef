//! Configuration management for push-notify-rs
//!
//! - [`settings`]: the host plugin tree and the process settings
//! - [`resolver`]: aliased lookup of the push notification entry
//! - [`loader`]: layered TOML + environment loading for the CLI

pub mod error;
pub mod loader;
pub mod resolver;
pub mod settings;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use resolver::{PLUGIN_ID, PLUGIN_ID_ALIASES, resolve};
pub use settings::{HostConfig, PluginEntry, PluginSettings, PluginsConfig, Settings};
