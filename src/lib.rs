//! push-notify-rs
//!
//! Push notification tool for agent runtimes: resolves the plugin entry from
//! the host configuration, validates the request, and delivers it to a
//! notification backend over HTTP.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod error;
pub mod external;
pub mod logger;
pub mod plugin;
pub mod services;
pub mod tools;

pub use config::HostConfig;
pub use error::{AppError, AppResult};
pub use plugin::{PluginHost, register_plugin};
pub use services::notifications::{CorrelationIds, DispatchResult, PushDispatcher};

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}

pub fn clap_long_version() -> &'static str {
    build::CLAP_LONG_VERSION
}
