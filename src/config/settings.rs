//! Configuration structures for push-notify-rs
//!
//! Two layers live here: the host's plugin tree (`plugins.entries.<id>`),
//! which the agent runtime hands us on every invocation, and the process
//! [`Settings`] loaded by the CLI from TOML files and environment overrides.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value as JsonValue;

use crate::config::error::ConfigError;
use crate::logger::LoggerConfig;

/// Title used when neither the request nor the entry supplies one
pub const FALLBACK_TITLE: &str = "OpenClaw Agent";

// ============================================================================
// Host plugin tree
// ============================================================================

/// Host configuration tree as supplied by the agent runtime.
///
/// Only `plugins.entries` is interpreted. Entries are kept as raw JSON so
/// that other plugins' blocks, whatever their shape, never break loading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    #[serde(default)]
    pub plugins: Option<PluginsConfig>,
}

/// The `plugins` section of the host tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginsConfig {
    #[serde(default)]
    pub entries: Option<HashMap<String, JsonValue>>,
}

impl HostConfig {
    /// Parse a host tree from an arbitrary JSON value
    pub fn from_json(value: JsonValue) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Plugin entries map, if the tree has one
    pub fn entries(&self) -> Option<&HashMap<String, JsonValue>> {
        self.plugins.as_ref().and_then(|p| p.entries.as_ref())
    }
}

/// One plugin's configuration block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginEntry {
    /// Entry-level kill switch; absent means enabled
    #[serde(default)]
    pub enabled: Option<bool>,

    #[serde(default)]
    pub settings: Option<PluginSettings>,
}

/// Inner settings of the push notification entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginSettings {
    #[serde(
        default,
        alias = "backendurl",
        alias = "backend_url",
        deserialize_with = "scalar_string"
    )]
    pub backend_url: Option<String>,

    #[serde(
        default,
        alias = "apikey",
        alias = "api_key",
        deserialize_with = "scalar_string"
    )]
    pub api_key: Option<String>,

    #[serde(
        default,
        alias = "defaulttitle",
        alias = "default_title",
        deserialize_with = "scalar_string"
    )]
    pub default_title: Option<String>,

    /// Settings-level kill switch, independent of [`PluginEntry::enabled`]
    #[serde(default)]
    pub enabled: Option<bool>,
}

impl PluginEntry {
    /// True when either kill switch is explicitly `false`
    pub fn is_disabled(&self) -> bool {
        self.enabled == Some(false)
            || self.settings.as_ref().and_then(|s| s.enabled) == Some(false)
    }

    /// Backend URL, treating a blank value as unset
    pub fn backend_url(&self) -> Option<&str> {
        non_blank(self.settings.as_ref()?.backend_url.as_deref())
    }

    /// API key, treating a blank value as unset
    pub fn api_key(&self) -> Option<&str> {
        non_blank(self.settings.as_ref()?.api_key.as_deref())
    }

    /// Title used when the request carries none
    pub fn default_title(&self) -> &str {
        self.settings
            .as_ref()
            .and_then(|s| non_blank(s.default_title.as_deref()))
            .unwrap_or(FALLBACK_TITLE)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Accept numbers and booleans where a string is expected.
///
/// Environment overrides are type-inferred, so `APIKEY=123456` arrives as a
/// number.
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<JsonValue>::deserialize(deserializer)? {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s)),
        Some(scalar @ (JsonValue::Number(_) | JsonValue::Bool(_))) => Ok(Some(scalar.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected a string, found {}",
            other
        ))),
    }
}

// ============================================================================
// Process settings (CLI)
// ============================================================================

/// Settings loaded by [`ConfigLoader`](crate::config::ConfigLoader)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub logger: LoggerConfig,

    #[serde(default)]
    pub plugins: Option<PluginsConfig>,
}

impl Settings {
    /// Validate the loaded settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logger
            .validate()
            .map_err(|e| ConfigError::validation("logger".to_string(), format!("{:#}", e)))
    }

    /// Host tree view consumed by the resolver
    pub fn host_config(&self) -> HostConfig {
        HostConfig {
            plugins: self.plugins.clone(),
        }
    }
}
