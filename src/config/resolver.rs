//! Plugin entry resolution
//!
//! The host may carry the push notification block under any of three keys.
//! Lookup walks [`PLUGIN_ID_ALIASES`] in order and returns the first key that
//! is present; entries are never merged.

use std::collections::HashMap;

use serde_json::Value as JsonValue;

use crate::config::settings::{HostConfig, PluginEntry};

/// Canonical public identifier of the plugin
pub const PLUGIN_ID: &str = "push-notifications";

/// Identifier derived from the distribution package name
pub const PACKAGE_PLUGIN_ID: &str = "openclaw-push-notifications";

/// Deprecated underscore identifier
pub const LEGACY_PLUGIN_ID: &str = "push_notifications";

/// Recognized entry keys, highest precedence first
pub const PLUGIN_ID_ALIASES: [&str; 3] = [PLUGIN_ID, PACKAGE_PLUGIN_ID, LEGACY_PLUGIN_ID];

/// Return the first of `keys` holding a non-null value in `map`
pub fn first_present<'a>(
    map: &'a HashMap<String, JsonValue>,
    keys: &[&'a str],
) -> Option<(&'a str, &'a JsonValue)> {
    keys.iter().find_map(|key| {
        map.get(*key)
            .filter(|value| !value.is_null())
            .map(|value| (*key, value))
    })
}

/// Resolve the push notification entry from the host tree.
///
/// Returns `None` when `plugins.entries` is missing, when none of the
/// recognized keys is present, or when the winning entry cannot be parsed.
/// A key whose value is `null` counts as absent.
pub fn resolve(config: &HostConfig) -> Option<PluginEntry> {
    let entries = config.entries()?;
    let (key, raw) = first_present(entries, &PLUGIN_ID_ALIASES)?;

    match serde_json::from_value::<PluginEntry>(raw.clone()) {
        Ok(entry) => {
            tracing::debug!(plugin_key = key, "Resolved push notification entry");
            Some(entry)
        }
        Err(e) => {
            tracing::warn!(
                plugin_key = key,
                error = %e,
                "Ignoring malformed push notification entry"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn entry_with_url(url: &str) -> JsonValue {
        json!({ "settings": { "backendUrl": url } })
    }

    fn host_with(entries: Vec<(&str, JsonValue)>) -> HostConfig {
        let map: serde_json::Map<String, JsonValue> = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        HostConfig::from_json(json!({ "plugins": { "entries": map } })).unwrap()
    }

    #[test]
    fn test_missing_plugins_section_is_absent() {
        assert_eq!(resolve(&HostConfig::default()), None);
    }

    #[test]
    fn test_empty_entries_is_absent() {
        assert_eq!(resolve(&host_with(vec![])), None);
    }

    #[test]
    fn test_unrelated_entries_are_absent() {
        let config = host_with(vec![("web-search", json!({ "enabled": true }))]);
        assert_eq!(resolve(&config), None);
    }

    #[test]
    fn test_disabled_entry_still_wins_precedence() {
        let config = host_with(vec![
            (PLUGIN_ID, json!({ "enabled": false })),
            (LEGACY_PLUGIN_ID, entry_with_url("https://legacy")),
        ]);

        let entry = resolve(&config).unwrap();
        assert_eq!(entry.enabled, Some(false));
        assert_eq!(entry.backend_url(), None);
    }

    #[test]
    fn test_malformed_entry_is_absent() {
        let config = host_with(vec![(PLUGIN_ID, json!({ "settings": "not-an-object" }))]);
        assert_eq!(resolve(&config), None);
    }

    #[test]
    fn test_null_entry_falls_through_to_next_alias() {
        let config = host_with(vec![
            (PLUGIN_ID, JsonValue::Null),
            (LEGACY_PLUGIN_ID, entry_with_url("https://legacy")),
        ]);

        let entry = resolve(&config).unwrap();
        assert_eq!(entry.backend_url(), Some("https://legacy"));
    }

    #[test]
    fn test_first_present_follows_key_order() {
        let map: HashMap<String, JsonValue> = [
            ("b".to_string(), json!(2)),
            ("a".to_string(), json!(1)),
            ("c".to_string(), JsonValue::Null),
        ]
        .into();
        assert_eq!(first_present(&map, &["a", "b"]), Some(("a", &json!(1))));
        assert_eq!(first_present(&map, &["c"]), None);
        assert_eq!(first_present(&map, &["d"]), None);
    }

    proptest! {
        #[test]
        fn prop_canonical_key_always_wins(
            include_package in any::<bool>(),
            include_legacy in any::<bool>(),
            reverse in any::<bool>(),
        ) {
            let mut entries = vec![(PLUGIN_ID, entry_with_url("https://canonical"))];
            if include_package {
                entries.push((PACKAGE_PLUGIN_ID, entry_with_url("https://package")));
            }
            if include_legacy {
                entries.push((LEGACY_PLUGIN_ID, entry_with_url("https://legacy")));
            }
            if reverse {
                entries.reverse();
            }

            let entry = resolve(&host_with(entries)).unwrap();
            prop_assert_eq!(entry.backend_url(), Some("https://canonical"));
        }

        #[test]
        fn prop_single_alias_is_found(index in 0usize..3, url in "https://[a-z]{1,12}\\.example") {
            let key = PLUGIN_ID_ALIASES[index];
            let config = host_with(vec![(key, entry_with_url(&url))]);

            let entry = resolve(&config).unwrap();
            prop_assert_eq!(entry.backend_url(), Some(url.as_str()));
        }

        #[test]
        fn prop_package_key_beats_legacy_key(reverse in any::<bool>()) {
            let mut entries = vec![
                (PACKAGE_PLUGIN_ID, entry_with_url("https://package")),
                (LEGACY_PLUGIN_ID, entry_with_url("https://legacy")),
            ];
            if reverse {
                entries.reverse();
            }

            let entry = resolve(&host_with(entries)).unwrap();
            prop_assert_eq!(entry.backend_url(), Some("https://package"));
        }

        #[test]
        fn prop_resolution_is_idempotent(index in 0usize..3, enabled in proptest::option::of(any::<bool>())) {
            let config = host_with(vec![(
                PLUGIN_ID_ALIASES[index],
                json!({ "enabled": enabled, "settings": { "backendUrl": "https://x" } }),
            )]);

            prop_assert_eq!(resolve(&config), resolve(&config));
        }
    }
}
