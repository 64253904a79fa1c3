//! Application configuration
//!
//! Configuration loaded from `.action-menu.toml`. Every field has a default,
//! so a partial (or missing) file is fine.
//!
//! ```toml
//! [menu]
//! placeholder = "Type a command..."
//! max_visible_rows = 10
//! global_shortcuts = true
//!
//! [shortcuts]
//! "Add Item" = "ctrl+n"
//! "Delete All" = "none"
//!
//! [query_action]
//! title_template = "Look up \"{query}\""
//! ```

use action_menu::KeyboardShortcut;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder replaced by the query in [`QueryActionConfig::title_template`]
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// Application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub menu: MenuConfig,

    /// Shortcut pattern per action name, overriding built-in bindings
    ///
    /// `"none"` or an empty string removes the binding.
    #[serde(default)]
    pub shortcuts: BTreeMap<String, String>,

    #[serde(default)]
    pub query_action: QueryActionConfig,
}

/// Appearance and behavior of the menu overlay
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MenuConfig {
    /// Placeholder text of the empty search field
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Maximum number of rows shown before the list scrolls
    #[serde(default = "default_max_visible_rows")]
    pub max_visible_rows: usize,

    /// Whether bound shortcuts fire application-wide
    #[serde(default = "default_global_shortcuts")]
    pub global_shortcuts: bool,
}

fn default_placeholder() -> String {
    "Search...".to_string()
}

fn default_max_visible_rows() -> usize {
    8
}

fn default_global_shortcuts() -> bool {
    true
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            max_visible_rows: default_max_visible_rows(),
            global_shortcuts: default_global_shortcuts(),
        }
    }
}

/// The action offered in the Query section for any non-empty query
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct QueryActionConfig {
    #[serde(default = "default_query_action_enabled")]
    pub enabled: bool,

    /// Row title; `{query}` is replaced by the current query
    #[serde(default = "default_title_template")]
    pub title_template: String,
}

fn default_query_action_enabled() -> bool {
    true
}

fn default_title_template() -> String {
    format!("Search the web for \"{}\"", QUERY_PLACEHOLDER)
}

impl Default for QueryActionConfig {
    fn default() -> Self {
        Self {
            enabled: default_query_action_enabled(),
            title_template: default_title_template(),
        }
    }
}

impl QueryActionConfig {
    /// Row title for `query`
    pub fn title(&self, query: &str) -> String {
        self.title_template.replace(QUERY_PLACEHOLDER, query)
    }
}

/// How the config changes the binding of one action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutOverride {
    /// Keep the built-in binding
    Keep,
    /// Remove the binding
    Unbind,
    /// Bind to this shortcut instead
    Bind(KeyboardShortcut),
}

impl ShortcutOverride {
    /// Apply the override to a built-in binding
    pub fn apply(self, builtin: Option<KeyboardShortcut>) -> Option<KeyboardShortcut> {
        match self {
            ShortcutOverride::Keep => builtin,
            ShortcutOverride::Unbind => None,
            ShortcutOverride::Bind(shortcut) => Some(shortcut),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, then the config
    /// directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// The configured binding change for `action_name`
    ///
    /// Invalid patterns are logged and leave the built-in binding in place.
    pub fn shortcut_override(&self, action_name: &str) -> ShortcutOverride {
        let Some(pattern) = self.shortcuts.get(action_name) else {
            return ShortcutOverride::Keep;
        };

        let pattern = pattern.trim();
        if pattern.is_empty() || pattern.eq_ignore_ascii_case("none") {
            return ShortcutOverride::Unbind;
        }

        match pattern.parse::<KeyboardShortcut>() {
            Ok(shortcut) => ShortcutOverride::Bind(shortcut),
            Err(e) => {
                log::warn!(
                    "Ignoring shortcut '{}' for '{}': {}",
                    pattern,
                    action_name,
                    e
                );
                ShortcutOverride::Keep
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use action_menu::{Key, Modifiers};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.menu.placeholder, "Search...");
        assert_eq!(config.menu.max_visible_rows, 8);
        assert!(config.menu.global_shortcuts);
        assert!(config.shortcuts.is_empty());
        assert!(config.query_action.enabled);
        assert_eq!(
            config.query_action.title("rust"),
            "Search the web for \"rust\""
        );
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            [menu]
            placeholder = "Type a command..."
            global_shortcuts = false

            [shortcuts]
            "Add Item" = "ctrl+n"

            [query_action]
            title_template = "Look up {query} now"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.menu.placeholder, "Type a command...");
        assert!(!config.menu.global_shortcuts);
        // max_visible_rows should use default
        assert_eq!(config.menu.max_visible_rows, 8);
        assert_eq!(config.shortcuts["Add Item"], "ctrl+n");
        assert_eq!(config.query_action.title("cats"), "Look up cats now");
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_shortcut_override() {
        let toml = r#"
            [shortcuts]
            "Add Item" = "ctrl+n"
            "Delete" = "cmd+shift+delete"
            "Delete All" = "none"
            "Duplicate" = ""
            "Broken" = "hyper+x"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();

        assert_eq!(
            config.shortcut_override("Add Item"),
            ShortcutOverride::Bind(KeyboardShortcut::control('n'))
        );
        assert_eq!(
            config.shortcut_override("Delete"),
            ShortcutOverride::Bind(KeyboardShortcut::new(
                Key::Delete,
                Modifiers::COMMAND | Modifiers::SHIFT
            ))
        );
        assert_eq!(config.shortcut_override("Delete All"), ShortcutOverride::Unbind);
        assert_eq!(config.shortcut_override("Duplicate"), ShortcutOverride::Unbind);
        assert_eq!(config.shortcut_override("Broken"), ShortcutOverride::Keep);
        assert_eq!(config.shortcut_override("Unknown"), ShortcutOverride::Keep);
    }

    #[test]
    fn test_shortcut_override_apply() {
        let builtin = Some(KeyboardShortcut::command('a'));
        assert_eq!(ShortcutOverride::Keep.apply(builtin), builtin);
        assert_eq!(ShortcutOverride::Unbind.apply(builtin), None);
        assert_eq!(
            ShortcutOverride::Bind(KeyboardShortcut::control('n')).apply(None),
            Some(KeyboardShortcut::control('n'))
        );
    }
}
