//! Colour mode preference and its persistence.

use crate::shared::error::DashboardError;
use crate::shared::storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Stored/attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl FromStr for ThemeMode {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(DashboardError::UnknownThemeMode(other.to_string())),
        }
    }
}

/// Read the saved mode; anything missing, unknown or unreadable means light.
pub fn load_theme_mode(store: &dyn KeyValueStore, key: &str) -> ThemeMode {
    let stored = match store.get_item(key) {
        Ok(value) => value,
        Err(e) => {
            log::debug!("theme preference not readable, using light: {}", e);
            return ThemeMode::default();
        }
    };

    match stored.as_deref().map(ThemeMode::from_str) {
        Some(Ok(mode)) => mode,
        Some(Err(e)) => {
            log::debug!("ignoring saved theme preference: {}", e);
            ThemeMode::default()
        }
        None => ThemeMode::default(),
    }
}

pub fn save_theme_mode(store: &dyn KeyValueStore, key: &str, mode: ThemeMode) {
    if let Err(e) = store.set_item(key, mode.as_str()) {
        log::warn!("failed to save theme preference: {}", e);
    }
}

/// Flip the mode and persist the new value; returns the new mode.
pub fn toggle_theme_mode(store: &dyn KeyValueStore, key: &str, current: ThemeMode) -> ThemeMode {
    let next = current.toggled();
    save_theme_mode(store, key, next);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;

    const KEY: &str = "themeMode";

    #[test]
    fn test_default_is_light() {
        let store = MemoryStore::new();
        assert_eq!(load_theme_mode(&store, KEY), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_twice_returns_to_start() {
        let store = MemoryStore::new();
        let start = load_theme_mode(&store, KEY);
        let once = toggle_theme_mode(&store, KEY, start);
        let twice = toggle_theme_mode(&store, KEY, once);
        assert_eq!(once, ThemeMode::Dark);
        assert_eq!(twice, start);
    }

    #[test]
    fn test_persisted_value_matches_memory() {
        let store = MemoryStore::new();
        let mode = toggle_theme_mode(&store, KEY, ThemeMode::Light);
        assert_eq!(store.get_item(KEY).unwrap().as_deref(), Some(mode.as_str()));
        assert_eq!(load_theme_mode(&store, KEY), mode);
    }

    #[test]
    fn test_unavailable_storage_degrades_to_light() {
        let store = MemoryStore::unavailable();
        assert_eq!(load_theme_mode(&store, KEY), ThemeMode::Light);
        // writing fails silently, the in-memory mode still flips
        assert_eq!(toggle_theme_mode(&store, KEY, ThemeMode::Light), ThemeMode::Dark);
    }

    #[test]
    fn test_unknown_value_degrades_to_light() {
        let store = MemoryStore::new();
        store.set_item(KEY, "forest").unwrap();
        assert_eq!(load_theme_mode(&store, KEY), ThemeMode::Light);
        assert!(matches!(
            "forest".parse::<ThemeMode>(),
            Err(DashboardError::UnknownThemeMode(_))
        ));
    }
}
