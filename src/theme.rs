use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The light/dark display mode remembered across sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized theme preference: {0:?}")]
pub struct ThemeParseError(pub String);

impl ThemePreference {
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Picks the stored preference if it parses, otherwise `system_default`.
    pub fn resolve(stored: Option<&str>, system_default: ThemePreference) -> Self {
        match stored.map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => s.parse().unwrap_or_else(|e: ThemeParseError| {
                log::debug!("{e}, falling back to {system_default}");
                system_default
            }),
            None => system_default,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Class applied to the document root.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

impl FromStr for ThemePreference {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ThemeParseError(s.to_string())),
        }
    }
}

/// Somewhere a single preference string can be kept between sessions.
pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str);
}

/// A store that only lives as long as the process. Used for server renders and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<String>,
}

impl MemoryStore {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, value: &str) {
        self.value = Some(value.to_string());
    }
}

/// Owns the current preference and writes every change back to its store.
#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    preference: ThemePreference,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn load(store: S, system_default: ThemePreference) -> Self {
        let stored = store.load();
        let preference = ThemePreference::resolve(stored.as_deref(), system_default);
        Self { store, preference }
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn toggle(&mut self) -> ThemePreference {
        self.set(self.preference.toggled());
        self.preference
    }

    pub fn set(&mut self, preference: ThemePreference) {
        self.preference = preference;
        self.store.save(&preference.to_string());
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preference() {
        assert_eq!("dark".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
        assert_eq!(" Light ".parse::<ThemePreference>(), Ok(ThemePreference::Light));
        assert!("sepia".parse::<ThemePreference>().is_err());
        assert_eq!(ThemePreference::Dark.to_string(), "dark");
    }

    #[test]
    fn test_resolve_falls_back() {
        let default = ThemePreference::Dark;
        assert_eq!(ThemePreference::resolve(None, default), default);
        assert_eq!(ThemePreference::resolve(Some(""), default), default);
        assert_eq!(ThemePreference::resolve(Some("purple"), default), default);
        assert_eq!(
            ThemePreference::resolve(Some("light"), default),
            ThemePreference::Light
        );
    }

    #[test]
    fn test_load_from_store() {
        let controller = ThemeController::load(MemoryStore::with_value("dark"), ThemePreference::Light);
        assert_eq!(controller.preference(), ThemePreference::Dark);

        // garbage in storage is not an error
        let controller =
            ThemeController::load(MemoryStore::with_value("{\"x\":1}"), ThemePreference::Light);
        assert_eq!(controller.preference(), ThemePreference::Light);

        let controller = ThemeController::load(MemoryStore::default(), ThemePreference::Dark);
        assert_eq!(controller.preference(), ThemePreference::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let mut controller = ThemeController::load(MemoryStore::default(), ThemePreference::Light);
        assert_eq!(controller.store().load(), None);

        assert_eq!(controller.toggle(), ThemePreference::Dark);
        assert_eq!(controller.store().load().as_deref(), Some("dark"));

        assert_eq!(controller.toggle(), ThemePreference::Light);
        assert_eq!(controller.store().load().as_deref(), Some("light"));
    }

    #[test]
    fn test_even_toggles_return_to_start() {
        for start in [ThemePreference::Light, ThemePreference::Dark] {
            let mut controller =
                ThemeController::load(MemoryStore::with_value(start.to_string()), start.toggled());
            assert_eq!(controller.preference(), start);
            for _ in 0..6 {
                controller.toggle();
            }
            assert_eq!(controller.preference(), start);

            // a reload sees the same value
            let reloaded = ThemeController::load(controller.store().clone(), start.toggled());
            assert_eq!(reloaded.preference(), start);
        }
    }

    #[test]
    fn test_odd_toggles_flip() {
        let mut controller = ThemeController::load(MemoryStore::default(), ThemePreference::Light);
        for _ in 0..3 {
            controller.toggle();
        }
        assert!(controller.preference().is_dark());
        assert_eq!(controller.preference().class_name(), "dark");
    }
}
