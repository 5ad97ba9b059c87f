//! Dark-mode preference persisted in a key-value store.

use std::collections::HashMap;

use folio_protocol::{Target, Theme, UiCommand};

pub const DARK_MODE_KEY: &str = "darkMode";
pub const DARK_MODE_ENABLED: &str = "enabled";
pub const DARK_CLASS: &str = "dark";

/// Durable string store (browser local storage in production).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory store for tests and hosts without local storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DarkModePreference {
    theme: Theme,
}

impl DarkModePreference {
    /// Read the stored flag. Only the exact value `"enabled"` means dark.
    pub fn load(store: &impl PreferenceStore) -> Self {
        let dark = store.get(DARK_MODE_KEY).as_deref() == Some(DARK_MODE_ENABLED);
        Self {
            theme: if dark { Theme::Dark } else { Theme::Light },
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and write it back immediately.
    pub fn toggle(&mut self, store: &mut impl PreferenceStore) -> Theme {
        self.theme = self.theme.toggled();
        match self.theme {
            Theme::Dark => store.set(DARK_MODE_KEY, DARK_MODE_ENABLED),
            Theme::Light => store.remove(DARK_MODE_KEY),
        }
        log::debug!("theme -> {:?}", self.theme);
        self.theme
    }

    pub fn commands(&self) -> Vec<UiCommand> {
        vec![UiCommand::set_class(Target::Root, DARK_CLASS, self.theme.is_dark())]
    }
}
