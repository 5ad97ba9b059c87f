use folio_core::theme::PreferenceStore;
use web_sys::{Storage, Window};

/// `localStorage`-backed preferences.
///
/// Storage can be unavailable (privacy modes, sandboxed frames). Reads then
/// return nothing and writes are dropped, so the page still toggles themes
/// for the current visit.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn open(window: &Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::warn!("localStorage unavailable; preferences will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage
            && let Err(e) = storage.set_item(key, value)
        {
            log::warn!("failed to store {key}: {e:?}");
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = &self.storage
            && let Err(e) = storage.remove_item(key)
        {
            log::warn!("failed to remove {key}: {e:?}");
        }
    }
}
