//! `localStorage`-backed preferences.

use gpro_app::ports::{PreferenceError, PreferenceStore};

/// Preferences kept in the window's `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn local_storage() -> Result<web_sys::Storage, PreferenceError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(PreferenceError::Unavailable)
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        local_storage()?
            .get_item(key)
            .map_err(|_| PreferenceError::Unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|err| PreferenceError::Rejected(format!("{err:?}")))
    }
}
