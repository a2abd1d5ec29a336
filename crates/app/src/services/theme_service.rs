//! Theme service — the persisted dark-mode preference.

use crate::ports::PreferenceStore;

/// Reads and writes the dark-mode flag as `"true"`/`"false"`.
pub struct ThemeService<S> {
    store: S,
    key: String,
}

impl<S: PreferenceStore> ThemeService<S> {
    /// Create a service persisting under `key`.
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Whether dark mode was last switched on. Unreadable storage means off.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        match self.store.get(&self.key) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(err) => {
                tracing::warn!(error = %err, key = %self.key, "failed to read theme preference");
                false
            }
        }
    }

    /// Persist the dark-mode flag. Failures are logged; the page keeps the
    /// theme for this visit either way.
    pub fn set_dark(&self, dark: bool) {
        let value = if dark { "true" } else { "false" };
        if let Err(err) = self.store.set(&self.key, value) {
            tracing::warn!(error = %err, key = %self.key, "failed to persist theme preference");
        }
    }
}
