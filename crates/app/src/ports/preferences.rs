//! Preference port — small string values persisted across page loads.

/// Error returned by [`PreferenceStore`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreferenceError {
    /// No persistent storage is reachable (private mode, disabled storage).
    #[error("preference storage is unavailable")]
    Unavailable,

    /// The store refused the write (quota exceeded, security error).
    #[error("preference write rejected: {0}")]
    Rejected(String),
}

/// Key/value store for UI preferences, with no expiry.
pub trait PreferenceStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError::Unavailable`] when storage cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`PreferenceError`] when the value could not be persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}
