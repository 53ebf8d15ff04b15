//! Preference persistence behind a small key-value trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the two theme keys are ever stored. The browser host uses
//! `localStorage` when it is reachable and falls back to [`MemoryStore`]
//! otherwise, which keeps the theme for the session only.
//!
//! ERROR HANDLING
//! ==============
//! Write failures surface as [`StorageError`] but [`persist`] swallows them
//! after logging: a lost preference is never worth interrupting the page.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use crate::config::ThemeConfig;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("failed to write preference `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// Flat string key-value store with no expiry.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`StorageError`] when the value could not be stored.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store. Also stands in for disabled browser storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every write, like storage disabled by the user.
    #[must_use]
    pub fn read_only() -> Self {
        Self { values: HashMap::new(), read_only: true }
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Unavailable);
        }
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Theme-related values read at load time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoredTheme {
    pub theme: Option<String>,
    pub user_override: bool,
}

#[must_use]
pub fn load_theme(store: &dyn PreferenceStore, config: &ThemeConfig) -> StoredTheme {
    // An empty value counts as never stored.
    let read = |key: &str| store.get(key).filter(|v| !v.is_empty());
    StoredTheme { theme: read(&config.storage_key), user_override: read(&config.override_key).is_some() }
}

/// Best-effort write. Returns whether the value was stored.
pub fn persist(store: &mut dyn PreferenceStore, key: &str, value: &str) -> bool {
    match store.set(key, value) {
        Ok(()) => true,
        Err(e) => {
            log::debug!("preference not persisted, keeping session value: {e}");
            false
        }
    }
}

#[cfg(feature = "hydrate")]
pub use local::LocalStore;

#[cfg(feature = "hydrate")]
mod local {
    use super::{PreferenceStore, StorageError};

    /// `window.localStorage`.
    pub struct LocalStore {
        storage: web_sys::Storage,
    }

    impl LocalStore {
        /// Open `localStorage`, or `None` when the browser refuses access.
        #[must_use]
        pub fn open() -> Option<Self> {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            Some(Self { storage })
        }
    }

    impl PreferenceStore for LocalStore {
        fn get(&self, key: &str) -> Option<String> {
            self.storage.get_item(key).ok().flatten()
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.storage.set_item(key, value).map_err(|e| StorageError::Write {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
    }
}
