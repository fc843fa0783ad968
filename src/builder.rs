use std::path::PathBuf;

use crate::defaults::default_document;
use crate::store::ConfigStore;
use crate::types::{DEFAULT_CONFIG_PATH, Document};

/// Builder for opening a [`ConfigStore`].
///
/// - [`path()`](Self::path) — the backing file (default: `/etc/app/config.json`).
/// - [`defaults()`](Self::defaults) — the document used when the file is
///   missing or unusable (default: [`default_document`]).
pub struct ConfigStoreBuilder {
    path: PathBuf,
    defaults: fn() -> Document,
}

impl ConfigStoreBuilder {
    pub(crate) fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_PATH),
            defaults: default_document,
        }
    }

    /// Set the backing file path.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Replace the fallback document factory.
    ///
    /// The factory is called once per fallback, so each store gets its own
    /// document.
    pub fn defaults(mut self, defaults: fn() -> Document) -> Self {
        self.defaults = defaults;
        self
    }

    /// Load the document and build the store. Never fails: see
    /// [`ConfigStore`] for the fallback rules.
    pub fn open(self) -> ConfigStore {
        ConfigStore::load(self.path, self.defaults)
    }
}

impl Default for ConfigStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
