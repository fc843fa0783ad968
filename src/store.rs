//! The configuration store: one JSON document held in memory and mirrored to
//! a backing file.
//!
//! Construction never fails. A missing file logs a warning and an unusable
//! one (unreadable, malformed, not an object) logs an error; both fall back
//! to the defaults document. Reads return a caller-supplied default for
//! missing keys. Every successful write persists the whole document.
//!
//! Writes mutate the in-memory document before persisting and are not rolled
//! back when the write to disk fails, so after [`ConfigStore::update_value`]
//! returns `false` the in-memory and on-disk documents may differ.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::builder::ConfigStoreBuilder;
use crate::error::StoreError;
use crate::file;
use crate::flatten;
use crate::ops::{self, ConfigResult};
use crate::persist;
use crate::types::{ConfigAction, Document};

/// A JSON configuration document bound to a file path.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    document: Document,
}

impl ConfigStore {
    pub fn builder() -> ConfigStoreBuilder {
        ConfigStoreBuilder::new()
    }

    /// Load the document at `path`, falling back to the built-in defaults.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::builder().path(path).open()
    }

    pub(crate) fn load(path: PathBuf, defaults: fn() -> Document) -> Self {
        let document = match file::read_document(&path) {
            Ok(Some(doc)) => {
                debug!("Loaded config from {}", path.display());
                doc
            }
            Ok(None) => {
                warn!("Config file not found at {}", path.display());
                defaults()
            }
            Err(e) => {
                error!("Failed to load config: {e}");
                defaults()
            }
        };

        Self { path, document }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Borrow the value at a dotted key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let found = ops::document_get(&self.document, key);
        if found.is_none() {
            debug!("Config key not found: {key}");
        }
        found
    }

    /// Return the value at a dotted key, or `default` if any segment is
    /// missing or descends into a non-object.
    pub fn get_value(&self, key: &str, default: impl Into<Value>) -> Value {
        match ops::document_get(&self.document, key) {
            Some(value) => value.clone(),
            None => {
                let default = default.into();
                debug!("Config key not found: {key}, using default: {default}");
                default
            }
        }
    }

    /// Deserialize the value at a dotted key into `T`.
    ///
    /// Returns `None` if the key is missing or the value has the wrong shape.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.get(key)?;
        match T::deserialize(value) {
            Ok(v) => Some(v),
            Err(e) => {
                debug!("Config key {key} has an unexpected shape: {e}");
                None
            }
        }
    }

    /// All leaf values as dotted key-value pairs, in document order.
    pub fn list(&self) -> Vec<(String, Value)> {
        flatten::flatten(&self.document)
    }

    /// Set a dotted key and persist the whole document.
    ///
    /// Missing intermediate objects are created in memory first; they stay
    /// even if persisting fails.
    pub fn try_update_value(
        &mut self,
        key: &str,
        value: impl Into<Value>,
    ) -> Result<(), StoreError> {
        persist::set_in_document(&mut self.document, key, value.into())?;
        persist::write_document(&self.path, &self.document)
    }

    /// Set a dotted key and persist the whole document.
    ///
    /// Returns `false` (and logs the error) if the value could not be set or
    /// written. The in-memory change is kept either way.
    pub fn update_value(&mut self, key: &str, value: impl Into<Value>) -> bool {
        match self.try_update_value(key, value) {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to update config: {e}");
                false
            }
        }
    }

    /// Handle a `ConfigAction` (list / get / set).
    pub fn handle(&mut self, action: &ConfigAction) -> Result<ConfigResult, StoreError> {
        match action {
            ConfigAction::List => Ok(ops::list_values(&self.document)),
            ConfigAction::Get { key } => ops::get_value(&self.document, key),
            ConfigAction::Set { key, value } => {
                self.try_update_value(key, persist::parse_raw_value(value))?;
                Ok(ConfigResult::ValueSet {
                    key: key.clone(),
                    value: value.clone(),
                })
            }
        }
    }
}
