//! A small JSON configuration store. Point it at a file, read and write
//! values by dotted key.
//!
//! ```ignore
//! let mut store = ConfigStore::open("/etc/app/config.json");
//! let host = store.get_value("database.host", "localhost");
//! store.update_value("database.password", "new_secure_password");
//! ```
//!
//! # Loading
//!
//! [`ConfigStore::open`] reads one JSON document from disk. Opening never
//! fails:
//!
//! - **File missing** — a warning is logged and the store starts from the
//!   built-in [`default_document`].
//! - **File unusable** — unreadable, malformed JSON, or a top-level value that
//!   is not an object. An error is logged and the store starts from the
//!   defaults.
//!
//! A document that loads successfully replaces the defaults entirely; the two
//! are never merged. Use [`ConfigStore::builder`] to choose another default
//! path or supply a different fallback document.
//!
//! # Dotted keys
//!
//! `database.host` addresses the `host` entry of the `database` object. Keys
//! are split on every `.`, and each segment descends one level.
//!
//! | Call | Missing segment | Non-object on the way |
//! |------|-----------------|-----------------------|
//! | [`get_value`](ConfigStore::get_value) | returns the default | returns the default |
//! | [`get`](ConfigStore::get) | `None` | `None` |
//! | [`update_value`](ConfigStore::update_value) | creates an empty object | returns `false` |
//!
//! # Persistence
//!
//! Every successful write rewrites the whole file as 2-space indented JSON,
//! keeping key order. [`update_value`](ConfigStore::update_value) changes the
//! in-memory document first and then writes. If writing fails it logs the
//! error and returns `false`, but the in-memory change stays: the store and
//! the file can differ until the next successful write.
//! [`try_update_value`](ConfigStore::try_update_value) behaves the same but
//! returns the [`StoreError`] instead.
//!
//! There is no locking. Two stores writing the same path overwrite each
//! other, last writer wins.
//!
//! # Logging
//!
//! The store emits [`tracing`](https://docs.rs/tracing) events and installs
//! no subscriber: `warn` for a missing file, `error` for load and write
//! failures, `debug` for key lookups that fall back to a default.
//!
//! # Clap adapter
//!
//! With the `clap` feature (on by default), [`ConfigArgs`] gives an
//! application `config list|get|set` subcommands that turn into a
//! [`ConfigAction`] for [`ConfigStore::handle`].

pub mod error;
pub mod types;

mod builder;
#[cfg(feature = "clap")]
mod cli;
mod defaults;
mod file;
mod flatten;
mod ops;
mod persist;
mod store;

#[cfg(test)]
mod fixtures;

pub use builder::ConfigStoreBuilder;
#[cfg(feature = "clap")]
pub use cli::{ConfigArgs, ConfigSubcommand};
pub use defaults::default_document;
pub use error::StoreError;
pub use ops::{ConfigResult, format_value};
pub use store::ConfigStore;
pub use types::{ConfigAction, DEFAULT_CONFIG_PATH, Document};
