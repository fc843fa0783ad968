//! `config list|get|set` subcommands for applications built on clap.
//!
//! Available with the `clap` feature (on by default). Nest [`ConfigArgs`]
//! under a subcommand of your own parser, turn it into a
//! [`ConfigAction`](crate::ConfigAction) with [`ConfigArgs::into_action`],
//! and pass that to [`ConfigStore::handle`](crate::ConfigStore::handle).
//! Values given to `set` go through the same type guessing as
//! `ConfigAction::Set`: `6543` is stored as a number, `true` as a boolean.

use clap::{Args, Subcommand};

use crate::types::ConfigAction;

/// The `config` command group. With no subcommand it lists every key.
///
/// ```ignore
/// #[derive(Subcommand)]
/// enum Commands {
///     Config(ConfigArgs),
/// }
///
/// let action = args.into_action();
/// print!("{}", store.handle(&action)?);
/// ```
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: Option<ConfigSubcommand>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Print every key in the config file as `key = value`.
    List,
    /// Print one value.
    Get {
        /// Dotted path such as `database.host`.
        key: String,
    },
    /// Store a value and rewrite the config file.
    Set {
        /// Dotted path such as `database.port`; missing sections are created.
        key: String,
        /// New value; numbers, booleans and JSON literals keep their type.
        value: String,
    },
}

impl ConfigArgs {
    pub fn into_action(self) -> ConfigAction {
        match self.action {
            None | Some(ConfigSubcommand::List) => ConfigAction::List,
            Some(ConfigSubcommand::Get { key }) => ConfigAction::Get { key },
            Some(ConfigSubcommand::Set { key, value }) => ConfigAction::Set { key, value },
        }
    }
}
