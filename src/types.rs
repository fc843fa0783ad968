use serde_json::{Map, Value};

/// A configuration document: a JSON object whose values may nest further
/// objects. Key order follows insertion order.
pub type Document = Map<String, Value>;

/// Default location of the backing file.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/app/config.json";

/// A config operation, independent of any CLI framework.
/// The CLI layer converts parsed clap args into this.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigAction {
    List,
    Get { key: String },
    Set { key: String, value: String },
}
