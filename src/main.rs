//! Demo driver: open the store at the default path, print a few values, and
//! rotate the database password.
//!
//! Takes no arguments. Log output is filtered by `RUST_LOG` (default `info`).
//! Always exits with status 0.

use serde_json::Value;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use jsonfig::{ConfigStore, DEFAULT_CONFIG_PATH, format_value};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let mut store = ConfigStore::open(DEFAULT_CONFIG_PATH);

    let app_name = store.get_value("app_name", Value::Null);
    let db_host = store.get_value("database.host", Value::Null);
    let cache_enabled = store.get_value("features.enable_caching", Value::Null);

    info!("Application: {}", format_value(&app_name));
    info!("Database host: {}", format_value(&db_host));
    info!("Caching enabled: {}", format_value(&cache_enabled));

    if store.update_value("database.password", "new_secure_password") {
        info!("Updated database password successfully");
    } else {
        error!("Failed to update database password");
    }
}
