//! The built-in fallback document.

use serde_json::json;

use crate::types::Document;

/// Build the default configuration document.
///
/// Returns a fresh document on every call, so stores that fall back to
/// defaults never share state.
pub fn default_document() -> Document {
    let value = json!({
        "app_name": "DevOpsApp",
        "environment": "development",
        "log_level": "INFO",
        "retry_attempts": 3,
        "timeout_seconds": 30,
        "features": {
            "enable_caching": true,
            "enable_metrics": false,
            "enable_notifications": true
        },
        "database": {
            "host": "localhost",
            "port": 5432,
            "username": "admin",
            "password": "password123",
            "name": "devops_db"
        }
    });

    match value {
        serde_json::Value::Object(map) => map,
        _ => Document::new(),
    }
}
