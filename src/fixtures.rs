#[cfg(test)]
pub mod test {
    use std::fs;
    use std::io;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use serde::Deserialize;
    use serde_json::json;
    use tempfile::TempDir;
    use tracing_subscriber::fmt::MakeWriter;

    use crate::types::Document;

    /// `{"a": {"b": 1}}`
    pub fn nested_document() -> Document {
        match json!({"a": {"b": 1}}) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    /// Write `content` to `config.json` inside a fresh temp dir.
    ///
    /// Keep the returned `TempDir` alive for as long as the path is used.
    pub fn config_file(content: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    /// A path inside a fresh temp dir where nothing exists yet.
    pub fn absent_file() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        (dir, path)
    }

    // -- Log capture ------------------------------------------------------------

    /// In-memory sink for formatted log lines.
    #[derive(Clone, Default)]
    pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Run `f` under a DEBUG-level subscriber scoped to this thread and
    /// return its result with everything it logged (`LEVEL target: message`
    /// per line, no timestamps or colors).
    pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
        let buffer = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buffer.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .without_time()
            .finish();

        let result = tracing::subscriber::with_default(subscriber, f);
        let logs = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        (result, logs)
    }

    /// The level of the first captured line containing `message`.
    pub fn level_of(logs: &str, message: &str) -> Option<String> {
        logs.lines()
            .find(|line| line.contains(message))
            .and_then(|line| line.split_whitespace().next())
            .map(str::to_string)
    }

    // -- Typed view over the default `database` section -------------------------

    #[derive(Deserialize, Debug, PartialEq)]
    pub struct DatabaseSettings {
        pub host: String,
        pub port: u16,
        pub username: String,
        pub password: String,
        pub name: String,
    }

    #[test]
    fn capture_logs_records_level_and_message() {
        let ((), logs) = capture_logs(|| tracing::warn!("disk almost full"));
        assert_eq!(level_of(&logs, "disk almost full").as_deref(), Some("WARN"));
        assert_eq!(level_of(&logs, "never logged"), None);
    }

    #[test]
    fn nested_fixture_shape() {
        let doc = nested_document();
        assert_eq!(doc["a"]["b"], 1);
    }
}
