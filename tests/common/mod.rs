//! Common Test Utilities
//!
//! Shared helpers and fixtures for the integration suite.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};

/// A scratch directory unique to one test, cleaned up on drop.
pub struct TempConfigDir {
    pub root: PathBuf,
}

impl TempConfigDir {
    pub fn new() -> Self {
        let root = std::env::temp_dir().join(format!("guildbot-test-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&root).expect("failed to create temp config dir");
        Self { root }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn write_json(&self, name: &str, document: &Value) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, document.to_string()).expect("failed to write test document");
        path
    }

    pub fn write_text(&self, name: &str, text: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, text).expect("failed to write test file");
        path
    }
}

impl Drop for TempConfigDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

/// A schema-complete defaults document.
pub fn defaults_document() -> Value {
    json!({
        "log_to_console": true,
        "log_to_file": false,
        "log_library": true,
        "console_use_color": true,
        "console_log_level": "INFO",
        "file_log_level": "WARNING",
        "library_log_level": "ERROR",
        "library_logging_type": "CONSOLE",
        "command_prefix": "!",
    })
}

/// Read a JSON file back as a document.
pub fn read_json(path: &Path) -> Value {
    let text = fs::read_to_string(path).expect("failed to read test document");
    serde_json::from_str(&text).expect("test document is not valid JSON")
}
