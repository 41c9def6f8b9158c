//! Configuration management.
//!
//! Two distinct configuration surfaces live here:
//!
//! - **Process settings** ([`Settings`]): store URL, document paths,
//!   allocator tuning — loaded from TOML files and the environment.
//! - **Bot configuration** ([`BotConfig`]): the logging and prefix
//!   behavior of the bot itself — resolved from a defaults JSON
//!   document merged with an operator-editable user document.

pub mod resolver;
pub mod schema;
pub mod settings;

pub use resolver::{resolve, BotConfig, ResolutionReport, Substitution};
pub use schema::{LogLevel, LogSink};
pub use settings::{CalendarSettings, ConfigFileSettings, Settings, StoreSettings};

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

/// Errors arising while loading or resolving the bot configuration.
///
/// "Field absent from the user document" is not an error — that is the
/// expected fallback branch. These variants cover the fatal cases only.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed configuration document {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("defaults document field `{field}` is missing, null, or invalid")]
    InvalidDefault { field: &'static str },
}

/// Load and parse one JSON configuration document.
///
/// # Errors
///
/// [`ConfigError::Io`] when the file cannot be read,
/// [`ConfigError::Malformed`] when it is not valid JSON. The two are
/// kept distinct: a missing defaults file and a corrupt defaults file
/// are different deployment defects.
pub fn load_document(path: &Path) -> Result<Value, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::Malformed {
        path: path.to_owned(),
        source,
    })
}

/// Seed the user configuration document on first run.
///
/// If `user_path` does not exist, the defaults file is copied to it
/// verbatim, so a fresh deployment starts with an editable copy of the
/// shipped configuration. Returns `true` if the copy was made.
pub fn seed_user_config(defaults_path: &Path, user_path: &Path) -> Result<bool, ConfigError> {
    if user_path.exists() {
        return Ok(false);
    }

    fs::copy(defaults_path, user_path).map_err(|source| ConfigError::Io {
        path: defaults_path.to_owned(),
        source,
    })?;
    Ok(true)
}
