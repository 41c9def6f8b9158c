//! Process settings.
//!
//! Infrastructure-level settings for the process: where the document
//! store lives, where the bot configuration documents sit on disk, and
//! tuning knobs for the calendar id allocator. Distinct from the bot
//! configuration itself, which is resolved from JSON documents by
//! [`crate::config::resolver`].

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root settings structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Document store connection settings
    pub store: StoreSettings,

    /// Bot configuration document locations
    pub files: ConfigFileSettings,

    /// Calendar feature tuning
    pub calendar: CalendarSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Document store connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    /// Store connection URL (redis)
    pub url: String,

    /// Optional key namespace prepended to every document path
    #[serde(default)]
    pub namespace: Option<String>,
}

/// Locations of the two bot configuration documents.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFileSettings {
    /// Baked-in defaults document (must exist)
    pub defaults_path: String,

    /// Operator overrides document (seeded from defaults on first run)
    pub user_path: String,
}

/// Calendar feature settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarSettings {
    /// Maximum draw-and-probe attempts before event id allocation
    /// gives up
    pub id_max_attempts: u32,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. Built-in defaults
    /// 2. config/default.toml
    /// 3. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 4. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if settings cannot be loaded or parsed, or
    /// if the allocator attempt cap is zero.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        // Determine the running environment
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("store.url", "redis://127.0.0.1:6379")?
            .set_default("files.defaults_path", "config/defaults.json")?
            .set_default("files.user_path", "config/user.json")?
            .set_default("calendar.id_max_attempts", 64)?
            // Load from config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Load from environment variables
            // APP__STORE__URL=redis://... -> store.url
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            // Map simple environment variables
            .set_override_option("store.url", std::env::var("STORE_URL").ok())?
            .set_override_option("files.defaults_path", std::env::var("BOT_DEFAULTS_PATH").ok())?
            .set_override_option("files.user_path", std::env::var("BOT_USER_CONFIG_PATH").ok())?
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| {
                if settings.calendar.id_max_attempts == 0 {
                    return Err(ConfigError::Message(
                        "calendar.id_max_attempts must be at least 1".into(),
                    ));
                }
                Ok(settings)
            })
    }
}
