//! # Guildbot
//!
//! Process entry point: resolves the two-tier bot configuration,
//! brings up logging from it, and builds the core services against the
//! document store. The chat-platform gateway and command layers attach
//! on top of the resulting state.

use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use guildbot::config::{self, Settings};
use guildbot::startup::AppState;
use guildbot::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    // Process settings first: they say where the configuration
    // documents live and how to reach the store.
    let settings = Settings::load()?;

    let defaults_path = Path::new(&settings.files.defaults_path).to_owned();
    let user_path = Path::new(&settings.files.user_path).to_owned();

    // First run: give the operator an editable copy of the defaults.
    let seeded = config::seed_user_config(&defaults_path, &user_path)?;

    let defaults = config::load_document(&defaults_path)?;
    let user = config::load_document(&user_path)?;
    let (bot_config, report) = config::resolve(&defaults, &user)?;

    telemetry::init_logging(&bot_config)?;
    info!("logging is now available");

    if seeded {
        info!(path = %user_path.display(), "user configuration seeded from defaults");
    }
    for substitution in &report.substitutions {
        warn!(
            field = substitution.field,
            fallback = %substitution.fallback,
            "user configuration value missing or invalid, default applied"
        );
    }
    for field in &report.unknown_fields {
        warn!(field = %field, "unknown field in user configuration");
    }

    telemetry::log_configuration(&bot_config);

    let state = AppState::build(settings, bot_config).await?;
    info!(cached_guilds = state.prefixes.len(), "core services initialised");

    Ok(())
}
