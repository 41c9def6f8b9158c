//! Telemetry and Observability
//!
//! Structured logging setup, driven by the resolved bot configuration:
//! an optional console layer, an optional file layer, and routing of
//! the backing-store client library's events to one of the two.

use std::fs::OpenOptions;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use crate::config::{BotConfig, LogLevel, LogSink};

/// Filter target of this crate's own events.
const APP_TARGET: &str = "guildbot";

/// Filter target of the backing store client library.
const LIBRARY_TARGET: &str = "redis";

/// File the file logger appends to.
pub const LOG_FILE: &str = "guildbot.log";

/// Initialize the tracing subscriber from the resolved configuration.
///
/// The console layer honors a `RUST_LOG` override; the file layer
/// always follows the configured level. Configured levels use the
/// schema's symbolic levels; CRITICAL has no `tracing` counterpart and
/// filters as ERROR.
///
/// # Errors
///
/// Returns an I/O error if file logging is enabled and the log file
/// cannot be opened.
pub fn init_logging(config: &BotConfig) -> Result<(), std::io::Error> {
    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    if config.log_to_console {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(console_directives(config)));
        layers.push(
            fmt::layer()
                .with_ansi(config.console_use_color)
                .with_target(true)
                .with_filter(filter)
                .boxed(),
        );
    }

    if config.log_to_file {
        let file = OpenOptions::new().create(true).append(true).open(LOG_FILE)?;
        layers.push(
            fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(file))
                .with_filter(EnvFilter::new(file_directives(config)))
                .boxed(),
        );
    }

    tracing_subscriber::registry().with(layers).init();
    Ok(())
}

/// Log every resolved configuration field, one line per field.
pub fn log_configuration(config: &BotConfig) {
    info!("listing bot configuration:");
    info!(value = config.log_to_console, "  log_to_console");
    info!(value = config.log_to_file, "  log_to_file");
    info!(value = config.log_library, "  log_library");
    info!(value = config.console_use_color, "  console_use_color");
    info!(value = config.console_log_level.name(), "  console_log_level");
    info!(value = config.file_log_level.name(), "  file_log_level");
    info!(value = config.library_log_level.name(), "  library_log_level");
    info!(value = config.library_logging_type.name(), "  library_logging_type");
    info!(value = %config.command_prefix, "  command_prefix");
}

/// Filter directives for the console layer.
fn console_directives(config: &BotConfig) -> String {
    directives(config, LogSink::Console, config.console_log_level)
}

/// Filter directives for the file layer.
fn file_directives(config: &BotConfig) -> String {
    directives(config, LogSink::File, config.file_log_level)
}

/// Build the directive string for one sink: the application target at
/// its configured level, plus the library target when library logging
/// is routed to this sink.
fn directives(config: &BotConfig, sink: LogSink, app_level: LogLevel) -> String {
    let mut directives = format!("{}={}", APP_TARGET, filter_name(app_level));
    if config.log_library && config.library_logging_type == sink {
        directives.push_str(&format!(
            ",{}={}",
            LIBRARY_TARGET,
            filter_name(config.library_log_level)
        ));
    }
    directives
}

/// The `tracing` filter name for a schema level.
fn filter_name(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warning => "warn",
        LogLevel::Error => "error",
        LogLevel::Critical => "error",
    }
}
