//! Two-tier configuration resolution.
//!
//! The bot ships a defaults document and lets operators override fields
//! in a user document. Resolution walks the schema once: a user value
//! wins when it is present and well-formed, otherwise the default is
//! applied and the substitution recorded. The defaults document is
//! trusted deployment material — any field it is missing, or carries in
//! an invalid form, aborts resolution.

use serde_json::Value;

use super::schema::{self, LogLevel, LogSink};
use super::ConfigError;

/// Fully resolved bot configuration.
///
/// Constructed once at startup and never mutated afterwards; share it
/// behind an `Arc`.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub log_to_console: bool,
    pub log_to_file: bool,
    pub log_library: bool,
    pub console_use_color: bool,
    pub console_log_level: LogLevel,
    pub file_log_level: LogLevel,
    pub library_log_level: LogLevel,
    pub library_logging_type: LogSink,
    pub command_prefix: String,
}

/// One default-for-user substitution made during resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Substitution {
    /// Schema field the fallback applied to
    pub field: &'static str,
    /// The default value that was applied
    pub fallback: Value,
}

/// Everything the resolver wants surfaced to the logging layer.
///
/// The report is informational only; resolution itself never acts on it.
#[derive(Debug, Clone, Default)]
pub struct ResolutionReport {
    /// Fields where the user value was missing or invalid
    pub substitutions: Vec<Substitution>,
    /// User-document keys that are not part of the schema
    pub unknown_fields: Vec<String>,
}

/// Resolve the bot configuration from the two documents.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidDefault`] if the defaults document is
/// missing a schema field or carries one that fails validation — even
/// for fields the user document covers. User document defects are never
/// fatal.
pub fn resolve(defaults: &Value, user: &Value) -> Result<(BotConfig, ResolutionReport), ConfigError> {
    // The defaults document must be schema-complete on its own; a hole
    // in it is a deployment defect, not something a user override can
    // paper over.
    for spec in schema::FIELDS {
        let present = defaults.get(spec.name).is_some_and(|v| spec.kind.accepts(v));
        if !present {
            return Err(ConfigError::InvalidDefault { field: spec.name });
        }
    }

    let mut cx = Resolution {
        defaults,
        user,
        report: ResolutionReport::default(),
    };

    let config = BotConfig {
        log_to_console: cx.bool_field("log_to_console")?,
        log_to_file: cx.bool_field("log_to_file")?,
        log_library: cx.bool_field("log_library")?,
        console_use_color: cx.bool_field("console_use_color")?,
        console_log_level: cx.level_field("console_log_level")?,
        file_log_level: cx.level_field("file_log_level")?,
        library_log_level: cx.level_field("library_log_level")?,
        library_logging_type: cx.sink_field("library_logging_type")?,
        command_prefix: cx.text_field("command_prefix")?,
    };

    let mut report = cx.report;
    if let Some(map) = user.as_object() {
        report.unknown_fields = map
            .keys()
            .filter(|k| !schema::is_schema_field(k))
            .cloned()
            .collect();
    }

    Ok((config, report))
}

/// Working state for one resolution pass.
struct Resolution<'a> {
    defaults: &'a Value,
    user: &'a Value,
    report: ResolutionReport,
}

impl<'a> Resolution<'a> {
    /// Resolve one field through `parse`, falling back to the default.
    ///
    /// `parse` returning `None` means "not a well-formed value of this
    /// field's kind" — for the user document that falls through to the
    /// default, for the defaults document it is fatal.
    fn pick<T>(
        &mut self,
        name: &'static str,
        parse: impl Fn(&Value) -> Option<T>,
    ) -> Result<T, ConfigError> {
        if let Some(value) = self.user.get(name).and_then(&parse) {
            return Ok(value);
        }

        let fallback = self
            .defaults
            .get(name)
            .ok_or(ConfigError::InvalidDefault { field: name })?;
        let parsed = parse(fallback).ok_or(ConfigError::InvalidDefault { field: name })?;

        self.report.substitutions.push(Substitution {
            field: name,
            fallback: fallback.clone(),
        });
        Ok(parsed)
    }

    fn bool_field(&mut self, name: &'static str) -> Result<bool, ConfigError> {
        self.pick(name, Value::as_bool)
    }

    fn text_field(&mut self, name: &'static str) -> Result<String, ConfigError> {
        self.pick(name, |v| v.as_str().map(str::to_owned))
    }

    fn level_field(&mut self, name: &'static str) -> Result<LogLevel, ConfigError> {
        self.pick(name, |v| v.as_str().and_then(LogLevel::from_name))
    }

    fn sink_field(&mut self, name: &'static str) -> Result<LogSink, ConfigError> {
        self.pick(name, |v| v.as_str().and_then(LogSink::from_name))
    }
}
