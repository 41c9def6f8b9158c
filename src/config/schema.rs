//! Bot configuration schema.
//!
//! The bot configuration is a fixed, enumerated set of named fields.
//! Every field has a semantic kind: boolean, free text, or one of two
//! symbolic enumerations (log level, log sink). The resolver walks this
//! schema; nothing outside it is ever read from a configuration
//! document.

use serde_json::Value;

/// Log verbosity levels.
///
/// Symbolic names map to the conventional ordinal values. `WARN` and
/// `FATAL` are accepted as aliases for `WARNING` and `CRITICAL`.
/// Names are matched case-sensitively, uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// Look up a level by its symbolic name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "DEBUG" => Some(Self::Debug),
            "INFO" => Some(Self::Info),
            "WARNING" | "WARN" => Some(Self::Warning),
            "ERROR" => Some(Self::Error),
            "CRITICAL" | "FATAL" => Some(Self::Critical),
            _ => None,
        }
    }

    /// Canonical symbolic name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// Conventional numeric value of the level.
    pub fn ordinal(&self) -> u8 {
        match self {
            Self::Debug => 10,
            Self::Info => 20,
            Self::Warning => 30,
            Self::Error => 40,
            Self::Critical => 50,
        }
    }
}

/// Where a configurable logger writes its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    Console,
    File,
}

impl LogSink {
    /// Look up a sink by its symbolic name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "CONSOLE" => Some(Self::Console),
            "FILE" => Some(Self::File),
            _ => None,
        }
    }

    /// Canonical symbolic name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Console => "CONSOLE",
            Self::File => "FILE",
        }
    }

    /// Ordinal value of the sink.
    pub fn ordinal(&self) -> u8 {
        match self {
            Self::Console => 0,
            Self::File => 1,
        }
    }
}

/// Semantic kind of a configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    Text,
    Level,
    Sink,
}

impl FieldKind {
    /// Whether `value` is a well-formed value of this kind.
    ///
    /// An unknown symbolic name is simply not well-formed; the resolver
    /// treats it the same as a missing field.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            Self::Bool => value.is_boolean(),
            Self::Text => value.is_string(),
            Self::Level => value
                .as_str()
                .is_some_and(|s| LogLevel::from_name(s).is_some()),
            Self::Sink => value
                .as_str()
                .is_some_and(|s| LogSink::from_name(s).is_some()),
        }
    }
}

/// One named field of the schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// The complete bot configuration schema.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "log_to_console",
        kind: FieldKind::Bool,
    },
    FieldSpec {
        name: "log_to_file",
        kind: FieldKind::Bool,
    },
    FieldSpec {
        name: "log_library",
        kind: FieldKind::Bool,
    },
    FieldSpec {
        name: "console_use_color",
        kind: FieldKind::Bool,
    },
    FieldSpec {
        name: "console_log_level",
        kind: FieldKind::Level,
    },
    FieldSpec {
        name: "file_log_level",
        kind: FieldKind::Level,
    },
    FieldSpec {
        name: "library_log_level",
        kind: FieldKind::Level,
    },
    FieldSpec {
        name: "library_logging_type",
        kind: FieldKind::Sink,
    },
    FieldSpec {
        name: "command_prefix",
        kind: FieldKind::Text,
    },
];

/// Whether `name` is a schema field.
pub fn is_schema_field(name: &str) -> bool {
    FIELDS.iter().any(|f| f.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case("DEBUG", Some(LogLevel::Debug))]
    #[test_case("INFO", Some(LogLevel::Info))]
    #[test_case("WARNING", Some(LogLevel::Warning))]
    #[test_case("WARN", Some(LogLevel::Warning))]
    #[test_case("ERROR", Some(LogLevel::Error))]
    #[test_case("CRITICAL", Some(LogLevel::Critical))]
    #[test_case("FATAL", Some(LogLevel::Critical))]
    #[test_case("TRACE", None)]
    #[test_case("info", None; "lowercase is not accepted")]
    fn test_level_from_name(name: &str, expected: Option<LogLevel>) {
        assert_eq!(LogLevel::from_name(name), expected);
    }

    #[test]
    fn test_level_ordinals() {
        assert_eq!(LogLevel::Debug.ordinal(), 10);
        assert_eq!(LogLevel::Info.ordinal(), 20);
        assert_eq!(LogLevel::Warning.ordinal(), 30);
        assert_eq!(LogLevel::Error.ordinal(), 40);
        assert_eq!(LogLevel::Critical.ordinal(), 50);
    }

    #[test]
    fn test_sink_from_name() {
        assert_eq!(LogSink::from_name("CONSOLE"), Some(LogSink::Console));
        assert_eq!(LogSink::from_name("FILE"), Some(LogSink::File));
        assert_eq!(LogSink::from_name("SYSLOG"), None);
        assert_eq!(LogSink::Console.ordinal(), 0);
        assert_eq!(LogSink::File.ordinal(), 1);
    }

    #[test_case(FieldKind::Bool, json!(true), true)]
    #[test_case(FieldKind::Bool, json!("true"), false; "bool rejects string")]
    #[test_case(FieldKind::Bool, json!(null), false; "bool rejects null")]
    #[test_case(FieldKind::Text, json!("!"), true)]
    #[test_case(FieldKind::Text, json!(1), false; "text rejects number")]
    #[test_case(FieldKind::Level, json!("INFO"), true)]
    #[test_case(FieldKind::Level, json!("LOUD"), false; "level rejects unknown name")]
    #[test_case(FieldKind::Sink, json!("FILE"), true)]
    #[test_case(FieldKind::Sink, json!(1), false; "sink rejects ordinal form")]
    fn test_kind_accepts(kind: FieldKind, value: Value, expected: bool) {
        assert_eq!(kind.accepts(&value), expected);
    }

    #[test]
    fn test_schema_field_lookup() {
        assert!(is_schema_field("command_prefix"));
        assert!(!is_schema_field("commandprefix"));
    }
}
