//! Configuration bootstrap flow tests.
//!
//! Exercise the real file path: seed the user document on first run,
//! load both documents, resolve.

use guildbot::config::{self, ConfigError, LogLevel};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{defaults_document, read_json, TempConfigDir};

#[test]
fn test_first_run_seeds_user_config_and_resolves_cleanly() {
    let dir = TempConfigDir::new();
    let defaults_path = dir.write_json("defaults.json", &defaults_document());
    let user_path = dir.path("user.json");

    let seeded = config::seed_user_config(&defaults_path, &user_path).unwrap();
    assert!(seeded);
    assert_eq!(read_json(&user_path), defaults_document());

    let defaults = config::load_document(&defaults_path).unwrap();
    let user = config::load_document(&user_path).unwrap();
    let (resolved, report) = config::resolve(&defaults, &user).unwrap();

    // The seeded copy is fully valid, so nothing falls back.
    assert!(report.substitutions.is_empty());
    assert!(report.unknown_fields.is_empty());
    assert_eq!(resolved.command_prefix, "!");
}

#[test]
fn test_second_run_does_not_overwrite_user_edits() {
    let dir = TempConfigDir::new();
    let defaults_path = dir.write_json("defaults.json", &defaults_document());
    let user_path = dir.write_json("user.json", &json!({ "command_prefix": "?" }));

    let seeded = config::seed_user_config(&defaults_path, &user_path).unwrap();
    assert!(!seeded);
    assert_eq!(read_json(&user_path), json!({ "command_prefix": "?" }));
}

#[test]
fn test_partially_invalid_user_document_resolves_with_report() {
    let dir = TempConfigDir::new();
    let defaults_path = dir.write_json("defaults.json", &defaults_document());
    let user_path = dir.write_json(
        "user.json",
        &json!({
            "log_to_console": "notabool",
            "command_prefix": "?",
        }),
    );

    let defaults = config::load_document(&defaults_path).unwrap();
    let user = config::load_document(&user_path).unwrap();
    let (resolved, report) = config::resolve(&defaults, &user).unwrap();

    assert!(resolved.log_to_console);
    assert_eq!(resolved.console_log_level, LogLevel::Info);
    assert_eq!(resolved.command_prefix, "?");

    let substituted: Vec<_> = report.substitutions.iter().map(|s| s.field).collect();
    assert!(substituted.contains(&"log_to_console"));
    assert!(!substituted.contains(&"command_prefix"));
}

#[test]
fn test_missing_defaults_file_is_an_io_error() {
    let dir = TempConfigDir::new();
    let err = config::load_document(&dir.path("nope.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_corrupt_document_is_malformed_not_io() {
    let dir = TempConfigDir::new();
    let path = dir.write_text("defaults.json", "{ this is not json");

    let err = config::load_document(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Malformed { .. }));
}

#[test]
fn test_defective_defaults_document_aborts_resolution() {
    let dir = TempConfigDir::new();
    let mut defaults = defaults_document();
    defaults
        .as_object_mut()
        .unwrap()
        .insert("console_log_level".into(), json!("SHOUTING"));
    let defaults_path = dir.write_json("defaults.json", &defaults);
    let user_path = dir.write_json("user.json", &json!({}));

    let defaults = config::load_document(&defaults_path).unwrap();
    let user = config::load_document(&user_path).unwrap();

    let err = config::resolve(&defaults, &user).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidDefault {
            field: "console_log_level"
        }
    ));
}
