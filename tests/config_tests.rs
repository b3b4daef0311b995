//! Integration tests for configuration parsing
//!
//! This module contains integration tests that verify:
//! - Config loading from fixture files
//! - Rejection of unknown rule names, bad values and bad globs
//! - Defaults when no configuration file exists

mod common;

use common::fixture_path;
use mojicount::config::{ColorOption, Config, OutputFormat};
use mojicount::status::ConfigSource;
use mojicount::{CharacterCounter, ConfigError, RuleName};
use tempfile::TempDir;

fn load(name: &str) -> Result<Config, ConfigError> {
    Config::load(fixture_path("config", name))
}

#[test]
fn test_config_load_valid_minimal() {
    let config = assert_ok!(load("valid_minimal.toml"));

    assert_eq!(config.mojicount.version, "1");
    assert_eq!(config, Config::default());
    assert_eq!(config.disabled.disabled().count(), 0);
}

#[test]
fn test_config_load_valid_full() {
    let config = assert_ok!(load("valid_full.toml"));

    assert_eq!(config.mojicount.include.len(), 2);
    assert_eq!(config.mojicount.exclude.len(), 1);
    assert_eq!(
        config.disabled.disabled().collect::<Vec<_>>(),
        vec![RuleName::HtmlRuby, RuleName::AsciiCharacters]
    );
    assert!(!config.disabled.is_disabled(RuleName::Heading));
    assert_eq!(config.output.format, OutputFormat::Jsonl);
    assert_eq!(config.output.color, ColorOption::Never);
    assert_eq!(config.output.label_style().render(12), "12 字");
}

#[test]
fn test_config_drives_counter() {
    let config = assert_ok!(load("valid_full.toml"));
    let counter = CharacterCounter::with_toggles(&config.disabled_rules());

    assert!(!counter.is_enabled(RuleName::AsciiCharacters));
    assert!(!counter.is_enabled(RuleName::HtmlRuby));
    assert_eq!(counter.count("abc<rt>よみ</rt>"), 14);
}

#[test]
fn test_config_load_invalid_version() {
    let err = load("invalid_version.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
    assert!(err.to_string().contains("Unsupported configuration version"));
}

#[test]
fn test_config_load_unknown_rule_name() {
    let err = load("invalid_rule_name.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("furigana"), "{}", err);
}

#[test]
fn test_config_load_non_boolean_toggle() {
    let err = load("invalid_rule_value.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_config_load_invalid_glob() {
    let err = load("invalid_glob.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
    assert!(err.to_string().contains("manuscript/[unclosed"));
}

#[test]
fn test_config_load_unknown_field() {
    assert!(matches!(
        load("invalid_unknown_field.toml"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_config_load_invalid_syntax() {
    assert!(matches!(
        load("invalid_syntax.toml"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_config_load_missing_file_is_io_error() {
    assert!(matches!(
        load("does_not_exist.toml"),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn test_load_or_default_without_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = assert_ok!(Config::load_or_default(
        temp_dir.path().join("mojicount.toml")
    ));
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_or_default_still_reports_errors() {
    assert!(Config::load_or_default(fixture_path("config", "invalid_version.toml")).is_err());
}

#[test]
fn test_disable_rules_adds_to_file() {
    let mut config = assert_ok!(load("valid_full.toml"));
    config.disable_rules(&[RuleName::Whitespace]);

    let disabled: Vec<_> = config.disabled.disabled().collect();
    assert_eq!(
        disabled,
        vec![
            RuleName::Whitespace,
            RuleName::HtmlRuby,
            RuleName::AsciiCharacters
        ]
    );
}

#[test]
fn test_init_template_matches_defaults() {
    let config = assert_ok!(Config::parse(mojicount::cli::init::DEFAULT_MOJICOUNT_TOML));
    assert_eq!(config, Config::default());
}
