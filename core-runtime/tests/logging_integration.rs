//! Integration tests for logging system

use core_runtime::logging::{init_logging, redact_if_sensitive, LogFormat, LogLevel, LoggingConfig};
use core_runtime::Error;

#[test]
fn test_logging_config_round_trip() {
    // Only one global subscriber can exist per process, so most checks stay on the builder
    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(LogLevel::Warn)
        .with_spans(false);

    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.level, LogLevel::Warn);
    assert!(!config.enable_spans);
    assert!(config.filter.is_none());
}

#[test]
fn test_init_logging_only_once() {
    let config = LoggingConfig::default()
        .with_format(LogFormat::Json)
        .with_level(LogLevel::Debug);

    init_logging(config.clone()).expect("first initialization succeeds");
    tracing::info!(playlists = 3, "Loaded playlists");

    let second = init_logging(config);
    assert!(matches!(second, Err(Error::Logging(_))));
}

#[test]
fn test_invalid_custom_filter_is_config_error() {
    let config = LoggingConfig::default().with_filter("core_catalog=[");
    assert!(matches!(init_logging(config), Err(Error::Config(_))));
}

#[test]
fn test_share_tokens_are_redacted() {
    assert_eq!(redact_if_sensitive("share_token", "AMaBXykL"), "[REDACTED]");
    assert_eq!(redact_if_sensitive("shareToken", "AMaBXykL"), "[REDACTED]");
    assert_eq!(redact_if_sensitive("playlist_id", "pl-1"), "pl-1");
}

#[test]
fn test_level_ordering() {
    assert!(LogLevel::Trace < LogLevel::Debug);
    assert!(LogLevel::Warn < LogLevel::Error);
}
