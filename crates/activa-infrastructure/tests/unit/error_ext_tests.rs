//! Error Extension Tests

use std::io;

use activa_domain::error::{Error, Result};
use activa_infrastructure::error_ext::ErrorContext;

fn missing_file() -> std::result::Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "file not found"))
}

#[test]
fn test_context_wraps_as_infrastructure_error() {
    let result: Result<()> = missing_file().context("failed to read file");

    match result {
        Err(Error::Infrastructure { message, source }) => {
            assert!(message.contains("failed to read file"));
            assert!(message.contains("file not found"));
            assert!(source.is_some());
        }
        other => panic!("Expected Infrastructure error, got {other:?}"),
    }
}

#[test]
fn test_with_context_is_lazy_on_success() {
    let mut evaluated = false;
    let result: Result<u8> = Ok::<u8, io::Error>(7).with_context(|| {
        evaluated = true;
        "unused"
    });

    assert_eq!(result.unwrap(), 7);
    assert!(!evaluated);
}

#[test]
fn test_config_context_wraps_as_configuration_error() {
    let result: Result<()> = missing_file().config_context("config unreadable");

    match result {
        Err(Error::Configuration { message, source }) => {
            assert!(message.starts_with("config unreadable"));
            assert!(source.is_some());
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}
