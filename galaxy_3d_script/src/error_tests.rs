//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_configuration_error_display() {
    let err = Error::ConfigurationError("Unexpected map size".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Configuration error"));
    assert!(display.contains("Unexpected map size"));
}

#[test]
fn test_parse_error_display() {
    let err = Error::ParseError("Unknown symbol 'FOO'".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Parse error"));
    assert!(display.contains("Unknown symbol 'FOO'"));
}

#[test]
fn test_device_error_display() {
    let err = Error::DeviceError("Failed to create buffer".to_string());
    assert_eq!(format!("{}", err), "Device error: Failed to create buffer");
}

#[test]
fn test_message_strips_variant_prefix() {
    assert_eq!(Error::ParseError("abc".to_string()).message(), "abc");
    assert_eq!(Error::DeviceError("def".to_string()).message(), "def");
    assert_eq!(Error::ConfigurationError("ghi".to_string()).message(), "ghi");
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::DeviceError("x".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let debug = format!("{:?}", Error::ConfigurationError("c".to_string()));
    assert!(debug.contains("ConfigurationError"));

    let debug = format!("{:?}", Error::ParseError("p".to_string()));
    assert!(debug.contains("ParseError"));

    let debug = format!("{:?}", Error::DeviceError("d".to_string()));
    assert!(debug.contains("DeviceError"));
}

#[test]
fn test_error_clone() {
    let err1 = Error::ParseError("test".to_string());
    let err2 = err1.clone();
    assert_eq!(format!("{}", err1), format!("{}", err2));
}

// ============================================================================
// RESULT ALIAS
// ============================================================================

#[test]
fn test_result_question_mark_propagation() {
    fn inner() -> Result<u32> {
        Err(Error::ParseError("inner".to_string()))
    }
    fn outer() -> Result<u32> {
        let value = inner()?;
        Ok(value + 1)
    }

    match outer() {
        Err(Error::ParseError(msg)) => assert_eq!(msg, "inner"),
        other => panic!("unexpected result: {:?}", other),
    }
}
