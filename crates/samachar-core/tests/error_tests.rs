// Rust guideline compliant 2026-10-14

//! Unit tests for error types and messages.
//!
//! These tests validate error formatting, status mapping and the codes
//! used in machine-readable output.

use samachar_core::{Error, ErrorCode};

#[test]
fn test_io_error_formatting() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = Error::Io(io_err);
    assert!(error.to_string().contains("IO error"));
    assert_eq!(error.code(), ErrorCode::IoError);
}

#[test]
fn test_json_error_formatting() {
    let json_err = serde_json::from_str::<serde_json::Value>("invalid json")
        .expect_err("Should fail to parse invalid JSON");
    let error = Error::Json(json_err);
    assert!(error.to_string().contains("JSON error"));
    assert_eq!(error.code(), ErrorCode::JsonError);
}

#[test]
fn test_invalid_transition_formatting() {
    let error = Error::InvalidTransition("Cannot verify a pending post".to_string());
    assert_eq!(
        error.to_string(),
        "Invalid transition: Cannot verify a pending post"
    );
}

#[test]
fn test_stale_response_formatting() {
    let error = Error::StaleResponse { page: 3 };
    assert_eq!(error.to_string(), "Stale response for page 3");
    assert!(error.is_silent());
    assert!(!error.is_retryable());
}

#[test]
fn test_status_mapping() {
    assert!(matches!(Error::from_status(404, "missing"), Error::NotFound(m) if m == "missing"));
    assert!(matches!(Error::from_status(422, "bad title"), Error::Validation(m) if m == "422: bad title"));
    assert!(matches!(Error::from_status(503, "unavailable"), Error::Transport(_)));
    assert!(matches!(Error::from_status(302, "moved"), Error::Transport(_)));
}

#[test]
fn test_only_transport_is_retryable() {
    assert!(Error::Transport("timeout".to_string()).is_retryable());
    assert!(!Error::Validation("400: bad".to_string()).is_retryable());
    assert!(!Error::InvalidTransition("no".to_string()).is_retryable());
    assert!(!Error::NotFound("p1".to_string()).is_silent());
}

#[test]
fn test_error_code_serialization() {
    let json = serde_json::to_string(&ErrorCode::InvalidTransition).unwrap();
    assert_eq!(json, "\"invalid_transition\"");
    let json = serde_json::to_string(&Error::Transport("x".to_string()).code()).unwrap();
    assert_eq!(json, "\"transport_error\"");
}
