//! Unit tests for domain error types

use crate::errors::{DomainError, ErrorKind, PasswordError, RepositoryError, TokenError};

#[test]
fn test_conflict_carries_field_as_target() {
    let error = DomainError::conflict("email");

    assert_eq!(error.kind(), ErrorKind::Conflict);
    assert_eq!(error.target(), Some("email"));
    assert_eq!(error.code(), "E409");
    assert!(error.is_conflict_on("email"));
    assert!(!error.is_conflict_on("username"));
}

#[test]
fn test_invalid_credentials_has_no_target() {
    let error = DomainError::invalid_credentials();

    assert_eq!(error.kind(), ErrorKind::InvalidCredentials);
    assert_eq!(error.target(), None);
    assert_eq!(error.code(), "E401");
    assert_eq!(error, DomainError::invalid_credentials());
}

#[test]
fn test_validation_failed_keeps_reason() {
    let error = DomainError::validation_failed("username", "Username format is invalid");

    assert_eq!(error.kind(), ErrorKind::ValidationFailed);
    assert_eq!(error.target(), Some("username"));
    assert_eq!(error.message(), "Username format is invalid");
    assert_eq!(error.code(), "E400");
}

#[test]
fn test_error_codes_are_stable() {
    assert_eq!(ErrorKind::NotFound.code(), "E404");
    assert_eq!(ErrorKind::Internal.code(), "E500");
}

#[test]
fn test_display_includes_kind_and_message() {
    let error = DomainError::not_found("member");
    assert_eq!(error.to_string(), "NOT_FOUND: member not found");
}

#[test]
fn test_unique_violation_becomes_conflict() {
    let error: DomainError = RepositoryError::unique_violation("name").into();
    assert!(error.is_conflict_on("name"));
}

#[test]
fn test_storage_failure_becomes_internal() {
    let error: DomainError = RepositoryError::storage("connection reset").into();

    assert_eq!(error.kind(), ErrorKind::Internal);
    assert!(error.message().contains("connection reset"));
}

#[test]
fn test_token_errors_conversion() {
    let expired: DomainError = TokenError::TokenExpired.into();
    assert_eq!(expired.kind(), ErrorKind::InvalidCredentials);

    let failed: DomainError = TokenError::TokenGenerationFailed {
        reason: "bad key".to_string(),
    }
    .into();
    assert_eq!(failed.kind(), ErrorKind::Internal);
}

#[test]
fn test_password_error_becomes_internal() {
    let error: DomainError = PasswordError::Hashing("cost out of range".to_string()).into();
    assert_eq!(error.kind(), ErrorKind::Internal);
}

#[test]
fn test_serializes_kind_in_screaming_case() {
    let json = serde_json::to_value(DomainError::conflict("email")).unwrap();

    assert_eq!(json["kind"], "CONFLICT");
    assert_eq!(json["target"], "email");
}
