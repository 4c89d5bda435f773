//! Domain-specific error types and error handling.
//!
//! Business failures travel as [`DomainError`] values on the `Left` side of
//! an `Either`. Collaborator failures have their own types and are converted
//! into a `DomainError` at the service boundary.

mod types;

#[cfg(test)]
mod tests;

pub use types::{PasswordError, RepositoryError, TokenError};

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Category of a business-rule violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// A unique value (email, username, name) is already taken
    Conflict,
    /// Unknown identifier or wrong secret; the two are indistinguishable
    InvalidCredentials,
    /// A referenced record does not exist
    NotFound,
    /// A request field failed structural validation
    ValidationFailed,
    /// A collaborator failed for reasons outside the business rules
    Internal,
}

impl ErrorKind {
    /// Stable machine-readable code
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Conflict => "E409",
            Self::InvalidCredentials => "E401",
            Self::NotFound => "E404",
            Self::ValidationFailed => "E400",
            Self::Internal => "E500",
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Conflict => "CONFLICT",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::NotFound => "NOT_FOUND",
            Self::ValidationFailed => "VALIDATION_FAILED",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A business-rule violation: what went wrong, on which field, and why
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{kind}: {message}")]
pub struct DomainError {
    kind: ErrorKind,
    target: Option<String>,
    message: String,
}

impl DomainError {
    pub fn new(kind: ErrorKind, target: Option<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            target,
            message: message.into(),
        }
    }

    /// `field` already holds the submitted value
    pub fn conflict(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("Duplicate {} already exists", field);
        Self::new(ErrorKind::Conflict, Some(field), message)
    }

    /// Generic login failure; never says which half was wrong
    pub fn invalid_credentials() -> Self {
        Self::new(
            ErrorKind::InvalidCredentials,
            None,
            "Invalid email or password",
        )
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        let resource = resource.into();
        let message = format!("{} not found", resource);
        Self::new(ErrorKind::NotFound, Some(resource), message)
    }

    pub fn validation_failed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::ValidationFailed, Some(field.into()), reason)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, None, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The offending field or resource, when there is one
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn is_conflict_on(&self, field: &str) -> bool {
        self.kind == ErrorKind::Conflict && self.target() == Some(field)
    }
}

impl From<RepositoryError> for DomainError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::UniqueViolation { field } => Self::conflict(field),
            other => Self::internal(other.to_string()),
        }
    }
}

impl From<TokenError> for DomainError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::TokenExpired | TokenError::InvalidToken => Self::invalid_credentials(),
            TokenError::TokenGenerationFailed { .. } => Self::internal(error.to_string()),
        }
    }
}

impl From<PasswordError> for DomainError {
    fn from(error: PasswordError) -> Self {
        Self::internal(error.to_string())
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
