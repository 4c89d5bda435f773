//! Error types raised by the collaborators the services depend on

use thiserror::Error;

/// Persistence failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A unique constraint rejected the write; `field` names the column
    #[error("Unique constraint violated on {field}")]
    UniqueViolation { field: String },

    #[error("Record not found: {resource}")]
    NotFound { resource: String },

    #[error("Storage failure: {message}")]
    Storage { message: String },
}

impl RepositoryError {
    pub fn unique_violation(field: impl Into<String>) -> Self {
        Self::UniqueViolation {
            field: field.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

/// Token signing and verification failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token generation failed: {reason}")]
    TokenGenerationFailed { reason: String },

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(error: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match error.kind() {
            ErrorKind::ExpiredSignature => Self::TokenExpired,
            _ => Self::InvalidToken,
        }
    }
}

/// Password hashing failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}
