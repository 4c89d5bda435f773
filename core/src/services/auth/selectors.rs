//! Lookups lifted into `Either` for the orchestration code

use std::sync::Arc;

use shared::either::Either;
use shared::mask_email;

use crate::domain::entities::LocalCredential;
use crate::errors::DomainError;
use crate::repositories::CredentialRepository;

/// A value that must be unique across members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniqueField {
    Email,
    Username,
    /// Profile display name
    Name,
}

impl UniqueField {
    /// Order in which signup checks the fields
    pub const SIGNUP_ORDER: [UniqueField; 3] = [Self::Email, Self::Username, Self::Name];

    /// Name reported as the conflict target
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Username => "username",
            Self::Name => "name",
        }
    }
}

/// Finds local credentials, reporting absence as `Left(NotFound)`
pub struct CredentialSelector<C: CredentialRepository> {
    repository: Arc<C>,
}

impl<C: CredentialRepository> CredentialSelector<C> {
    pub fn new(repository: Arc<C>) -> Self {
        Self { repository }
    }

    pub async fn select_by_email(&self, email: &str) -> Either<DomainError, LocalCredential> {
        match self.repository.find_by_email(email).await {
            Ok(Some(credential)) => Either::right(credential),
            Ok(None) => Either::left(DomainError::not_found("credential")),
            Err(e) => {
                tracing::error!(
                    email = %mask_email(email),
                    error = %e,
                    event = "credential_lookup_failed",
                    "Failed to look up credential"
                );
                Either::left(DomainError::internal(format!(
                    "Failed to look up credential: {}",
                    e
                )))
            }
        }
    }
}
