//! Credential repository trait for email and password credentials.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::LocalCredential;
use crate::errors::RepositoryError;

/// Repository trait for LocalCredential persistence operations
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Check whether a credential is registered for `email`
    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError>;

    /// Find the credential registered for `email`
    ///
    /// # Returns
    /// * `Ok(Some(LocalCredential))` - Credential found
    /// * `Ok(None)` - No credential for the email
    /// * `Err(RepositoryError)` - Storage error
    async fn find_by_email(&self, email: &str) -> Result<Option<LocalCredential>, RepositoryError>;

    /// Persist a new credential
    ///
    /// # Returns
    /// * `Err(RepositoryError::UniqueViolation)` - Email already registered
    async fn create(&self, credential: LocalCredential) -> Result<LocalCredential, RepositoryError>;

    /// Delete a credential, returning whether it existed
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
