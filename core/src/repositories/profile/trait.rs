//! Profile repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Profile;
use crate::errors::RepositoryError;

/// Repository trait for Profile persistence operations
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Check whether a profile already uses the display name `name`
    async fn exists_by_name(&self, name: &str) -> Result<bool, RepositoryError>;

    async fn find_by_member_id(&self, member_id: Uuid) -> Result<Option<Profile>, RepositoryError>;

    /// Persist a new profile
    ///
    /// # Returns
    /// * `Err(RepositoryError::UniqueViolation)` - Display name already taken
    async fn create(&self, profile: Profile) -> Result<Profile, RepositoryError>;

    /// Delete a profile, returning whether it existed
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
