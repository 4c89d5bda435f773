//! Member repository trait defining the interface for member persistence.
//!
//! The trait is async-first. Implementations report a rejected unique
//! username as [`RepositoryError::UniqueViolation`] so the service can turn
//! a lost check-then-create race into a conflict.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Member;
use crate::errors::RepositoryError;

/// Repository trait for Member entity persistence operations
///
/// # Example
/// ```no_run
/// # use neta_core::repositories::MemberRepository;
/// # use neta_core::domain::entities::Member;
/// # async fn example(repo: &impl MemberRepository) -> Result<(), Box<dyn std::error::Error>> {
/// if !repo.exists_by_username("new_user1").await? {
///     let member = repo.create(Member::new("new_user1")).await?;
///     println!("Created member {}", member.id);
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Check whether a member already uses `username`
    async fn exists_by_username(&self, username: &str) -> Result<bool, RepositoryError>;

    /// Find a member by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Member))` - Member found
    /// * `Ok(None)` - No member with the given ID
    /// * `Err(RepositoryError)` - Storage error
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Member>, RepositoryError>;

    /// Persist a new member
    ///
    /// # Returns
    /// * `Ok(Member)` - The stored member
    /// * `Err(RepositoryError::UniqueViolation)` - Username already taken
    async fn create(&self, member: Member) -> Result<Member, RepositoryError>;

    /// Replace a stored member
    async fn update(&self, member: Member) -> Result<Member, RepositoryError>;

    /// Delete a member, returning whether it existed
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
