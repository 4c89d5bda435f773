//! In-memory implementation of MemberRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Member;
use crate::errors::RepositoryError;

use super::r#trait::MemberRepository;

/// In-memory member repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryMemberRepository {
    members: Arc<RwLock<HashMap<Uuid, Member>>>,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored members
    pub async fn count(&self) -> usize {
        self.members.read().await.len()
    }

    /// Snapshot of every stored member
    pub async fn all(&self) -> Vec<Member> {
        self.members.read().await.values().cloned().collect()
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn exists_by_username(&self, username: &str) -> Result<bool, RepositoryError> {
        let members = self.members.read().await;
        Ok(members.values().any(|m| m.username == username))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Member>, RepositoryError> {
        let members = self.members.read().await;
        Ok(members.get(&id).cloned())
    }

    async fn create(&self, member: Member) -> Result<Member, RepositoryError> {
        let mut members = self.members.write().await;

        if members.values().any(|m| m.username == member.username) {
            return Err(RepositoryError::unique_violation("username"));
        }

        members.insert(member.id, member.clone());
        Ok(member)
    }

    async fn update(&self, member: Member) -> Result<Member, RepositoryError> {
        let mut members = self.members.write().await;

        if !members.contains_key(&member.id) {
            return Err(RepositoryError::NotFound {
                resource: "member".to_string(),
            });
        }

        if members
            .values()
            .any(|m| m.id != member.id && m.username == member.username)
        {
            return Err(RepositoryError::unique_violation("username"));
        }

        members.insert(member.id, member.clone());
        Ok(member)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let mut members = self.members.write().await;
        Ok(members.remove(&id).is_some())
    }
}
