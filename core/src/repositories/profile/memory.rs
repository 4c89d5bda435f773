//! In-memory implementation of ProfileRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Profile;
use crate::errors::RepositoryError;

use super::r#trait::ProfileRepository;

/// In-memory profile repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<Uuid, Profile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn all(&self) -> Vec<Profile> {
        self.profiles.read().await.values().cloned().collect()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn exists_by_name(&self, name: &str) -> Result<bool, RepositoryError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.values().any(|p| p.name == name))
    }

    async fn find_by_member_id(&self, member_id: Uuid) -> Result<Option<Profile>, RepositoryError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.values().find(|p| p.member_id == member_id).cloned())
    }

    async fn create(&self, profile: Profile) -> Result<Profile, RepositoryError> {
        let mut profiles = self.profiles.write().await;

        if profiles.values().any(|p| p.name == profile.name) {
            return Err(RepositoryError::unique_violation("name"));
        }
        if profiles.values().any(|p| p.member_id == profile.member_id) {
            return Err(RepositoryError::unique_violation("member_id"));
        }

        profiles.insert(profile.id, profile.clone());
        Ok(profile)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let mut profiles = self.profiles.write().await;
        Ok(profiles.remove(&id).is_some())
    }
}
