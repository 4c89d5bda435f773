//! In-memory implementation of CredentialRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::LocalCredential;
use crate::errors::RepositoryError;

use super::r#trait::CredentialRepository;

/// In-memory credential repository, keyed by credential id
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialRepository {
    credentials: Arc<RwLock<HashMap<Uuid, LocalCredential>>>,
}

impl InMemoryCredentialRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.credentials.read().await.len()
    }

    pub async fn all(&self) -> Vec<LocalCredential> {
        self.credentials.read().await.values().cloned().collect()
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError> {
        let credentials = self.credentials.read().await;
        Ok(credentials.values().any(|c| c.email == email))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<LocalCredential>, RepositoryError> {
        let credentials = self.credentials.read().await;
        Ok(credentials.values().find(|c| c.email == email).cloned())
    }

    async fn create(&self, credential: LocalCredential) -> Result<LocalCredential, RepositoryError> {
        let mut credentials = self.credentials.write().await;

        if credentials.values().any(|c| c.email == credential.email) {
            return Err(RepositoryError::unique_violation("email"));
        }
        // One credential per member
        if credentials
            .values()
            .any(|c| c.member_id == credential.member_id)
        {
            return Err(RepositoryError::unique_violation("member_id"));
        }

        credentials.insert(credential.id, credential.clone());
        Ok(credential)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let mut credentials = self.credentials.write().await;
        Ok(credentials.remove(&id).is_some())
    }
}
