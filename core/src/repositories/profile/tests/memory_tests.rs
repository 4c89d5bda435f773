//! Unit tests for the in-memory profile repository

use uuid::Uuid;

use crate::domain::entities::Profile;
use crate::errors::RepositoryError;
use crate::repositories::profile::{InMemoryProfileRepository, ProfileRepository};

#[tokio::test]
async fn test_create_and_find_by_member() {
    let repo = InMemoryProfileRepository::new();
    let member_id = Uuid::new_v4();

    repo.create(Profile::new(member_id, "Alice")).await.unwrap();

    let found = repo.find_by_member_id(member_id).await.unwrap().unwrap();
    assert_eq!(found.name, "Alice");
    assert!(repo.exists_by_name("Alice").await.unwrap());
    assert!(!repo.exists_by_name("Bob").await.unwrap());
}

#[tokio::test]
async fn test_duplicate_name_is_unique_violation() {
    let repo = InMemoryProfileRepository::new();
    repo.create(Profile::new(Uuid::new_v4(), "Alice")).await.unwrap();

    let result = repo.create(Profile::new(Uuid::new_v4(), "Alice")).await;

    assert_eq!(result, Err(RepositoryError::unique_violation("name")));
    assert_eq!(repo.count().await, 1);
}

#[tokio::test]
async fn test_delete() {
    let repo = InMemoryProfileRepository::new();
    let profile = repo.create(Profile::new(Uuid::new_v4(), "Alice")).await.unwrap();

    assert!(repo.delete(profile.id).await.unwrap());
    assert_eq!(repo.count().await, 0);
}
