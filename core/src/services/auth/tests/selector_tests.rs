//! Unit tests for the credential selector

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::LocalCredential;
use crate::errors::ErrorKind;
use crate::repositories::memory::InMemoryCredentialRepository;
use crate::repositories::CredentialRepository;
use crate::services::auth::{CredentialSelector, UniqueField};

#[tokio::test]
async fn test_select_registered_email() {
    let repository = Arc::new(InMemoryCredentialRepository::new());
    let member_id = Uuid::new_v4();
    repository
        .create(LocalCredential::new(member_id, "alice@example.com", "hash"))
        .await
        .unwrap();
    let selector = CredentialSelector::new(repository);

    let credential = selector
        .select_by_email("alice@example.com")
        .await
        .into_right()
        .unwrap();

    assert_eq!(credential.member_id, member_id);
}

#[tokio::test]
async fn test_select_unknown_email_is_not_found() {
    let selector = CredentialSelector::new(Arc::new(InMemoryCredentialRepository::new()));

    let error = selector
        .select_by_email("nobody@example.com")
        .await
        .into_left()
        .unwrap();

    assert_eq!(error.kind(), ErrorKind::NotFound);
}

#[test]
fn test_signup_order() {
    let names: Vec<_> = UniqueField::SIGNUP_ORDER.iter().map(|f| f.as_str()).collect();
    assert_eq!(names, vec!["email", "username", "name"]);
}
