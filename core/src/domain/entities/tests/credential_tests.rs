//! Unit tests for the local credential entity

use uuid::Uuid;

use crate::domain::entities::LocalCredential;

#[test]
fn test_debug_hides_hash_and_email() {
    let credential = LocalCredential::new(Uuid::new_v4(), "alice@example.com", "$2b$04$secret");
    let debug = format!("{:?}", credential);

    assert!(debug.contains("a***@example.com"));
    assert!(!debug.contains("alice@example.com"));
    assert!(!debug.contains("$2b$04$secret"));
}

#[test]
fn test_serialization_skips_password_hash() {
    let credential = LocalCredential::new(Uuid::new_v4(), "alice@example.com", "$2b$04$secret");
    let json = serde_json::to_value(&credential).unwrap();

    assert_eq!(json["email"], "alice@example.com");
    assert!(json.get("password_hash").is_none());
}
