//! Integration tests for the signup and login flow through the public API

use std::sync::Arc;

use neta_core::repositories::memory::{
    InMemoryCredentialRepository, InMemoryMemberRepository, InMemoryProfileRepository,
};
use neta_core::{
    AuthService, BcryptPasswordHasher, ErrorKind, JwtTokenIssuer, LoginRequest, SignupRequest,
    TokenIssuer,
};
use shared::config::{AppConfig, JwtConfig, PasswordConfig};
use shared::either::Either;

type Service = AuthService<
    InMemoryMemberRepository,
    InMemoryCredentialRepository,
    InMemoryProfileRepository,
    BcryptPasswordHasher,
    JwtTokenIssuer,
>;

fn build_service(jwt: JwtConfig) -> (Service, Arc<JwtTokenIssuer>) {
    let issuer = Arc::new(JwtTokenIssuer::new(jwt));
    let service = AuthService::new(
        Arc::new(InMemoryMemberRepository::new()),
        Arc::new(InMemoryCredentialRepository::new()),
        Arc::new(InMemoryProfileRepository::new()),
        Arc::new(BcryptPasswordHasher::new(&PasswordConfig { bcrypt_cost: 4 })),
        Arc::clone(&issuer),
    );
    (service, issuer)
}

fn signup(email: &str, username: &str, name: &str) -> SignupRequest {
    SignupRequest::new(email, "passw0rd!", username, name)
}

#[tokio::test]
async fn test_validated_signup_then_login() {
    let (service, issuer) = build_service(JwtConfig::new("integration-secret"));

    let request = signup("new@example.com", "new_user1", "Alice")
        .validate()
        .into_right()
        .expect("request should be valid")
        .into_inner();

    assert_eq!(service.signup(&request).await, Either::right(()));

    let tokens = service
        .login(&LoginRequest::new("new@example.com", "passw0rd!"))
        .await
        .into_right()
        .expect("login should succeed");

    assert_eq!(tokens.token_type, "Bearer");
    assert_eq!(tokens.expires_in_seconds, issuer.access_token_expiry_seconds());
    assert!(issuer.verify_access_token(&tokens.access_token).is_ok());
    assert!(issuer.verify_refresh_token(&tokens.refresh_token).is_ok());
    // Each token is only good for its own purpose
    assert!(issuer.verify_access_token(&tokens.refresh_token).is_err());
    assert!(issuer.verify_refresh_token(&tokens.access_token).is_err());
    assert_eq!(
        service
            .resolve_claims(&tokens.refresh_token)
            .into_left()
            .map(|error| error.kind()),
        Some(ErrorKind::InvalidCredentials)
    );
}

#[tokio::test]
async fn test_expires_in_follows_configured_access_lifetime() {
    let jwt = JwtConfig::new("integration-secret").with_access_expiry_minutes(60);
    let (service, _) = build_service(jwt);

    service
        .signup(&signup("new@example.com", "new_user1", "Alice"))
        .await;
    let tokens = service
        .login(&LoginRequest::new("new@example.com", "passw0rd!"))
        .await
        .into_right()
        .unwrap();

    assert_eq!(tokens.expires_in_seconds, 3600);
}

#[tokio::test]
async fn test_members_do_not_collide() {
    let (service, _) = build_service(JwtConfig::new("integration-secret"));

    assert!(service
        .signup(&signup("a@example.com", "user_aaaa", "Alice"))
        .await
        .is_right());
    assert!(service
        .signup(&signup("b@example.com", "user_bbbb", "Bob"))
        .await
        .is_right());

    let conflict = service
        .signup(&signup("c@example.com", "user_aaaa", "Carol"))
        .await
        .fold(|error| error, |_| panic!("username should be taken"));

    assert_eq!(conflict.kind(), ErrorKind::Conflict);
    assert_eq!(conflict.target(), Some("username"));
    assert_eq!(conflict.code(), "E409");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let (service, _) = build_service(JwtConfig::new("integration-secret"));
    service
        .signup(&signup("new@example.com", "new_user1", "Alice"))
        .await;

    let unknown = service
        .login(&LoginRequest::new("ghost@example.com", "passw0rd!"))
        .await;
    let wrong = service
        .login(&LoginRequest::new("new@example.com", "passw0rd?1"))
        .await;

    assert_eq!(unknown, wrong);
    assert_eq!(
        unknown.into_left().map(|error| error.code()),
        Some("E401")
    );
}

#[tokio::test]
async fn test_default_config_wires_service() {
    let config = AppConfig::default();
    let (service, issuer) = build_service(config.auth.jwt.clone());

    assert_eq!(issuer.access_token_expiry_seconds(), 900);
    assert!(service
        .check_availability(&signup("new@example.com", "new_user1", "Alice"))
        .await
        .is_right());
}
