//! Unit tests for the JWT token issuer

use serde_json::json;
use shared::config::JwtConfig;

use crate::errors::TokenError;
use crate::services::token::{ClaimSet, JwtTokenIssuer, TokenIssuer};

fn test_config() -> JwtConfig {
    JwtConfig::new("test-secret-key-for-testing-only")
}

fn member_claims() -> ClaimSet {
    let mut claims = ClaimSet::new();
    claims.insert("id".to_string(), json!("0b7f5c9e-2f4e-4d7a-9a57-3d5c1f0e8a21"));
    claims.insert("username".to_string(), json!("new_user1"));
    claims.insert("role".to_string(), json!("GUEST"));
    claims
}

fn claim_i64(claims: &ClaimSet, name: &str) -> i64 {
    claims[name].as_i64().unwrap()
}

#[test]
fn test_access_token_round_trips_claims() {
    let issuer = JwtTokenIssuer::new(test_config());
    let token = issuer.issue_access_token(&member_claims()).unwrap();

    let claims = issuer.claims_from_token(&token).unwrap();

    assert_eq!(claims["username"], "new_user1");
    assert_eq!(claims["role"], "GUEST");
    assert_eq!(claims["iss"], "theneta");
    assert!(issuer.validate_token(&token));
}

#[test]
fn test_access_token_uses_access_lifetime() {
    let issuer = JwtTokenIssuer::new(test_config().with_access_expiry_minutes(30));
    let token = issuer.issue_access_token(&member_claims()).unwrap();
    let claims = issuer.claims_from_token(&token).unwrap();

    assert_eq!(claim_i64(&claims, "exp") - claim_i64(&claims, "iat"), 1800);
    assert_eq!(issuer.access_token_expiry_seconds(), 1800);
}

#[test]
fn test_refresh_token_uses_its_own_lifetime() {
    let issuer = JwtTokenIssuer::new(test_config().with_refresh_expiry_days(14));
    let token = issuer.issue_refresh_token().unwrap();
    let claims = issuer.claims_from_token(&token).unwrap();

    assert_eq!(
        claim_i64(&claims, "exp") - claim_i64(&claims, "iat"),
        14 * 86400
    );
    assert_eq!(claims["typ"], "refresh");
    assert!(claims.get("username").is_none());
}

#[test]
fn test_tokens_are_unique() {
    let issuer = JwtTokenIssuer::new(test_config());

    let first = issuer.issue_access_token(&member_claims()).unwrap();
    let second = issuer.issue_access_token(&member_claims()).unwrap();

    assert_ne!(first, second);
}

#[test]
fn test_registered_claims_cannot_be_overridden() {
    let issuer = JwtTokenIssuer::new(test_config());
    let mut claims = member_claims();
    claims.insert("iss".to_string(), json!("someone-else"));

    let token = issuer.issue_access_token(&claims).unwrap();

    assert_eq!(issuer.claims_from_token(&token).unwrap()["iss"], "theneta");
}

#[test]
fn test_expired_token_is_rejected() {
    // Past the default 60 second leeway
    let mut config = test_config();
    config.access_token_expiry = -120;
    let issuer = JwtTokenIssuer::new(config);

    let token = issuer.issue_access_token(&member_claims()).unwrap();

    assert_eq!(issuer.claims_from_token(&token), Err(TokenError::TokenExpired));
    assert!(!issuer.validate_token(&token));
}

#[test]
fn test_token_signed_with_other_secret_is_rejected() {
    let issuer = JwtTokenIssuer::new(test_config());
    let other = JwtTokenIssuer::new(JwtConfig::new("a-completely-different-secret"));

    let token = other.issue_access_token(&member_claims()).unwrap();

    assert_eq!(issuer.claims_from_token(&token), Err(TokenError::InvalidToken));
}

#[test]
fn test_garbage_is_rejected() {
    let issuer = JwtTokenIssuer::new(test_config());
    assert_eq!(
        issuer.claims_from_token("not.a.jwt"),
        Err(TokenError::InvalidToken)
    );
}

#[test]
fn test_access_token_is_not_a_refresh_token() {
    let issuer = JwtTokenIssuer::new(test_config());
    let token = issuer.issue_access_token(&member_claims()).unwrap();

    assert_eq!(issuer.verify_access_token(&token).unwrap()["typ"], "access");
    assert_eq!(
        issuer.verify_refresh_token(&token),
        Err(TokenError::InvalidToken)
    );
}

#[test]
fn test_refresh_token_is_not_an_access_token() {
    let issuer = JwtTokenIssuer::new(test_config());
    let token = issuer.issue_refresh_token().unwrap();

    assert!(issuer.verify_refresh_token(&token).is_ok());
    assert_eq!(
        issuer.verify_access_token(&token),
        Err(TokenError::InvalidToken)
    );
    // Signature and expiry alone still hold
    assert!(issuer.validate_token(&token));
}

#[test]
fn test_caller_cannot_forge_token_type() {
    let issuer = JwtTokenIssuer::new(test_config());
    let mut claims = member_claims();
    claims.insert("typ".to_string(), json!("refresh"));

    let token = issuer.issue_access_token(&claims).unwrap();

    assert!(issuer.verify_access_token(&token).is_ok());
    assert_eq!(
        issuer.verify_refresh_token(&token),
        Err(TokenError::InvalidToken)
    );
}

#[test]
fn test_typed_verification_keeps_expiry_error() {
    let mut config = test_config();
    config.access_token_expiry = -120;
    let issuer = JwtTokenIssuer::new(config);

    let token = issuer.issue_access_token(&member_claims()).unwrap();

    assert_eq!(
        issuer.verify_access_token(&token),
        Err(TokenError::TokenExpired)
    );
}
