//! Token issuer trait

use serde_json::{Map, Value};

use crate::errors::TokenError;

/// Claims carried by a token, as a JSON object
pub type ClaimSet = Map<String, Value>;

/// Claim recording what a token may be used for
pub const TOKEN_TYPE_CLAIM: &str = "typ";
pub const ACCESS_TOKEN_TYPE: &str = "access";
pub const REFRESH_TOKEN_TYPE: &str = "refresh";

/// Signs and verifies opaque claim sets
pub trait TokenIssuer: Send + Sync {
    /// Sign `claims` into an access token
    fn issue_access_token(&self, claims: &ClaimSet) -> Result<String, TokenError>;

    /// Sign a refresh token carrying no business claims
    fn issue_refresh_token(&self) -> Result<String, TokenError>;

    /// Lifetime of access tokens, reported to clients as `expires_in`
    fn access_token_expiry_seconds(&self) -> i64;

    /// Verify signature, issuer and expiry of `token` and return its claims,
    /// whatever its type
    fn claims_from_token(&self, token: &str) -> Result<ClaimSet, TokenError>;

    /// Signature, issuer and expiry are valid; says nothing about the type
    fn validate_token(&self, token: &str) -> bool {
        self.claims_from_token(token).is_ok()
    }

    /// Claims of a valid access token; any other token is `InvalidToken`
    fn verify_access_token(&self, token: &str) -> Result<ClaimSet, TokenError> {
        verify_typed(self.claims_from_token(token)?, ACCESS_TOKEN_TYPE)
    }

    /// Claims of a valid refresh token; any other token is `InvalidToken`
    fn verify_refresh_token(&self, token: &str) -> Result<ClaimSet, TokenError> {
        verify_typed(self.claims_from_token(token)?, REFRESH_TOKEN_TYPE)
    }
}

fn verify_typed(claims: ClaimSet, expected: &str) -> Result<ClaimSet, TokenError> {
    match claims.get(TOKEN_TYPE_CLAIM).and_then(Value::as_str) {
        Some(token_type) if token_type == expected => Ok(claims),
        _ => Err(TokenError::InvalidToken),
    }
}
