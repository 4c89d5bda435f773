//! Token pair returned by a successful login

use serde::{Deserialize, Serialize};

/// Token type reported alongside every issued pair
pub const BEARER: &str = "Bearer";

/// Access and refresh tokens with the access token's lifetime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// Access token lifetime in seconds
    #[serde(rename = "expiresIn")]
    pub expires_in_seconds: i64,
}

impl TokenPair {
    pub fn bearer(access_token: String, refresh_token: String, expires_in_seconds: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: BEARER.to_string(),
            expires_in_seconds,
        }
    }
}
