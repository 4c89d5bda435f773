//! HS256 JWT implementation of the token issuer

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::Value;
use shared::config::JwtConfig;
use uuid::Uuid;

use crate::errors::TokenError;

use super::issuer::{
    ClaimSet, TokenIssuer, ACCESS_TOKEN_TYPE, REFRESH_TOKEN_TYPE, TOKEN_TYPE_CLAIM,
};

/// Issues and verifies HS256-signed JWTs
pub struct JwtTokenIssuer {
    config: JwtConfig,
    header: Header,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenIssuer {
    /// Creates a new issuer signing with `config.secret`
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.validate_exp = true;

        Self {
            config,
            header: Header::new(Algorithm::HS256),
            encoding_key,
            decoding_key,
            validation,
        }
    }

    pub fn refresh_token_expiry_seconds(&self) -> i64 {
        self.config.refresh_token_expiry
    }

    /// Adds the registered claims and signs
    ///
    /// Registered claims (`iat`, `exp`, `iss`, `jti`, `typ`) always overwrite
    /// any caller-supplied value under the same name.
    fn sign(
        &self,
        mut claims: ClaimSet,
        token_type: &str,
        lifetime_seconds: i64,
    ) -> Result<String, TokenError> {
        let issued_at = Utc::now().timestamp();

        claims.insert(TOKEN_TYPE_CLAIM.to_string(), Value::from(token_type));
        claims.insert("iat".to_string(), Value::from(issued_at));
        claims.insert("exp".to_string(), Value::from(issued_at + lifetime_seconds));
        claims.insert("iss".to_string(), Value::from(self.config.issuer.clone()));
        claims.insert("jti".to_string(), Value::from(Uuid::new_v4().to_string()));

        encode(&self.header, &claims, &self.encoding_key).map_err(|e| {
            TokenError::TokenGenerationFailed {
                reason: e.to_string(),
            }
        })
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue_access_token(&self, claims: &ClaimSet) -> Result<String, TokenError> {
        self.sign(
            claims.clone(),
            ACCESS_TOKEN_TYPE,
            self.config.access_token_expiry,
        )
    }

    fn issue_refresh_token(&self) -> Result<String, TokenError> {
        self.sign(
            ClaimSet::new(),
            REFRESH_TOKEN_TYPE,
            self.config.refresh_token_expiry,
        )
    }

    fn access_token_expiry_seconds(&self) -> i64 {
        self.config.access_token_expiry
    }

    fn claims_from_token(&self, token: &str) -> Result<ClaimSet, TokenError> {
        let data = decode::<ClaimSet>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}
