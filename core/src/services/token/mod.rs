//! Token module for JWT issuing
//!
//! This module handles:
//! - Access token signing over an arbitrary claim set
//! - Refresh token signing with its own lifetime
//! - Reading claims back out of a token and validating it

mod issuer;
mod jwt;

#[cfg(test)]
mod tests;

pub use issuer::{
    ClaimSet, TokenIssuer, ACCESS_TOKEN_TYPE, REFRESH_TOKEN_TYPE, TOKEN_TYPE_CLAIM,
};
pub use jwt::JwtTokenIssuer;
