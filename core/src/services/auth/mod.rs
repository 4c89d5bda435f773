//! Authentication service module
//!
//! This module provides the member registration and login flow:
//! - Ordered uniqueness checks (email, username, display name)
//! - Member, credential and profile creation with rollback on failure
//! - Credential lookup and password verification
//! - Token pair issuing
//! - Email verification

mod selectors;
mod service;

#[cfg(test)]
mod tests;

pub use selectors::{CredentialSelector, UniqueField};
pub use service::AuthService;
