//! # Theneta Core
//!
//! Core business logic and domain layer for Theneta member services.
//! This crate contains domain entities, value objects, repository interfaces
//! with in-memory implementations, and the services for signup, login and
//! token issuing. Business outcomes are reported as `Either` values.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{LocalCredential, Member, Profile, Role};
pub use domain::value_objects::{LoginRequest, SignupRequest, TokenPair, ValidatedSignup};
pub use errors::{
    DomainError, DomainResult, ErrorKind, PasswordError, RepositoryError, TokenError,
};
pub use repositories::{CredentialRepository, MemberRepository, ProfileRepository};
pub use services::{
    AuthService, BcryptPasswordHasher, ClaimSet, CredentialSelector, JwtTokenIssuer,
    PasswordHasher, TokenIssuer,
};
