//! Repository traits for the persistence the services depend on, with
//! in-memory implementations for tests and local wiring.

pub mod credential;
pub mod member;
pub mod profile;

pub use credential::CredentialRepository;
pub use member::MemberRepository;
pub use profile::ProfileRepository;

/// In-memory repositories backed by `tokio::sync::RwLock`
pub mod memory {
    pub use super::credential::InMemoryCredentialRepository;
    pub use super::member::InMemoryMemberRepository;
    pub use super::profile::InMemoryProfileRepository;
}
