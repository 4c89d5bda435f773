//! Local credential repository module.

mod r#trait;
pub use r#trait::CredentialRepository;

mod memory;
pub use memory::InMemoryCredentialRepository;
