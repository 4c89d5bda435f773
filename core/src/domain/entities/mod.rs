//! Domain entities representing core business objects.

pub mod credential;
pub mod member;
pub mod profile;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use credential::LocalCredential;
pub use member::{Member, Role};
pub use profile::Profile;
