//! Value objects representing immutable domain concepts.

pub mod requests;
pub mod token_pair;


// Re-export commonly used types
pub use requests::{LoginRequest, SignupRequest, ValidatedSignup};
pub use token_pair::{TokenPair, BEARER};
