//! Shared utilities and common types for Theneta member services
//!
//! This crate provides functionality with no business knowledge, used by the
//! core crate and by whatever transport layer wires it up:
//! - The `Either` result type and its aggregation collectors
//! - Configuration types
//! - Logging bootstrap
//! - Validation helpers

pub mod config;
pub mod either;
pub mod telemetry;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, Environment, JwtConfig, LogFormat, LoggingConfig,
    PasswordConfig,
};
pub use either::{Either, EitherCollector, EitherIteratorExt, NonEmptyVec};
pub use utils::{mask_email, validation};
