//! Password hashing module
//!
//! Passwords are only ever stored as bcrypt hashes. The service layer works
//! against the [`PasswordHasher`] trait so tests can swap in a cheap hasher.

mod hasher;


pub use hasher::{BcryptPasswordHasher, PasswordHasher};
