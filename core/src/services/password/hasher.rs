//! Password hasher trait and its bcrypt implementation

use shared::config::PasswordConfig;

use crate::errors::PasswordError;

/// One-way password hashing
pub trait PasswordHasher: Send + Sync {
    /// Hash `plain` for storage
    fn hash(&self, plain: &str) -> Result<String, PasswordError>;

    /// Check `plain` against a stored hash
    ///
    /// # Returns
    /// * `Ok(true)` - Password matches
    /// * `Ok(false)` - Password does not match
    /// * `Err(PasswordError)` - The stored hash could not be read
    fn verify(&self, plain: &str, hashed: &str) -> Result<bool, PasswordError>;
}

/// bcrypt-backed password hasher
#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(config: &PasswordConfig) -> Self {
        Self {
            cost: config.bcrypt_cost,
        }
    }

    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::with_cost(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plain: &str) -> Result<String, PasswordError> {
        bcrypt::hash(plain, self.cost).map_err(|e| PasswordError::Hashing(e.to_string()))
    }

    fn verify(&self, plain: &str, hashed: &str) -> Result<bool, PasswordError> {
        bcrypt::verify(plain, hashed).map_err(|e| PasswordError::MalformedHash(e.to_string()))
    }
}
