//! Signup and login request value objects with structural validation.
//!
//! Validation reports every failing field at once (`all_failures`), while
//! the rules for a single field stop at the first one that fails
//! (`first_failure`), so a blank email is reported as missing rather than
//! also as malformed.

use std::fmt;

use serde::Deserialize;
use shared::either::{Either, EitherIteratorExt, NonEmptyVec};
use shared::validation::validators;

use crate::errors::DomainError;

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 30;

/// Registration request
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub username: String,
    /// Display name, stored on the profile
    pub name: String,
}

impl SignupRequest {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        username: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            username: username.into(),
            name: name.into(),
        }
    }

    /// Checks every field, reporting all offending fields in field order
    pub fn validate(self) -> Either<NonEmptyVec<DomainError>, ValidatedSignup> {
        let fields = [
            email_rules(&self.email),
            password_rules(&self.password),
            username_rules(&self.username),
            name_rules(&self.name),
        ];

        fields
            .into_iter()
            .collect_all_failures()
            .map(|_| ValidatedSignup(self))
    }
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("email", &shared::mask_email(&self.email))
            .field("password", &"[REDACTED]")
            .field("username", &self.username)
            .field("name", &self.name)
            .finish()
    }
}

/// A signup request whose fields passed structural validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSignup(SignupRequest);

impl ValidatedSignup {
    pub fn into_inner(self) -> SignupRequest {
        self.0
    }
}

impl std::ops::Deref for ValidatedSignup {
    type Target = SignupRequest;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Login request
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields must be present; their format is not checked so that a
    /// malformed email is reported as invalid credentials by login itself
    pub fn validate(self) -> Either<NonEmptyVec<DomainError>, LoginRequest> {
        let fields = [
            rule(
                validators::not_blank(&self.email),
                "email",
                "Email is required",
            ),
            rule(
                validators::not_blank(&self.password),
                "password",
                "Password is required",
            ),
        ];

        fields
            .into_iter()
            .collect_all_failures()
            .map(|_| self)
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &shared::mask_email(&self.email))
            .field("password", &"[REDACTED]")
            .finish()
    }
}

fn rule(passed: bool, field: &str, reason: &str) -> Either<DomainError, ()> {
    if passed {
        Either::right(())
    } else {
        Either::left(DomainError::validation_failed(field, reason))
    }
}

/// First failing rule of a single field
fn field_rules<const N: usize>(rules: [Either<DomainError, ()>; N]) -> Either<DomainError, ()> {
    rules.into_iter().collect_first_failure().map(|_| ())
}

fn email_rules(email: &str) -> Either<DomainError, ()> {
    field_rules([
        rule(validators::not_blank(email), "email", "Email is required"),
        rule(
            validators::is_valid_email(email),
            "email",
            "Email format is invalid",
        ),
    ])
}

fn password_rules(password: &str) -> Either<DomainError, ()> {
    field_rules([
        rule(
            validators::not_blank(password),
            "password",
            "Password is required",
        ),
        rule(
            validators::is_strong_password(password),
            "password",
            "Password must be at least 8 characters and contain a letter, a digit and one of @$!%*#?&",
        ),
    ])
}

fn username_rules(username: &str) -> Either<DomainError, ()> {
    field_rules([
        rule(
            validators::not_blank(username),
            "username",
            "Username is required",
        ),
        rule(
            validators::is_valid_username(username),
            "username",
            "Username must be 4 to 20 lowercase letters, digits or underscores",
        ),
    ])
}

fn name_rules(name: &str) -> Either<DomainError, ()> {
    field_rules([
        rule(validators::not_blank(name), "name", "Name is required"),
        rule(
            validators::length_between(name, NAME_MIN_CHARS, NAME_MAX_CHARS),
            "name",
            "Name must be between 2 and 30 characters",
        ),
    ])
}
