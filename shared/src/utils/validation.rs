//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
        .unwrap()
});

static USERNAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9_]{4,20}$").unwrap());

/// Special characters a password may contain (and must contain one of)
pub const PASSWORD_SPECIALS: &str = "@$!%*#?&";

/// Common validation functions
pub mod validators {
    use super::{EMAIL_PATTERN, PASSWORD_SPECIALS, USERNAME_PATTERN};

    /// Check if a string is not blank
    pub fn not_blank(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string's character count is within bounds
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.chars().count();
        len >= min && len <= max
    }

    /// Check if a string matches a pattern
    pub fn matches_pattern(value: &str, pattern: &regex::Regex) -> bool {
        pattern.is_match(value)
    }

    /// Check if an email address has the `local@domain.tld` shape
    pub fn is_valid_email(email: &str) -> bool {
        matches_pattern(email, &EMAIL_PATTERN)
    }

    /// Lowercase letters, digits and underscores, 4 to 20 characters
    pub fn is_valid_username(username: &str) -> bool {
        matches_pattern(username, &USERNAME_PATTERN)
    }

    /// At least 8 characters drawn from letters, digits and
    /// [`PASSWORD_SPECIALS`](super::PASSWORD_SPECIALS), with at least one of each
    pub fn is_strong_password(password: &str) -> bool {
        let allowed = |c: char| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(c);

        password.chars().count() >= 8
            && password.chars().all(allowed)
            && password.chars().any(|c| c.is_ascii_alphabetic())
            && password.chars().any(|c| c.is_ascii_digit())
            && password.chars().any(|c| PASSWORD_SPECIALS.contains(c))
    }
}

/// Mask an email for logging: `alice@example.com` becomes `a***@example.com`
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}
