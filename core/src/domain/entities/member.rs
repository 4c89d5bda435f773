//! Member entity representing a registered account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authorization level of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Signed up, email not yet verified
    Guest,
    /// Email verified
    Member,
}

impl Role {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Guest => "GUEST",
            Self::Member => "MEMBER",
        }
    }
}

/// Member entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier for the member
    pub id: Uuid,

    /// Unique handle, lowercase letters, digits and underscores
    pub username: String,

    pub role: Role,

    /// Timestamp when the member was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the member was last updated
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Creates a new member with the `Guest` role
    pub fn new(username: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            role: Role::Guest,
            created_at: now,
            updated_at: now,
        }
    }

    /// Promotes a guest to a full member once the email is confirmed
    pub fn verify_email(&mut self) {
        self.role = Role::Member;
        self.updated_at = Utc::now();
    }

    pub fn is_verified(&self) -> bool {
        self.role == Role::Member
    }
}
