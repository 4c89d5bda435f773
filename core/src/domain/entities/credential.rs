//! Email and password credential attached to a member.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Local (email + password) credential. One per member, email unique.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalCredential {
    pub id: Uuid,
    pub member_id: Uuid,
    pub email: String,
    /// bcrypt hash, never the plain password
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LocalCredential {
    pub fn new(
        member_id: Uuid,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            member_id,
            email: email.into(),
            password_hash: password_hash.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl std::fmt::Debug for LocalCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalCredential")
            .field("id", &self.id)
            .field("member_id", &self.member_id)
            .field("email", &shared::mask_email(&self.email))
            .field("password_hash", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}
