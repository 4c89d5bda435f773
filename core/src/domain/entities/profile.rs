//! Public profile of a member.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Profile entity. One per member, display name unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub member_id: Uuid,
    /// Display name
    pub name: String,
    /// Free-form introduction
    pub info: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(member_id: Uuid, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            member_id,
            name: name.into(),
            info: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }

    pub fn update_info(&mut self, info: Option<String>) {
        self.info = info;
        self.updated_at = Utc::now();
    }
}
