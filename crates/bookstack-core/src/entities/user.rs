//! User entity - an account that owns books and posts

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// User account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub uuid: Uuid,
    pub name: String,
    pub username: String,
    pub email: String,
    pub profile_image_url: Option<String>,
    pub tier_id: Option<i32>,
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Check if this user may perform superuser-only operations
    #[inline]
    pub fn is_superuser(&self) -> bool {
        self.is_superuser
    }

    /// Check if this user owns a resource created by `created_by_user_id`
    #[inline]
    pub fn owns(&self, created_by_user_id: Option<i32>) -> bool {
        created_by_user_id == Some(self.id)
    }
}

/// Fields required to insert a new user (id, uuid, and timestamps are
/// assigned at insert)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub email: String,
    pub hashed_password: String,
}

/// Partial update for a user profile; only provided fields are applied
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub profile_image_url: Option<String>,
}

impl UserChanges {
    /// Check whether the update carries any field at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.username.is_none()
            && self.email.is_none()
            && self.profile_image_url.is_none()
    }
}
