//! Post entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A text post owned by the user who created it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i32,
    pub uuid: Uuid,
    pub title: String,
    pub text: String,
    pub media_url: Option<String>,
    pub created_by_user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Fields for inserting a new post
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub text: String,
    pub media_url: Option<String>,
    pub created_by_user_id: i32,
}

/// Partial update for a post; only provided fields are applied
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub text: Option<String>,
    pub media_url: Option<String>,
}

impl PostChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.text.is_none() && self.media_url.is_none()
    }
}
