//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i32,
    pub uuid: Uuid,
    pub name: String,
    pub username: String,
    pub email: String,
    pub hashed_password: String,
    pub profile_image_url: Option<String>,
    pub tier_id: Option<i32>,
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
}
