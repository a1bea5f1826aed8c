//! Rate limit database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the rate_limits table
#[derive(Debug, Clone, FromRow)]
pub struct RateLimitModel {
    pub id: i32,
    pub tier_id: i32,
    pub name: String,
    pub path: String,
    pub limit: i32,
    pub period: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
