//! Tier database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the tiers table
#[derive(Debug, Clone, FromRow)]
pub struct TierModel {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
