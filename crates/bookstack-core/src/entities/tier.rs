//! Subscription tier entity

use chrono::{DateTime, Utc};

/// A subscription tier users can be assigned to.
/// Tiers are hard-deleted; deletion is rejected while users reference one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields for inserting a new tier
#[derive(Debug, Clone)]
pub struct NewTier {
    pub name: String,
}

/// Partial update for a tier
#[derive(Debug, Clone, Default)]
pub struct TierChanges {
    pub name: Option<String>,
}
