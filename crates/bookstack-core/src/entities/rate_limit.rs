//! Per-tier rate limit entity

use chrono::{DateTime, Utc};

/// A rate limit rule attached to a tier: `limit` requests per `period` seconds
/// for the API path identified by `path`. Rules are stored configuration and
/// are not enforced inline on the request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimit {
    pub id: i32,
    pub tier_id: i32,
    pub name: String,
    pub path: String,
    pub limit: i32,
    pub period: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields for inserting a new rate limit rule
#[derive(Debug, Clone)]
pub struct NewRateLimit {
    pub tier_id: i32,
    pub name: String,
    pub path: String,
    pub limit: i32,
    pub period: i32,
}

/// Partial update for a rate limit rule
#[derive(Debug, Clone, Default)]
pub struct RateLimitChanges {
    pub name: Option<String>,
    pub path: Option<String>,
    pub limit: Option<i32>,
    pub period: Option<i32>,
}

impl RateLimitChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.path.is_none() && self.limit.is_none() && self.period.is_none()
    }
}
