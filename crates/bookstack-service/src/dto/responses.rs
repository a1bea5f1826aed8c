//! Response DTOs for API endpoints
//!
//! Response DTOs implement both `Serialize` and `Deserialize` because cached
//! responses round-trip through Redis as JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bookstack_core::PageQuery;

// ============================================================================
// Common Response Types
// ============================================================================

/// Offset-paginated response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total_count: i64,
    pub page: i64,
    pub items_per_page: i64,
    pub has_more: bool,
}

impl<T> PaginatedResponse<T> {
    /// Build the envelope from a page of data and the total row count
    pub fn new(data: Vec<T>, page: PageQuery, total_count: i64) -> Self {
        Self {
            data,
            total_count,
            page: page.page,
            items_per_page: page.items_per_page,
            has_more: page.has_more(total_count),
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

// ============================================================================
// User Responses
// ============================================================================

/// User profile response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Book Responses
// ============================================================================

/// Book response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookResponse {
    pub id: i32,
    pub uuid: Uuid,
    pub title: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
    pub created_by_user_id: i32,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Post Responses
// ============================================================================

/// Post response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i32,
    pub uuid: Uuid,
    pub title: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    pub created_by_user_id: i32,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Tier / Rate Limit Responses
// ============================================================================

/// Tier response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierResponse {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Rate limit response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitResponse {
    pub id: i32,
    pub tier_id: i32,
    pub name: String,
    pub path: String,
    pub limit: i32,
    pub period: i32,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// Per-dependency health status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthChecks {
    pub database: bool,
    pub redis: bool,
}

/// Readiness response including dependency checks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub checks: HealthChecks,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database: bool, redis: bool) -> Self {
        let status = if database && redis { "ready" } else { "degraded" };
        Self {
            status: status.to_string(),
            checks: HealthChecks { database, redis },
        }
    }
}
