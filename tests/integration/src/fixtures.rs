//! Test fixtures and data generators
//!
//! Provides reusable request builders and response shapes for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Auth and user fixtures
// ============================================================================

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test User {suffix}"),
            username: format!("testuser{suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Token refresh request
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Token pair response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub username: String,
    pub email: String,
    pub profile_image_url: Option<String>,
    pub tier_id: Option<i32>,
    pub created_at: String,
}

/// Partial user update request
#[derive(Debug, Default, Serialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}

// ============================================================================
// Book fixtures
// ============================================================================

/// Create book request
#[derive(Debug, Serialize)]
pub struct CreateBookRequest {
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
}

impl CreateBookRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test Book {suffix}"),
            author: format!("Author {suffix}"),
            description: Some("A book created during integration tests".to_string()),
            isbn: Some(unique_isbn(suffix)),
            publication_year: Some(2020),
            genre: Some("Fiction".to_string()),
            pages: Some(320),
        }
    }
}

/// Build a 13-digit ISBN unique to this test run
pub fn unique_isbn(suffix: u64) -> String {
    format!("978{:010}", suffix % 10_000_000_000)
}

/// Partial book update request
#[derive(Debug, Default, Serialize)]
pub struct UpdateBookRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

/// Book response
#[derive(Debug, Deserialize)]
pub struct BookResponse {
    pub id: i32,
    pub uuid: String,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub isbn: Option<String>,
    pub publication_year: Option<i32>,
    pub genre: Option<String>,
    pub pages: Option<i32>,
    pub created_by_user_id: i32,
    pub created_at: String,
}

// ============================================================================
// Post fixtures
// ============================================================================

/// Create post request
#[derive(Debug, Serialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
}

impl CreatePostRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test Post {suffix}"),
            text: "Some thoughts on a book I just finished.".to_string(),
            media_url: None,
        }
    }
}

/// Partial post update request
#[derive(Debug, Default, Serialize)]
pub struct UpdatePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
}

/// Post response
#[derive(Debug, Deserialize)]
pub struct PostResponse {
    pub id: i32,
    pub uuid: String,
    pub title: String,
    pub text: String,
    pub media_url: Option<String>,
    pub created_by_user_id: i32,
    pub created_at: String,
}

// ============================================================================
// Tier and rate limit fixtures
// ============================================================================

/// Create tier request
#[derive(Debug, Serialize)]
pub struct CreateTierRequest {
    pub name: String,
}

impl CreateTierRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("tier{suffix}"),
        }
    }
}

/// Tier response
#[derive(Debug, Deserialize)]
pub struct TierResponse {
    pub id: i32,
    pub name: String,
    pub created_at: String,
}

/// Create rate limit request
#[derive(Debug, Serialize)]
pub struct CreateRateLimitRequest {
    pub name: String,
    pub path: String,
    pub limit: i32,
    pub period: i32,
}

impl CreateRateLimitRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("limit{suffix}"),
            path: "/api/v1/books".to_string(),
            limit: 100,
            period: 3600,
        }
    }
}

/// Rate limit response
#[derive(Debug, Deserialize)]
pub struct RateLimitResponse {
    pub id: i32,
    pub tier_id: i32,
    pub name: String,
    pub path: String,
    pub limit: i32,
    pub period: i32,
}

// ============================================================================
// Envelopes
// ============================================================================

/// Paginated list envelope
#[derive(Debug, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total_count: i64,
    pub page: i64,
    pub items_per_page: i64,
    pub has_more: bool,
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
