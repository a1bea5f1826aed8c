//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// ISBN: 10-13 characters from [0-9X-]
fn validate_isbn(isbn: &str) -> Result<(), ValidationError> {
    let len = isbn.chars().count();
    if !(10..=13).contains(&len) {
        return Err(ValidationError::new("isbn_length"));
    }
    if !isbn.chars().all(|c| c.is_ascii_digit() || c == 'X' || c == '-') {
        return Err(ValidationError::new("isbn_charset"));
    }
    Ok(())
}

/// SHA-256 content hash: exactly 64 lowercase hex characters
fn validate_content_hash(hash: &str) -> Result<(), ValidationError> {
    if hash.len() != 64 || !hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_uppercase()) {
        return Err(ValidationError::new("content_hash_format"));
    }
    Ok(())
}

/// Username: lowercase alphanumeric only
fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !username.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()) {
        return Err(ValidationError::new("username_charset"));
    }
    Ok(())
}

// ============================================================================
// Auth Requests
// ============================================================================

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 30, message = "Name must be 2-30 characters"))]
    pub name: String,

    #[validate(
        length(min = 2, max = 20, message = "Username must be 2-20 characters"),
        custom(function = "validate_username")
    )]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// Update user profile request (partial)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 2, max = 30, message = "Name must be 2-30 characters"))]
    pub name: Option<String>,

    #[validate(
        length(min = 2, max = 20, message = "Username must be 2-20 characters"),
        custom(function = "validate_username")
    )]
    pub username: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(url(message = "Invalid URL"))]
    pub profile_image_url: Option<String>,
}

/// Tier assignment request (superuser only)
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserTierRequest {
    pub tier_id: i32,
}

// ============================================================================
// Book Requests
// ============================================================================

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBookRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 100, message = "Author must be 1-100 characters"))]
    pub author: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    #[validate(custom(function = "validate_isbn"))]
    pub isbn: Option<String>,

    #[validate(range(min = 1800, max = 2030, message = "Publication year must be 1800-2030"))]
    pub publication_year: Option<i32>,

    #[validate(length(max = 50, message = "Genre must be at most 50 characters"))]
    pub genre: Option<String>,

    #[validate(range(min = 1, message = "Pages must be at least 1"))]
    pub pages: Option<i32>,

    #[validate(url(message = "Invalid URL"))]
    pub cover_image_url: Option<String>,

    #[validate(length(max = 500, message = "Folder path must be at most 500 characters"))]
    pub folder_path: Option<String>,

    #[validate(range(min = 0, message = "File size must be non-negative"))]
    pub file_size_bytes: Option<i64>,

    #[validate(custom(function = "validate_content_hash"))]
    pub content_hash: Option<String>,
}

/// Update book request (partial)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateBookRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Author must be 1-100 characters"))]
    pub author: Option<String>,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    #[validate(custom(function = "validate_isbn"))]
    pub isbn: Option<String>,

    #[validate(range(min = 1800, max = 2030, message = "Publication year must be 1800-2030"))]
    pub publication_year: Option<i32>,

    #[validate(length(max = 50, message = "Genre must be at most 50 characters"))]
    pub genre: Option<String>,

    #[validate(range(min = 1, message = "Pages must be at least 1"))]
    pub pages: Option<i32>,

    #[validate(url(message = "Invalid URL"))]
    pub cover_image_url: Option<String>,
}

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 2, max = 30, message = "Title must be 2-30 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 63206, message = "Text must be 1-63206 characters"))]
    pub text: String,

    #[validate(url(message = "Invalid URL"))]
    pub media_url: Option<String>,
}

/// Update post request (partial)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 2, max = 30, message = "Title must be 2-30 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 63206, message = "Text must be 1-63206 characters"))]
    pub text: Option<String>,

    #[validate(url(message = "Invalid URL"))]
    pub media_url: Option<String>,
}

// ============================================================================
// Tier Requests
// ============================================================================

/// Create tier request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTierRequest {
    #[validate(length(min = 1, max = 50, message = "Tier name must be 1-50 characters"))]
    pub name: String,
}

/// Update tier request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTierRequest {
    #[validate(length(min = 1, max = 50, message = "Tier name must be 1-50 characters"))]
    pub name: Option<String>,
}

// ============================================================================
// Rate Limit Requests
// ============================================================================

/// Create rate limit request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRateLimitRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 255, message = "Path must be 1-255 characters"))]
    pub path: String,

    #[validate(range(min = 1, message = "Limit must be at least 1"))]
    pub limit: i32,

    #[validate(range(min = 1, message = "Period must be at least 1 second"))]
    pub period: i32,
}

/// Update rate limit request (partial)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateRateLimitRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Path must be 1-255 characters"))]
    pub path: Option<String>,

    #[validate(range(min = 1, message = "Limit must be at least 1"))]
    pub limit: Option<i32>,

    #[validate(range(min = 1, message = "Period must be at least 1 second"))]
    pub period: Option<i32>,
}
