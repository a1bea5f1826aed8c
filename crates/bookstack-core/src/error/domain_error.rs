//! Domain-level errors
//!
//! Infrastructure and service layers map their failures into these variants;
//! the API layer translates them to HTTP statuses.

use thiserror::Error;

/// Errors produced by domain operations
#[derive(Debug, Error)]
pub enum DomainError {
    // Not found
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Book not found: {0}")]
    BookNotFound(i32),

    #[error("Post not found: {0}")]
    PostNotFound(i32),

    #[error("Tier not found: {0}")]
    TierNotFound(String),

    #[error("Rate limit not found")]
    RateLimitNotFound,

    // Authorization
    #[error("You are not the owner of this resource")]
    NotResourceOwner,

    #[error("Superuser privileges required")]
    SuperuserRequired,

    // Conflicts
    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("ISBN already exists: {0}")]
    IsbnAlreadyExists(String),

    #[error("Tier name already exists: {0}")]
    TierNameAlreadyExists(String),

    #[error("Rate limit name already exists: {0}")]
    RateLimitNameAlreadyExists(String),

    #[error("Tier is still assigned to users")]
    TierInUse,

    // Validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    // Infrastructure
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::BookNotFound(_) => "BOOK_NOT_FOUND",
            Self::PostNotFound(_) => "POST_NOT_FOUND",
            Self::TierNotFound(_) => "TIER_NOT_FOUND",
            Self::RateLimitNotFound => "RATE_LIMIT_NOT_FOUND",
            Self::NotResourceOwner => "NOT_RESOURCE_OWNER",
            Self::SuperuserRequired => "SUPERUSER_REQUIRED",
            Self::UsernameAlreadyExists(_) => "USERNAME_ALREADY_EXISTS",
            Self::EmailAlreadyExists(_) => "EMAIL_ALREADY_EXISTS",
            Self::IsbnAlreadyExists(_) => "ISBN_ALREADY_EXISTS",
            Self::TierNameAlreadyExists(_) => "TIER_NAME_ALREADY_EXISTS",
            Self::RateLimitNameAlreadyExists(_) => "RATE_LIMIT_NAME_ALREADY_EXISTS",
            Self::TierInUse => "TIER_IN_USE",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether this error maps to a 404 response
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::BookNotFound(_)
                | Self::PostNotFound(_)
                | Self::TierNotFound(_)
                | Self::RateLimitNotFound
        )
    }

    /// Whether this error maps to a 403 response
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotResourceOwner | Self::SuperuserRequired)
    }

    /// Whether this error maps to a 409 response
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UsernameAlreadyExists(_)
                | Self::EmailAlreadyExists(_)
                | Self::IsbnAlreadyExists(_)
                | Self::TierNameAlreadyExists(_)
                | Self::RateLimitNameAlreadyExists(_)
                | Self::TierInUse
        )
    }

    /// Whether this error maps to a 422 response
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }
}
