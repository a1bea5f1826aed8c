//! Error handling utilities for repositories

use bookstack_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback.
///
/// Applied on every write path that touches a unique index so that requests
/// racing past the exists pre-check still surface a conflict rather than a
/// raw database error.
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Check for foreign key violation and return appropriate error or fallback
pub fn map_fk_violation<F>(e: SqlxError, on_fk: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_fk();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(username: &str) -> DomainError {
    DomainError::UserNotFound(username.to_string())
}

/// Create a "book not found" error
pub fn book_not_found(id: i32) -> DomainError {
    DomainError::BookNotFound(id)
}

/// Create a "post not found" error
pub fn post_not_found(id: i32) -> DomainError {
    DomainError::PostNotFound(id)
}

/// Create a "tier not found" error
pub fn tier_not_found(name: &str) -> DomainError {
    DomainError::TierNotFound(name.to_string())
}
