//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] and exposes the
//! operations for one resource. Authorization rules live here: owner-scoped
//! mutations require the caller to be the resource owner, hard deletes
//! require a superuser.

pub mod auth;
pub mod book;
pub mod context;
pub mod error;
pub mod post;
pub mod rate_limit;
pub mod tier;
pub mod user;

pub use auth::AuthService;
pub use book::BookService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use post::PostService;
pub use rate_limit::RateLimitService;
pub use tier::TierService;
pub use user::UserService;

use bookstack_core::entities::User;
use bookstack_core::DomainError;

/// Load the authenticated caller's account
pub(crate) async fn load_caller(ctx: &ServiceContext, caller_id: i32) -> ServiceResult<User> {
    ctx.user_repo()
        .find_by_id(caller_id)
        .await?
        .ok_or_else(|| ServiceError::Domain(DomainError::UserNotFound(caller_id.to_string())))
}

/// Resolve a `{username}` path segment to the account it names
pub(crate) async fn resolve_user(ctx: &ServiceContext, username: &str) -> ServiceResult<User> {
    ctx.user_repo()
        .find_by_username(username)
        .await?
        .ok_or_else(|| ServiceError::Domain(DomainError::UserNotFound(username.to_string())))
}

/// Reject callers without superuser rights
pub(crate) fn require_superuser(caller: &User) -> ServiceResult<()> {
    if caller.is_superuser() {
        Ok(())
    } else {
        Err(ServiceError::Domain(DomainError::SuperuserRequired))
    }
}
