//! User service
//!
//! Registration, profile reads, owner-scoped updates and soft deletes, plus
//! the superuser-only hard delete and tier assignment.

use bookstack_cache::keys;
use bookstack_common::auth::{hash_password, validate_password_strength};
use bookstack_core::entities::{NewUser, UserChanges};
use bookstack_core::{DomainError, PageQuery};
use tracing::{info, instrument};

use crate::dto::{
    PaginatedResponse, RegisterRequest, UpdateUserRequest, UpdateUserTierRequest, UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::{load_caller, require_superuser, resolve_user};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user account
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<UserResponse> {
        validate_password_strength(&request.password)?;

        if self
            .ctx
            .user_repo()
            .username_exists(&request.username)
            .await?
        {
            return Err(DomainError::UsernameAlreadyExists(request.username).into());
        }

        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(DomainError::EmailAlreadyExists(request.email).into());
        }

        let hashed_password =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user = self
            .ctx
            .user_repo()
            .create(NewUser {
                name: request.name,
                username: request.username,
                email: request.email,
                hashed_password,
            })
            .await?;

        info!(user_id = user.id, "User registered successfully");

        Ok(UserResponse::from(&user))
    }

    /// List users, paginated
    #[instrument(skip(self))]
    pub async fn list(&self, page: PageQuery) -> ServiceResult<PaginatedResponse<UserResponse>> {
        let users = self.ctx.user_repo().page(page).await?;
        let total_count = self.ctx.user_repo().count().await?;

        let data = users.iter().map(UserResponse::from).collect();
        Ok(PaginatedResponse::new(data, page, total_count))
    }

    /// Get the authenticated caller's own profile
    #[instrument(skip(self))]
    pub async fn get_me(&self, caller_id: i32) -> ServiceResult<UserResponse> {
        let caller = load_caller(self.ctx, caller_id).await?;
        Ok(UserResponse::from(&caller))
    }

    /// Get a public profile by username
    #[instrument(skip(self))]
    pub async fn get_by_username(&self, username: &str) -> ServiceResult<UserResponse> {
        let user = resolve_user(self.ctx, username).await?;
        Ok(UserResponse::from(&user))
    }

    /// Update a user's own profile
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        caller_id: i32,
        username: &str,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let target = resolve_user(self.ctx, username).await?;

        if caller_id != target.id {
            return Err(DomainError::NotResourceOwner.into());
        }

        let changes = UserChanges {
            name: request.name,
            username: request.username,
            email: request.email,
            profile_image_url: request.profile_image_url,
        };

        if changes.is_empty() {
            return Err(ServiceError::validation("No fields to update"));
        }

        // Pre-check duplicates only when the value actually changes
        if let Some(new_username) = changes.username.as_deref() {
            if new_username != target.username
                && self.ctx.user_repo().username_exists(new_username).await?
            {
                return Err(DomainError::UsernameAlreadyExists(new_username.to_string()).into());
            }
        }

        if let Some(new_email) = changes.email.as_deref() {
            if new_email != target.email && self.ctx.user_repo().email_exists(new_email).await? {
                return Err(DomainError::EmailAlreadyExists(new_email.to_string()).into());
            }
        }

        let username_changed = changes
            .username
            .as_deref()
            .is_some_and(|u| u != target.username);

        let updated = self.ctx.user_repo().update(target.id, changes).await?;

        // List caches are keyed by username and would otherwise dangle
        if username_changed {
            let cache = self.ctx.response_cache();
            cache
                .invalidate_pattern(&keys::user_books_pattern(&target.username))
                .await;
            cache
                .invalidate_pattern(&keys::user_posts_pattern(&target.username))
                .await;
        }

        info!(user_id = updated.id, "User updated");

        Ok(UserResponse::from(&updated))
    }

    /// Soft delete a user's own account
    #[instrument(skip(self))]
    pub async fn delete(&self, caller_id: i32, username: &str) -> ServiceResult<()> {
        let target = resolve_user(self.ctx, username).await?;

        if caller_id != target.id {
            return Err(DomainError::NotResourceOwner.into());
        }

        self.ctx.user_repo().soft_delete(target.id).await?;

        // A deleted account cannot keep refreshing tokens
        self.ctx
            .refresh_token_store()
            .revoke(target.id)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        info!(user_id = target.id, "User soft deleted");
        Ok(())
    }

    /// Hard delete an account, superuser only. Soft-deleted accounts are
    /// still visible to this path.
    #[instrument(skip(self))]
    pub async fn hard_delete(&self, caller_id: i32, username: &str) -> ServiceResult<()> {
        let caller = load_caller(self.ctx, caller_id).await?;
        require_superuser(&caller)?;

        let target = self
            .ctx
            .user_repo()
            .find_by_username_any(username)
            .await?
            .ok_or_else(|| {
                ServiceError::Domain(DomainError::UserNotFound(username.to_string()))
            })?;

        self.ctx.user_repo().hard_delete(target.id).await?;

        self.ctx
            .refresh_token_store()
            .revoke(target.id)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        info!(user_id = target.id, "User hard deleted");
        Ok(())
    }

    /// Assign a tier to a user, superuser only
    #[instrument(skip(self))]
    pub async fn set_tier(
        &self,
        caller_id: i32,
        username: &str,
        request: UpdateUserTierRequest,
    ) -> ServiceResult<UserResponse> {
        let caller = load_caller(self.ctx, caller_id).await?;
        require_superuser(&caller)?;

        let target = resolve_user(self.ctx, username).await?;

        self.ctx
            .user_repo()
            .set_tier(target.id, request.tier_id)
            .await?;

        let updated = load_caller(self.ctx, target.id).await?;

        info!(user_id = target.id, tier_id = request.tier_id, "User tier updated");

        Ok(UserResponse::from(&updated))
    }
}
