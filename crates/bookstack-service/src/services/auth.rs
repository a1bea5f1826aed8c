//! Authentication service
//!
//! Handles login, token refresh, and logout. Registration lives in the user
//! service since it returns a profile rather than a token pair.

use bookstack_common::auth::verify_password;
use bookstack_common::AppError;
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, LoginRequest, RefreshTokenRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with username and password
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        // Find user by username
        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!(username = %request.username, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // Get password hash
        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(&request.username)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // Verify password
        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(user_id = user.id, "User logged in successfully");

        self.issue_tokens(user.id).await
    }

    /// Rotate the token pair using a refresh token
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(
        &self,
        request: RefreshTokenRequest,
    ) -> ServiceResult<AuthResponse> {
        // The token must decode as a refresh token
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)?;
        let user_id = claims.user_id()?;

        // And match the active token stored for the user
        let is_active = self
            .ctx
            .refresh_token_store()
            .is_active(user_id, &request.refresh_token)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_active {
            warn!(user_id = user_id, "Refresh failed: token not active");
            return Err(ServiceError::App(AppError::InvalidToken));
        }

        // A soft-deleted account cannot refresh
        if self.ctx.user_repo().find_by_id(user_id).await?.is_none() {
            return Err(ServiceError::App(AppError::InvalidToken));
        }

        info!(user_id = user_id, "Tokens refreshed successfully");

        self.issue_tokens(user_id).await
    }

    /// Logout by revoking the caller's refresh token
    #[instrument(skip(self))]
    pub async fn logout(&self, user_id: i32) -> ServiceResult<()> {
        self.ctx
            .refresh_token_store()
            .revoke(user_id)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        info!(user_id = user_id, "User logged out successfully");
        Ok(())
    }

    /// Generate a token pair and store the refresh half, replacing any
    /// previously active one
    async fn issue_tokens(&self, user_id: i32) -> ServiceResult<AuthResponse> {
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user_id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        self.ctx
            .refresh_token_store()
            .store(user_id, &token_pair.refresh_token)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse {
            access_token: token_pair.access_token,
            refresh_token: token_pair.refresh_token,
            token_type: token_pair.token_type,
            expires_in: token_pair.expires_in,
        })
    }
}
