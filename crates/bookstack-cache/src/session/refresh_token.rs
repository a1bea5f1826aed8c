//! Refresh token storage in Redis.
//!
//! One active refresh token per user, expiring with the token itself.
//! Rotating the pair overwrites the stored token; logout deletes it.

use crate::pool::{RedisPool, RedisResult};

/// Key prefix for refresh tokens
const REFRESH_TOKEN_PREFIX: &str = "refresh_token:";

/// Default TTL for refresh tokens (7 days)
const DEFAULT_REFRESH_TOKEN_TTL: u64 = 7 * 24 * 60 * 60;

/// Refresh token store for managing authentication sessions
#[derive(Clone)]
pub struct RefreshTokenStore {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl RefreshTokenStore {
    /// Create a new refresh token store
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            ttl_seconds: DEFAULT_REFRESH_TOKEN_TTL,
        }
    }

    /// Create with custom TTL
    #[must_use]
    pub fn with_ttl(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    /// Generate Redis key for a user's refresh token
    fn key(user_id: i32) -> String {
        format!("{REFRESH_TOKEN_PREFIX}{user_id}")
    }

    /// Store the current refresh token for a user, replacing any previous one
    pub async fn store(&self, user_id: i32, token: &str) -> RedisResult<()> {
        let key = Self::key(user_id);
        self.pool.set(&key, &token, Some(self.ttl_seconds)).await?;

        tracing::debug!(user_id = user_id, "Stored refresh token");

        Ok(())
    }

    /// Check whether the presented token is the user's active refresh token
    pub async fn is_active(&self, user_id: i32, token: &str) -> RedisResult<bool> {
        let key = Self::key(user_id);
        let stored: Option<String> = self.pool.get_value(&key).await?;
        Ok(stored.as_deref() == Some(token))
    }

    /// Revoke the user's refresh token (logout)
    pub async fn revoke(&self, user_id: i32) -> RedisResult<bool> {
        let key = Self::key(user_id);
        let deleted = self.pool.delete(&key).await?;

        if deleted {
            tracing::debug!(user_id = user_id, "Revoked refresh token");
        }

        Ok(deleted)
    }
}
