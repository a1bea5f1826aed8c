//! Service context - dependency container for services
//!
//! Holds the repositories, cache stores, and auth services every per-resource
//! service needs.

use std::sync::Arc;

use bookstack_cache::{RefreshTokenStore, ResponseCache, SharedRedisPool};
use bookstack_common::auth::JwtService;
use bookstack_core::traits::{
    BookRepository, PostRepository, RateLimitRepository, TierRepository, UserRepository,
};
use bookstack_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The refresh token store and response cache
/// - JWT service for authentication
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Redis pool
    redis_pool: SharedRedisPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    book_repo: Arc<dyn BookRepository>,
    post_repo: Arc<dyn PostRepository>,
    tier_repo: Arc<dyn TierRepository>,
    rate_limit_repo: Arc<dyn RateLimitRepository>,

    // Cache stores
    refresh_token_store: RefreshTokenStore,
    response_cache: ResponseCache,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        redis_pool: SharedRedisPool,
        user_repo: Arc<dyn UserRepository>,
        book_repo: Arc<dyn BookRepository>,
        post_repo: Arc<dyn PostRepository>,
        tier_repo: Arc<dyn TierRepository>,
        rate_limit_repo: Arc<dyn RateLimitRepository>,
        response_cache: ResponseCache,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        // Refresh tokens live exactly as long as the JWT refresh expiry
        let inner_pool = (*redis_pool).clone();
        let refresh_token_store =
            RefreshTokenStore::with_ttl(inner_pool, jwt_service.refresh_token_expiry().unsigned_abs());

        Self {
            pool,
            redis_pool,
            user_repo,
            book_repo,
            post_repo,
            tier_repo,
            rate_limit_repo,
            refresh_token_store,
            response_cache,
            jwt_service,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the Redis connection pool
    pub fn redis_pool(&self) -> &SharedRedisPool {
        &self.redis_pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the book repository
    pub fn book_repo(&self) -> &dyn BookRepository {
        self.book_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the tier repository
    pub fn tier_repo(&self) -> &dyn TierRepository {
        self.tier_repo.as_ref()
    }

    /// Get the rate limit repository
    pub fn rate_limit_repo(&self) -> &dyn RateLimitRepository {
        self.rate_limit_repo.as_ref()
    }

    // === Cache Stores ===

    /// Get the refresh token store
    pub fn refresh_token_store(&self) -> &RefreshTokenStore {
        &self.refresh_token_store
    }

    /// Get the response cache
    pub fn response_cache(&self) -> &ResponseCache {
        &self.response_cache
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("redis_pool", &"SharedRedisPool")
            .field("repositories", &"...")
            .field("cache_stores", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    redis_pool: Option<SharedRedisPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    book_repo: Option<Arc<dyn BookRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    tier_repo: Option<Arc<dyn TierRepository>>,
    rate_limit_repo: Option<Arc<dyn RateLimitRepository>>,
    response_cache: Option<ResponseCache>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            redis_pool: None,
            user_repo: None,
            book_repo: None,
            post_repo: None,
            tier_repo: None,
            rate_limit_repo: None,
            response_cache: None,
            jwt_service: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn redis_pool(mut self, redis_pool: SharedRedisPool) -> Self {
        self.redis_pool = Some(redis_pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn book_repo(mut self, repo: Arc<dyn BookRepository>) -> Self {
        self.book_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn tier_repo(mut self, repo: Arc<dyn TierRepository>) -> Self {
        self.tier_repo = Some(repo);
        self
    }

    pub fn rate_limit_repo(mut self, repo: Arc<dyn RateLimitRepository>) -> Self {
        self.rate_limit_repo = Some(repo);
        self
    }

    /// Response cache is optional; omitting it disables response caching
    pub fn response_cache(mut self, cache: ResponseCache) -> Self {
        self.response_cache = Some(cache);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| super::error::ServiceError::validation("pool is required"))?,
            self.redis_pool
                .ok_or_else(|| super::error::ServiceError::validation("redis_pool is required"))?,
            self.user_repo
                .ok_or_else(|| super::error::ServiceError::validation("user_repo is required"))?,
            self.book_repo
                .ok_or_else(|| super::error::ServiceError::validation("book_repo is required"))?,
            self.post_repo
                .ok_or_else(|| super::error::ServiceError::validation("post_repo is required"))?,
            self.tier_repo
                .ok_or_else(|| super::error::ServiceError::validation("tier_repo is required"))?,
            self.rate_limit_repo.ok_or_else(|| {
                super::error::ServiceError::validation("rate_limit_repo is required")
            })?,
            self.response_cache.unwrap_or_else(ResponseCache::disabled),
            self.jwt_service
                .ok_or_else(|| super::error::ServiceError::validation("jwt_service is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
