//! # bookstack-cache
//!
//! Redis caching layer for response caching and refresh token sessions.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Response Cache**: Best-effort cache-aside store for list and
//!   single-item responses with wildcard invalidation
//! - **Session Storage**: Refresh token storage with automatic expiration
//!
//! ## Example
//!
//! ```ignore
//! use bookstack_cache::{RedisPool, RedisPoolConfig, ResponseCache};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let cache = ResponseCache::new(pool, 3600, 300);
//!
//! cache.put(&key, &response, Some(300)).await;
//! let hit: Option<MyResponse> = cache.get_json(&key).await;
//! ```

pub mod keys;
pub mod pool;
pub mod response;
pub mod session;

// Re-export pool types
pub use pool::{
    RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool,
};

// Re-export cache and session types
pub use response::ResponseCache;
pub use session::RefreshTokenStore;
