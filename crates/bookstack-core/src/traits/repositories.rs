//! Repository traits
//!
//! One trait per entity. Default reads exclude soft-deleted rows; the `_any`
//! variants include them for superuser hard-delete paths. Implementations
//! live in the database crate.

use async_trait::async_trait;

use crate::entities::{
    Book, BookChanges, NewBook, NewPost, NewRateLimit, NewTier, NewUser, Post, PostChanges,
    RateLimit, RateLimitChanges, Tier, TierChanges, User, UserChanges,
};
use crate::error::DomainError;
use crate::value_objects::PageQuery;

/// Result alias for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// User persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, new_user: NewUser) -> RepoResult<User>;

    async fn find_by_id(&self, id: i32) -> RepoResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Lookup including soft-deleted rows
    async fn find_by_username_any(&self, username: &str) -> RepoResult<Option<User>>;

    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    async fn page(&self, page: PageQuery) -> RepoResult<Vec<User>>;

    async fn count(&self) -> RepoResult<i64>;

    async fn update(&self, id: i32, changes: UserChanges) -> RepoResult<User>;

    async fn set_tier(&self, id: i32, tier_id: i32) -> RepoResult<()>;

    async fn soft_delete(&self, id: i32) -> RepoResult<()>;

    async fn hard_delete(&self, id: i32) -> RepoResult<()>;

    /// Password hash for login verification, keyed by username
    async fn get_password_hash(&self, username: &str) -> RepoResult<Option<String>>;
}

/// Book persistence operations
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn create(&self, new_book: NewBook) -> RepoResult<Book>;

    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Book>>;

    /// Non-deleted book owned by `owner_id`
    async fn find_owned(&self, owner_id: i32, id: i32) -> RepoResult<Option<Book>>;

    /// Owned book including soft-deleted rows
    async fn find_owned_any(&self, owner_id: i32, id: i32) -> RepoResult<Option<Book>>;

    async fn isbn_exists(&self, isbn: &str) -> RepoResult<bool>;

    async fn page(&self, page: PageQuery) -> RepoResult<Vec<Book>>;

    async fn count(&self) -> RepoResult<i64>;

    async fn page_by_owner(&self, owner_id: i32, page: PageQuery) -> RepoResult<Vec<Book>>;

    async fn count_by_owner(&self, owner_id: i32) -> RepoResult<i64>;

    async fn update(&self, owner_id: i32, id: i32, changes: BookChanges) -> RepoResult<Book>;

    async fn soft_delete(&self, owner_id: i32, id: i32) -> RepoResult<()>;

    async fn hard_delete(&self, owner_id: i32, id: i32) -> RepoResult<()>;
}

/// Post persistence operations
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, new_post: NewPost) -> RepoResult<Post>;

    async fn find_owned(&self, owner_id: i32, id: i32) -> RepoResult<Option<Post>>;

    async fn find_owned_any(&self, owner_id: i32, id: i32) -> RepoResult<Option<Post>>;

    async fn page_by_owner(&self, owner_id: i32, page: PageQuery) -> RepoResult<Vec<Post>>;

    async fn count_by_owner(&self, owner_id: i32) -> RepoResult<i64>;

    async fn update(&self, owner_id: i32, id: i32, changes: PostChanges) -> RepoResult<Post>;

    async fn soft_delete(&self, owner_id: i32, id: i32) -> RepoResult<()>;

    async fn hard_delete(&self, owner_id: i32, id: i32) -> RepoResult<()>;
}

/// Tier persistence operations (hard-deleted only)
#[async_trait]
pub trait TierRepository: Send + Sync {
    async fn create(&self, new_tier: NewTier) -> RepoResult<Tier>;

    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Tier>>;

    async fn name_exists(&self, name: &str) -> RepoResult<bool>;

    async fn page(&self, page: PageQuery) -> RepoResult<Vec<Tier>>;

    async fn count(&self) -> RepoResult<i64>;

    async fn update(&self, id: i32, changes: TierChanges) -> RepoResult<Tier>;

    /// Fails with `TierInUse` while users or rate limits reference the tier
    async fn delete(&self, id: i32) -> RepoResult<()>;
}

/// Rate limit persistence operations (hard-deleted only)
#[async_trait]
pub trait RateLimitRepository: Send + Sync {
    async fn create(&self, new_rate_limit: NewRateLimit) -> RepoResult<RateLimit>;

    async fn find(&self, tier_id: i32, id: i32) -> RepoResult<Option<RateLimit>>;

    async fn name_exists(&self, name: &str) -> RepoResult<bool>;

    async fn page_by_tier(&self, tier_id: i32, page: PageQuery) -> RepoResult<Vec<RateLimit>>;

    async fn count_by_tier(&self, tier_id: i32) -> RepoResult<i64>;

    async fn update(
        &self,
        tier_id: i32,
        id: i32,
        changes: RateLimitChanges,
    ) -> RepoResult<RateLimit>;

    async fn delete(&self, tier_id: i32, id: i32) -> RepoResult<()>;
}
