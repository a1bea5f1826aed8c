//! # bookstack-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Book, BookChanges, NewBook, NewPost, NewRateLimit, NewTier, NewUser, Post, PostChanges,
    RateLimit, RateLimitChanges, Tier, TierChanges, User, UserChanges,
};
pub use error::DomainError;
pub use traits::{
    BookRepository, PostRepository, RateLimitRepository, RepoResult, TierRepository,
    UserRepository,
};
pub use value_objects::{PageQuery, DEFAULT_ITEMS_PER_PAGE, MAX_ITEMS_PER_PAGE};
