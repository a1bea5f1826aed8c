//! Domain entities
//!
//! Each resource has a read entity plus `New*` / `*Changes` write models.
//! Ids are database-assigned serials; every row also carries a v4 UUID.

mod book;
mod post;
mod rate_limit;
mod tier;
mod user;

pub use book::{Book, BookChanges, NewBook};
pub use post::{NewPost, Post, PostChanges};
pub use rate_limit::{NewRateLimit, RateLimit, RateLimitChanges};
pub use tier::{NewTier, Tier, TierChanges};
pub use user::{NewUser, User, UserChanges};
