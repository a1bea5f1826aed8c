//! Database models with SQLx FromRow derives

mod book;
mod post;
mod rate_limit;
mod tier;
mod user;

pub use book::BookModel;
pub use post::PostModel;
pub use rate_limit::RateLimitModel;
pub use tier::TierModel;
pub use user::UserModel;
