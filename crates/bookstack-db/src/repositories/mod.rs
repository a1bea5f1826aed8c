//! PostgreSQL repository implementations

mod book;
mod error;
mod post;
mod rate_limit;
mod tier;
mod user;

pub use book::PgBookRepository;
pub use post::PgPostRepository;
pub use rate_limit::PgRateLimitRepository;
pub use tier::PgTierRepository;
pub use user::PgUserRepository;
