//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod books;
pub mod health;
pub mod posts;
pub mod rate_limits;
pub mod tiers;
pub mod users;
