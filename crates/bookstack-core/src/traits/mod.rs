//! Abstraction traits implemented by the infrastructure layer

mod repositories;

pub use repositories::{
    BookRepository, PostRepository, RateLimitRepository, RepoResult, TierRepository,
    UserRepository,
};
