//! Entity → response DTO mappers

use bookstack_core::entities::{Book, Post, RateLimit, Tier, User};

use super::responses::{BookResponse, PostResponse, RateLimitResponse, TierResponse, UserResponse};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            profile_image_url: user.profile_image_url.clone(),
            tier_id: user.tier_id,
            created_at: user.created_at,
        }
    }
}

impl From<&Book> for BookResponse {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            uuid: book.uuid,
            title: book.title.clone(),
            author: book.author.clone(),
            description: book.description.clone(),
            isbn: book.isbn.clone(),
            publication_year: book.publication_year,
            genre: book.genre.clone(),
            pages: book.pages,
            cover_image_url: book.cover_image_url.clone(),
            folder_path: book.folder_path.clone(),
            file_size_bytes: book.file_size_bytes,
            content_hash: book.content_hash.clone(),
            created_by_user_id: book.created_by_user_id,
            created_at: book.created_at,
        }
    }
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            uuid: post.uuid,
            title: post.title.clone(),
            text: post.text.clone(),
            media_url: post.media_url.clone(),
            created_by_user_id: post.created_by_user_id,
            created_at: post.created_at,
        }
    }
}

impl From<&Tier> for TierResponse {
    fn from(tier: &Tier) -> Self {
        Self {
            id: tier.id,
            name: tier.name.clone(),
            created_at: tier.created_at,
        }
    }
}

impl From<&RateLimit> for RateLimitResponse {
    fn from(rate_limit: &RateLimit) -> Self {
        Self {
            id: rate_limit.id,
            tier_id: rate_limit.tier_id,
            name: rate_limit.name.clone(),
            path: rate_limit.path.clone(),
            limit: rate_limit.limit,
            period: rate_limit.period,
        }
    }
}
