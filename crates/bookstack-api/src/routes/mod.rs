//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{auth, books, health, posts, rate_limits, tiers, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(book_routes())
        .merge(post_routes())
        .merge(tier_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh_token))
        .route("/logout", post(auth::logout))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", post(users::register))
        .route("/users", get(users::list_users))
        .route("/user/me", get(users::get_current_user))
        .route("/user/:username", get(users::get_user))
        .route("/user/:username", patch(users::update_user))
        .route("/user/:username", delete(users::delete_user))
        .route("/db_user/:username", delete(users::hard_delete_user))
        .route("/user/:username/tier", patch(users::set_user_tier))
}

/// Book routes
fn book_routes() -> Router<AppState> {
    Router::new()
        // Public listing and single fetch
        .route("/books", get(books::list_books).post(books::list_books))
        .route("/book/:id", get(books::get_book))
        // Owner-scoped routes
        .route("/:username/book", post(books::create_book))
        .route(
            "/:username/books",
            get(books::list_user_books).post(books::list_user_books),
        )
        .route("/:username/book/:id", get(books::get_user_book))
        .route("/:username/book/:id", patch(books::update_book))
        .route("/:username/book/:id", delete(books::delete_book))
        .route("/:username/db_book/:id", delete(books::hard_delete_book))
}

/// Post routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/:username/post", post(posts::create_post))
        .route(
            "/:username/posts",
            get(posts::list_user_posts).post(posts::list_user_posts),
        )
        .route("/:username/post/:id", get(posts::get_user_post))
        .route("/:username/post/:id", patch(posts::update_post))
        .route("/:username/post/:id", delete(posts::delete_post))
        .route("/:username/db_post/:id", delete(posts::hard_delete_post))
}

/// Tier and rate limit routes
fn tier_routes() -> Router<AppState> {
    Router::new()
        // Tier CRUD
        .route("/tier", post(tiers::create_tier))
        .route("/tiers", get(tiers::list_tiers))
        .route("/tier/:name", get(tiers::get_tier))
        .route("/tier/:name", patch(tiers::update_tier))
        .route("/tier/:name", delete(tiers::delete_tier))
        // Per-tier rate limit rules
        .route("/tier/:name/rate_limit", post(rate_limits::create_rate_limit))
        .route("/tier/:name/rate_limits", get(rate_limits::list_rate_limits))
        .route("/tier/:name/rate_limit/:id", get(rate_limits::get_rate_limit))
        .route("/tier/:name/rate_limit/:id", patch(rate_limits::update_rate_limit))
        .route("/tier/:name/rate_limit/:id", delete(rate_limits::delete_rate_limit))
}
