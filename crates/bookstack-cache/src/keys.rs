//! Cache key templates
//!
//! Keys are interpolated from route and query parameters. List pages are
//! keyed per page/size pair; single items are keyed by id, once under the
//! owner's name and once publicly.

/// Key for a page of the public book listing
#[must_use]
pub fn public_books_page(page: i64, items_per_page: i64) -> String {
    format!("public_books:page_{page}:items_per_page_{items_per_page}")
}

/// Key for a page of one user's book listing
#[must_use]
pub fn user_books_page(username: &str, page: i64, items_per_page: i64) -> String {
    format!("{username}_books:page_{page}:items_per_page_{items_per_page}")
}

/// Wildcard pattern matching every cached page of a user's book listing
#[must_use]
pub fn user_books_pattern(username: &str) -> String {
    format!("{username}_books:*")
}

/// Key for a single book fetched through the owner-scoped route
#[must_use]
pub fn user_book(username: &str, id: i32) -> String {
    format!("{username}_book_cache:{id}")
}

/// Key for a single book fetched through the public route
#[must_use]
pub fn public_book(id: i32) -> String {
    format!("public_book_cache:{id}")
}

/// Key for a page of one user's post listing
#[must_use]
pub fn user_posts_page(username: &str, page: i64, items_per_page: i64) -> String {
    format!("{username}_posts:page_{page}:items_per_page_{items_per_page}")
}

/// Wildcard pattern matching every cached page of a user's post listing
#[must_use]
pub fn user_posts_pattern(username: &str) -> String {
    format!("{username}_posts:*")
}

/// Key for a single post fetched through the owner-scoped route
#[must_use]
pub fn user_post(username: &str, id: i32) -> String {
    format!("{username}_post_cache:{id}")
}
