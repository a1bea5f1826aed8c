//! Book entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A book record owned by the user who created it
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: i32,
    pub uuid: Uuid,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub isbn: Option<String>,
    pub publication_year: Option<i32>,
    pub genre: Option<String>,
    pub pages: Option<i32>,
    pub cover_image_url: Option<String>,
    pub folder_path: Option<String>,
    pub file_size_bytes: Option<i64>,
    pub content_hash: Option<String>,
    pub created_by_user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Fields for inserting a new book
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub isbn: Option<String>,
    pub publication_year: Option<i32>,
    pub genre: Option<String>,
    pub pages: Option<i32>,
    pub cover_image_url: Option<String>,
    pub folder_path: Option<String>,
    pub file_size_bytes: Option<i64>,
    pub content_hash: Option<String>,
    pub created_by_user_id: i32,
}

/// Partial update for a book; only provided fields are applied
#[derive(Debug, Clone, Default)]
pub struct BookChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub isbn: Option<String>,
    pub publication_year: Option<i32>,
    pub genre: Option<String>,
    pub pages: Option<i32>,
    pub cover_image_url: Option<String>,
}

impl BookChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.description.is_none()
            && self.isbn.is_none()
            && self.publication_year.is_none()
            && self.genre.is_none()
            && self.pages.is_none()
            && self.cover_image_url.is_none()
    }
}
