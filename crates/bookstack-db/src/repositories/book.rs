//! PostgreSQL implementation of BookRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use bookstack_core::entities::{Book, BookChanges, NewBook};
use bookstack_core::error::DomainError;
use bookstack_core::traits::{BookRepository, RepoResult};
use bookstack_core::value_objects::PageQuery;

use crate::models::BookModel;

use super::error::{book_not_found, map_db_error, map_unique_violation};

const BOOK_COLUMNS: &str = "id, uuid, title, author, description, isbn, publication_year, genre, \
                            pages, cover_image_url, folder_path, file_size_bytes, content_hash, \
                            created_by_user_id, created_at, updated_at, is_deleted, deleted_at";

/// PostgreSQL implementation of BookRepository
#[derive(Clone)]
pub struct PgBookRepository {
    pool: PgPool,
}

impl PgBookRepository {
    /// Create a new PgBookRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    #[instrument(skip(self, new_book))]
    async fn create(&self, new_book: NewBook) -> RepoResult<Book> {
        let isbn = new_book.isbn.clone();
        let model = sqlx::query_as::<_, BookModel>(&format!(
            r"
            INSERT INTO books (uuid, title, author, description, isbn, publication_year, genre,
                               pages, cover_image_url, folder_path, file_size_bytes, content_hash,
                               created_by_user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING {BOOK_COLUMNS}
            ",
        ))
        .bind(Uuid::new_v4())
        .bind(&new_book.title)
        .bind(&new_book.author)
        .bind(&new_book.description)
        .bind(&new_book.isbn)
        .bind(new_book.publication_year)
        .bind(&new_book.genre)
        .bind(new_book.pages)
        .bind(&new_book.cover_image_url)
        .bind(&new_book.folder_path)
        .bind(new_book.file_size_bytes)
        .bind(&new_book.content_hash)
        .bind(new_book.created_by_user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::IsbnAlreadyExists(isbn.unwrap_or_default())))?;

        Ok(Book::from(model))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Book>> {
        let result = sqlx::query_as::<_, BookModel>(&format!(
            r"
            SELECT {BOOK_COLUMNS}
            FROM books
            WHERE id = $1 AND is_deleted = FALSE
            ",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Book::from))
    }

    #[instrument(skip(self))]
    async fn find_owned(&self, owner_id: i32, id: i32) -> RepoResult<Option<Book>> {
        let result = sqlx::query_as::<_, BookModel>(&format!(
            r"
            SELECT {BOOK_COLUMNS}
            FROM books
            WHERE id = $1 AND created_by_user_id = $2 AND is_deleted = FALSE
            ",
        ))
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Book::from))
    }

    #[instrument(skip(self))]
    async fn find_owned_any(&self, owner_id: i32, id: i32) -> RepoResult<Option<Book>> {
        let result = sqlx::query_as::<_, BookModel>(&format!(
            r"
            SELECT {BOOK_COLUMNS}
            FROM books
            WHERE id = $1 AND created_by_user_id = $2
            ",
        ))
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Book::from))
    }

    #[instrument(skip(self))]
    async fn isbn_exists(&self, isbn: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM books WHERE isbn = $1 AND is_deleted = FALSE)
            ",
        )
        .bind(isbn)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn page(&self, page: PageQuery) -> RepoResult<Vec<Book>> {
        let models = sqlx::query_as::<_, BookModel>(&format!(
            r"
            SELECT {BOOK_COLUMNS}
            FROM books
            WHERE is_deleted = FALSE
            ORDER BY id
            LIMIT $1 OFFSET $2
            ",
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Book::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM books WHERE is_deleted = FALSE
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn page_by_owner(&self, owner_id: i32, page: PageQuery) -> RepoResult<Vec<Book>> {
        let models = sqlx::query_as::<_, BookModel>(&format!(
            r"
            SELECT {BOOK_COLUMNS}
            FROM books
            WHERE created_by_user_id = $1 AND is_deleted = FALSE
            ORDER BY id
            LIMIT $2 OFFSET $3
            ",
        ))
        .bind(owner_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Book::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_by_owner(&self, owner_id: i32) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM books WHERE created_by_user_id = $1 AND is_deleted = FALSE
            ",
        )
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, owner_id: i32, id: i32, changes: BookChanges) -> RepoResult<Book> {
        let isbn = changes.isbn.clone();
        let model = sqlx::query_as::<_, BookModel>(&format!(
            r"
            UPDATE books
            SET title = COALESCE($3, title),
                author = COALESCE($4, author),
                description = COALESCE($5, description),
                isbn = COALESCE($6, isbn),
                publication_year = COALESCE($7, publication_year),
                genre = COALESCE($8, genre),
                pages = COALESCE($9, pages),
                cover_image_url = COALESCE($10, cover_image_url),
                updated_at = NOW()
            WHERE id = $1 AND created_by_user_id = $2 AND is_deleted = FALSE
            RETURNING {BOOK_COLUMNS}
            ",
        ))
        .bind(id)
        .bind(owner_id)
        .bind(changes.title)
        .bind(changes.author)
        .bind(changes.description)
        .bind(changes.isbn)
        .bind(changes.publication_year)
        .bind(changes.genre)
        .bind(changes.pages)
        .bind(changes.cover_image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::IsbnAlreadyExists(isbn.unwrap_or_default())))?;

        model.map(Book::from).ok_or_else(|| book_not_found(id))
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, owner_id: i32, id: i32) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE books
            SET is_deleted = TRUE, deleted_at = NOW()
            WHERE id = $1 AND created_by_user_id = $2 AND is_deleted = FALSE
            ",
        )
        .bind(id)
        .bind(owner_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(book_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn hard_delete(&self, owner_id: i32, id: i32) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM books WHERE id = $1 AND created_by_user_id = $2
            ",
        )
        .bind(id)
        .bind(owner_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(book_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgBookRepository>();
    }
}
