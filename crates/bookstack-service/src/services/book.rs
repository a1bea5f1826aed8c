//! Book service
//!
//! Owner-scoped CRUD plus the public listing and single fetch. Reads go
//! through the response cache; writes invalidate the keyed entries and the
//! owner's list pattern.

use bookstack_cache::keys;
use bookstack_core::entities::{BookChanges, NewBook};
use bookstack_core::{DomainError, PageQuery};
use tracing::{info, instrument};

use crate::dto::{BookResponse, CreateBookRequest, PaginatedResponse, UpdateBookRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::{load_caller, require_superuser, resolve_user};

/// Book service
pub struct BookService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BookService<'a> {
    /// Create a new BookService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a book under the caller's own account
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create(
        &self,
        caller_id: i32,
        username: &str,
        request: CreateBookRequest,
    ) -> ServiceResult<BookResponse> {
        let owner = resolve_user(self.ctx, username).await?;

        if caller_id != owner.id {
            return Err(DomainError::NotResourceOwner.into());
        }

        if let Some(isbn) = request.isbn.as_deref() {
            if self.ctx.book_repo().isbn_exists(isbn).await? {
                return Err(DomainError::IsbnAlreadyExists(isbn.to_string()).into());
            }
        }

        let book = self
            .ctx
            .book_repo()
            .create(NewBook {
                title: request.title,
                author: request.author,
                description: request.description,
                isbn: request.isbn,
                publication_year: request.publication_year,
                genre: request.genre,
                pages: request.pages,
                cover_image_url: request.cover_image_url,
                folder_path: request.folder_path,
                file_size_bytes: request.file_size_bytes,
                content_hash: request.content_hash,
                created_by_user_id: owner.id,
            })
            .await?;

        self.ctx
            .response_cache()
            .invalidate_pattern(&keys::user_books_pattern(username))
            .await;

        info!(book_id = book.id, user_id = owner.id, "Book created");

        Ok(BookResponse::from(&book))
    }

    /// Public paginated listing, cached with the list TTL
    #[instrument(skip(self))]
    pub async fn list_public(
        &self,
        page: PageQuery,
    ) -> ServiceResult<PaginatedResponse<BookResponse>> {
        let cache = self.ctx.response_cache();
        let key = keys::public_books_page(page.page, page.items_per_page);

        if let Some(cached) = cache.get_json(&key).await {
            return Ok(cached);
        }

        let books = self.ctx.book_repo().page(page).await?;
        let total_count = self.ctx.book_repo().count().await?;

        let data = books.iter().map(BookResponse::from).collect();
        let response = PaginatedResponse::new(data, page, total_count);

        cache.put(&key, &response, Some(cache.list_ttl())).await;

        Ok(response)
    }

    /// One user's paginated listing, cached without expiry (invalidated on
    /// write)
    #[instrument(skip(self))]
    pub async fn list_by_user(
        &self,
        username: &str,
        page: PageQuery,
    ) -> ServiceResult<PaginatedResponse<BookResponse>> {
        let owner = resolve_user(self.ctx, username).await?;

        let cache = self.ctx.response_cache();
        let key = keys::user_books_page(username, page.page, page.items_per_page);

        if let Some(cached) = cache.get_json(&key).await {
            return Ok(cached);
        }

        let books = self.ctx.book_repo().page_by_owner(owner.id, page).await?;
        let total_count = self.ctx.book_repo().count_by_owner(owner.id).await?;

        let data = books.iter().map(BookResponse::from).collect();
        let response = PaginatedResponse::new(data, page, total_count);

        cache.put(&key, &response, None).await;

        Ok(response)
    }

    /// One of a user's books, cached under the owner-scoped key
    #[instrument(skip(self))]
    pub async fn get(&self, username: &str, id: i32) -> ServiceResult<BookResponse> {
        let owner = resolve_user(self.ctx, username).await?;

        let cache = self.ctx.response_cache();
        let key = keys::user_book(username, id);

        if let Some(cached) = cache.get_json(&key).await {
            return Ok(cached);
        }

        let book = self
            .ctx
            .book_repo()
            .find_owned(owner.id, id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::BookNotFound(id)))?;

        let response = BookResponse::from(&book);
        cache.put(&key, &response, Some(cache.default_ttl())).await;

        Ok(response)
    }

    /// Public single fetch by id, cached under the public key
    #[instrument(skip(self))]
    pub async fn get_public(&self, id: i32) -> ServiceResult<BookResponse> {
        let cache = self.ctx.response_cache();
        let key = keys::public_book(id);

        if let Some(cached) = cache.get_json(&key).await {
            return Ok(cached);
        }

        let book = self
            .ctx
            .book_repo()
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::BookNotFound(id)))?;

        let response = BookResponse::from(&book);
        cache.put(&key, &response, Some(cache.default_ttl())).await;

        Ok(response)
    }

    /// Owner-only partial update
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        caller_id: i32,
        username: &str,
        id: i32,
        request: UpdateBookRequest,
    ) -> ServiceResult<BookResponse> {
        let owner = resolve_user(self.ctx, username).await?;

        if caller_id != owner.id {
            return Err(DomainError::NotResourceOwner.into());
        }

        let changes = BookChanges {
            title: request.title,
            author: request.author,
            description: request.description,
            isbn: request.isbn,
            publication_year: request.publication_year,
            genre: request.genre,
            pages: request.pages,
            cover_image_url: request.cover_image_url,
        };

        if changes.is_empty() {
            return Err(ServiceError::validation("No fields to update"));
        }

        // Duplicate pre-check only when the ISBN actually changes
        if let Some(isbn) = changes.isbn.as_deref() {
            let current = self
                .ctx
                .book_repo()
                .find_owned(owner.id, id)
                .await?
                .ok_or(ServiceError::Domain(DomainError::BookNotFound(id)))?;

            if current.isbn.as_deref() != Some(isbn)
                && self.ctx.book_repo().isbn_exists(isbn).await?
            {
                return Err(DomainError::IsbnAlreadyExists(isbn.to_string()).into());
            }
        }

        let book = self.ctx.book_repo().update(owner.id, id, changes).await?;

        self.invalidate_book(username, id).await;

        info!(book_id = id, user_id = owner.id, "Book updated");

        Ok(BookResponse::from(&book))
    }

    /// Owner-only soft delete
    #[instrument(skip(self))]
    pub async fn delete(&self, caller_id: i32, username: &str, id: i32) -> ServiceResult<()> {
        let owner = resolve_user(self.ctx, username).await?;

        if caller_id != owner.id {
            return Err(DomainError::NotResourceOwner.into());
        }

        self.ctx.book_repo().soft_delete(owner.id, id).await?;

        self.invalidate_book(username, id).await;

        info!(book_id = id, user_id = owner.id, "Book soft deleted");
        Ok(())
    }

    /// Hard delete, superuser only. Soft-deleted rows are still visible to
    /// this path.
    #[instrument(skip(self))]
    pub async fn hard_delete(&self, caller_id: i32, username: &str, id: i32) -> ServiceResult<()> {
        let caller = load_caller(self.ctx, caller_id).await?;
        require_superuser(&caller)?;

        let owner = resolve_user(self.ctx, username).await?;

        self.ctx
            .book_repo()
            .find_owned_any(owner.id, id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::BookNotFound(id)))?;

        self.ctx.book_repo().hard_delete(owner.id, id).await?;

        self.invalidate_book(username, id).await;

        info!(book_id = id, user_id = owner.id, "Book hard deleted");
        Ok(())
    }

    /// Drop both single-item keys and every cached page of the owner's
    /// listing
    async fn invalidate_book(&self, username: &str, id: i32) {
        let cache = self.ctx.response_cache();
        let user_key = keys::user_book(username, id);
        let public_key = keys::public_book(id);

        cache.invalidate(&[&user_key, &public_key]).await;
        cache
            .invalidate_pattern(&keys::user_books_pattern(username))
            .await;
    }
}
