//! Post service
//!
//! Same owner-scoped shape as books, without a public listing or a
//! uniqueness guard.

use bookstack_cache::keys;
use bookstack_core::entities::{NewPost, PostChanges};
use bookstack_core::{DomainError, PageQuery};
use tracing::{info, instrument};

use crate::dto::{CreatePostRequest, PaginatedResponse, PostResponse, UpdatePostRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::{load_caller, require_superuser, resolve_user};

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a post under the caller's own account
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        caller_id: i32,
        username: &str,
        request: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let owner = resolve_user(self.ctx, username).await?;

        if caller_id != owner.id {
            return Err(DomainError::NotResourceOwner.into());
        }

        let post = self
            .ctx
            .post_repo()
            .create(NewPost {
                title: request.title,
                text: request.text,
                media_url: request.media_url,
                created_by_user_id: owner.id,
            })
            .await?;

        self.ctx
            .response_cache()
            .invalidate_pattern(&keys::user_posts_pattern(username))
            .await;

        info!(post_id = post.id, user_id = owner.id, "Post created");

        Ok(PostResponse::from(&post))
    }

    /// One user's paginated listing, cached without expiry (invalidated on
    /// write)
    #[instrument(skip(self))]
    pub async fn list_by_user(
        &self,
        username: &str,
        page: PageQuery,
    ) -> ServiceResult<PaginatedResponse<PostResponse>> {
        let owner = resolve_user(self.ctx, username).await?;

        let cache = self.ctx.response_cache();
        let key = keys::user_posts_page(username, page.page, page.items_per_page);

        if let Some(cached) = cache.get_json(&key).await {
            return Ok(cached);
        }

        let posts = self.ctx.post_repo().page_by_owner(owner.id, page).await?;
        let total_count = self.ctx.post_repo().count_by_owner(owner.id).await?;

        let data = posts.iter().map(PostResponse::from).collect();
        let response = PaginatedResponse::new(data, page, total_count);

        cache.put(&key, &response, None).await;

        Ok(response)
    }

    /// One of a user's posts, cached
    #[instrument(skip(self))]
    pub async fn get(&self, username: &str, id: i32) -> ServiceResult<PostResponse> {
        let owner = resolve_user(self.ctx, username).await?;

        let cache = self.ctx.response_cache();
        let key = keys::user_post(username, id);

        if let Some(cached) = cache.get_json(&key).await {
            return Ok(cached);
        }

        let post = self
            .ctx
            .post_repo()
            .find_owned(owner.id, id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::PostNotFound(id)))?;

        let response = PostResponse::from(&post);
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
        request: UpdatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let owner = resolve_user(self.ctx, username).await?;

        if caller_id != owner.id {
            return Err(DomainError::NotResourceOwner.into());
        }

        let changes = PostChanges {
            title: request.title,
            text: request.text,
            media_url: request.media_url,
        };

        if changes.is_empty() {
            return Err(ServiceError::validation("No fields to update"));
        }

        let post = self.ctx.post_repo().update(owner.id, id, changes).await?;

        self.invalidate_post(username, id).await;

        info!(post_id = id, user_id = owner.id, "Post updated");

        Ok(PostResponse::from(&post))
    }

    /// Owner-only soft delete
    #[instrument(skip(self))]
    pub async fn delete(&self, caller_id: i32, username: &str, id: i32) -> ServiceResult<()> {
        let owner = resolve_user(self.ctx, username).await?;

        if caller_id != owner.id {
            return Err(DomainError::NotResourceOwner.into());
        }

        self.ctx.post_repo().soft_delete(owner.id, id).await?;

        self.invalidate_post(username, id).await;

        info!(post_id = id, user_id = owner.id, "Post soft deleted");
        Ok(())
    }

    /// Hard delete, superuser only
    #[instrument(skip(self))]
    pub async fn hard_delete(&self, caller_id: i32, username: &str, id: i32) -> ServiceResult<()> {
        let caller = load_caller(self.ctx, caller_id).await?;
        require_superuser(&caller)?;

        let owner = resolve_user(self.ctx, username).await?;

        self.ctx
            .post_repo()
            .find_owned_any(owner.id, id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::PostNotFound(id)))?;

        self.ctx.post_repo().hard_delete(owner.id, id).await?;

        self.invalidate_post(username, id).await;

        info!(post_id = id, user_id = owner.id, "Post hard deleted");
        Ok(())
    }

    async fn invalidate_post(&self, username: &str, id: i32) {
        let cache = self.ctx.response_cache();
        let item_key = keys::user_post(username, id);

        cache.invalidate(&[&item_key]).await;
        cache
            .invalidate_pattern(&keys::user_posts_pattern(username))
            .await;
    }
}
