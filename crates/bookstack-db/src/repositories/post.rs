//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use bookstack_core::entities::{NewPost, Post, PostChanges};
use bookstack_core::traits::{PostRepository, RepoResult};
use bookstack_core::value_objects::PageQuery;

use crate::models::PostModel;

use super::error::{map_db_error, post_not_found};

const POST_COLUMNS: &str = "id, uuid, title, text, media_url, created_by_user_id, created_at, \
                            updated_at, is_deleted, deleted_at";

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self, new_post))]
    async fn create(&self, new_post: NewPost) -> RepoResult<Post> {
        let model = sqlx::query_as::<_, PostModel>(&format!(
            r"
            INSERT INTO posts (uuid, title, text, media_url, created_by_user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {POST_COLUMNS}
            ",
        ))
        .bind(Uuid::new_v4())
        .bind(&new_post.title)
        .bind(&new_post.text)
        .bind(&new_post.media_url)
        .bind(new_post.created_by_user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Post::from(model))
    }

    #[instrument(skip(self))]
    async fn find_owned(&self, owner_id: i32, id: i32) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(&format!(
            r"
            SELECT {POST_COLUMNS}
            FROM posts
            WHERE id = $1 AND created_by_user_id = $2 AND is_deleted = FALSE
            ",
        ))
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn find_owned_any(&self, owner_id: i32, id: i32) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(&format!(
            r"
            SELECT {POST_COLUMNS}
            FROM posts
            WHERE id = $1 AND created_by_user_id = $2
            ",
        ))
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn page_by_owner(&self, owner_id: i32, page: PageQuery) -> RepoResult<Vec<Post>> {
        let models = sqlx::query_as::<_, PostModel>(&format!(
            r"
            SELECT {POST_COLUMNS}
            FROM posts
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

        Ok(models.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_by_owner(&self, owner_id: i32) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM posts WHERE created_by_user_id = $1 AND is_deleted = FALSE
            ",
        )
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, owner_id: i32, id: i32, changes: PostChanges) -> RepoResult<Post> {
        let model = sqlx::query_as::<_, PostModel>(&format!(
            r"
            UPDATE posts
            SET title = COALESCE($3, title),
                text = COALESCE($4, text),
                media_url = COALESCE($5, media_url),
                updated_at = NOW()
            WHERE id = $1 AND created_by_user_id = $2 AND is_deleted = FALSE
            RETURNING {POST_COLUMNS}
            ",
        ))
        .bind(id)
        .bind(owner_id)
        .bind(changes.title)
        .bind(changes.text)
        .bind(changes.media_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.map(Post::from).ok_or_else(|| post_not_found(id))
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, owner_id: i32, id: i32) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE posts
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
            return Err(post_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn hard_delete(&self, owner_id: i32, id: i32) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM posts WHERE id = $1 AND created_by_user_id = $2
            ",
        )
        .bind(id)
        .bind(owner_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(id));
        }

        Ok(())
    }
}
