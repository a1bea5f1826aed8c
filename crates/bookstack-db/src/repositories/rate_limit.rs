//! PostgreSQL implementation of RateLimitRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use bookstack_core::entities::{NewRateLimit, RateLimit, RateLimitChanges};
use bookstack_core::error::DomainError;
use bookstack_core::traits::{RateLimitRepository, RepoResult};
use bookstack_core::value_objects::PageQuery;

use crate::models::RateLimitModel;

use super::error::{map_db_error, map_unique_violation};

// "limit" is a reserved word, hence the quoting
const RATE_LIMIT_COLUMNS: &str =
    r#"id, tier_id, name, path, "limit", period, created_at, updated_at"#;

/// PostgreSQL implementation of RateLimitRepository
#[derive(Clone)]
pub struct PgRateLimitRepository {
    pool: PgPool,
}

impl PgRateLimitRepository {
    /// Create a new PgRateLimitRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RateLimitRepository for PgRateLimitRepository {
    #[instrument(skip(self))]
    async fn create(&self, new_rate_limit: NewRateLimit) -> RepoResult<RateLimit> {
        let name = new_rate_limit.name.clone();
        let model = sqlx::query_as::<_, RateLimitModel>(&format!(
            r#"
            INSERT INTO rate_limits (tier_id, name, path, "limit", period)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {RATE_LIMIT_COLUMNS}
            "#,
        ))
        .bind(new_rate_limit.tier_id)
        .bind(&new_rate_limit.name)
        .bind(&new_rate_limit.path)
        .bind(new_rate_limit.limit)
        .bind(new_rate_limit.period)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::RateLimitNameAlreadyExists(name)))?;

        Ok(RateLimit::from(model))
    }

    #[instrument(skip(self))]
    async fn find(&self, tier_id: i32, id: i32) -> RepoResult<Option<RateLimit>> {
        let result = sqlx::query_as::<_, RateLimitModel>(&format!(
            r"
            SELECT {RATE_LIMIT_COLUMNS}
            FROM rate_limits
            WHERE id = $1 AND tier_id = $2
            ",
        ))
        .bind(id)
        .bind(tier_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(RateLimit::from))
    }

    #[instrument(skip(self))]
    async fn name_exists(&self, name: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM rate_limits WHERE name = $1)
            ",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn page_by_tier(&self, tier_id: i32, page: PageQuery) -> RepoResult<Vec<RateLimit>> {
        let models = sqlx::query_as::<_, RateLimitModel>(&format!(
            r"
            SELECT {RATE_LIMIT_COLUMNS}
            FROM rate_limits
            WHERE tier_id = $1
            ORDER BY id
            LIMIT $2 OFFSET $3
            ",
        ))
        .bind(tier_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(RateLimit::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_by_tier(&self, tier_id: i32) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM rate_limits WHERE tier_id = $1
            ",
        )
        .bind(tier_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn update(
        &self,
        tier_id: i32,
        id: i32,
        changes: RateLimitChanges,
    ) -> RepoResult<RateLimit> {
        let name = changes.name.clone().unwrap_or_default();
        let model = sqlx::query_as::<_, RateLimitModel>(&format!(
            r#"
            UPDATE rate_limits
            SET name = COALESCE($3, name),
                path = COALESCE($4, path),
                "limit" = COALESCE($5, "limit"),
                period = COALESCE($6, period),
                updated_at = NOW()
            WHERE id = $1 AND tier_id = $2
            RETURNING {RATE_LIMIT_COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(tier_id)
        .bind(changes.name)
        .bind(changes.path)
        .bind(changes.limit)
        .bind(changes.period)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::RateLimitNameAlreadyExists(name)))?;

        model
            .map(RateLimit::from)
            .ok_or(DomainError::RateLimitNotFound)
    }

    #[instrument(skip(self))]
    async fn delete(&self, tier_id: i32, id: i32) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM rate_limits WHERE id = $1 AND tier_id = $2
            ",
        )
        .bind(id)
        .bind(tier_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::RateLimitNotFound);
        }

        Ok(())
    }
}
