//! PostgreSQL implementation of TierRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use bookstack_core::entities::{NewTier, Tier, TierChanges};
use bookstack_core::error::DomainError;
use bookstack_core::traits::{RepoResult, TierRepository};
use bookstack_core::value_objects::PageQuery;

use crate::models::TierModel;

use super::error::{map_db_error, map_fk_violation, map_unique_violation, tier_not_found};

/// PostgreSQL implementation of TierRepository
#[derive(Clone)]
pub struct PgTierRepository {
    pool: PgPool,
}

impl PgTierRepository {
    /// Create a new PgTierRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TierRepository for PgTierRepository {
    #[instrument(skip(self))]
    async fn create(&self, new_tier: NewTier) -> RepoResult<Tier> {
        let name = new_tier.name.clone();
        let model = sqlx::query_as::<_, TierModel>(
            r"
            INSERT INTO tiers (name)
            VALUES ($1)
            RETURNING id, name, created_at, updated_at
            ",
        )
        .bind(&new_tier.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::TierNameAlreadyExists(name)))?;

        Ok(Tier::from(model))
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Tier>> {
        let result = sqlx::query_as::<_, TierModel>(
            r"
            SELECT id, name, created_at, updated_at
            FROM tiers
            WHERE name = $1
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Tier::from))
    }

    #[instrument(skip(self))]
    async fn name_exists(&self, name: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM tiers WHERE name = $1)
            ",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn page(&self, page: PageQuery) -> RepoResult<Vec<Tier>> {
        let models = sqlx::query_as::<_, TierModel>(
            r"
            SELECT id, name, created_at, updated_at
            FROM tiers
            ORDER BY id
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Tier::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM tiers
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn update(&self, id: i32, changes: TierChanges) -> RepoResult<Tier> {
        let name = changes.name.clone().unwrap_or_default();
        let model = sqlx::query_as::<_, TierModel>(
            r"
            UPDATE tiers
            SET name = COALESCE($2, name), updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(changes.name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::TierNameAlreadyExists(name)))?;

        model
            .map(Tier::from)
            .ok_or_else(|| tier_not_found(&id.to_string()))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM tiers WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, || DomainError::TierInUse))?;

        if result.rows_affected() == 0 {
            return Err(tier_not_found(&id.to_string()));
        }

        Ok(())
    }
}
