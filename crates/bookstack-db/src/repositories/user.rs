//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use bookstack_core::entities::{NewUser, User, UserChanges};
use bookstack_core::error::DomainError;
use bookstack_core::traits::{RepoResult, UserRepository};
use bookstack_core::value_objects::PageQuery;

use crate::models::UserModel;

use super::error::{map_db_error, map_fk_violation, tier_not_found, user_not_found};

const USER_COLUMNS: &str = "id, uuid, name, username, email, hashed_password, profile_image_url, \
                            tier_id, is_superuser, created_at, updated_at, is_deleted, deleted_at";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a unique violation on the users table to the right conflict error
fn map_user_conflict(e: sqlx::Error, username: &str, email: &str) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return match db_err.constraint() {
                Some(c) if c.contains("email") => {
                    DomainError::EmailAlreadyExists(email.to_string())
                }
                _ => DomainError::UsernameAlreadyExists(username.to_string()),
            };
        }
    }
    DomainError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self, new_user))]
    async fn create(&self, new_user: NewUser) -> RepoResult<User> {
        let model = sqlx::query_as::<_, UserModel>(&format!(
            r"
            INSERT INTO users (uuid, name, username, email, hashed_password)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {USER_COLUMNS}
            ",
        ))
        .bind(Uuid::new_v4())
        .bind(&new_user.name)
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(&new_user.hashed_password)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_user_conflict(e, &new_user.username, &new_user.email))?;

        Ok(User::from(model))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            r"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE id = $1 AND is_deleted = FALSE
            ",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            r"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE username = $1 AND is_deleted = FALSE
            ",
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_username_any(&self, username: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            r"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE username = $1
            ",
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)
            ",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)
            ",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn page(&self, page: PageQuery) -> RepoResult<Vec<User>> {
        let models = sqlx::query_as::<_, UserModel>(&format!(
            r"
            SELECT {USER_COLUMNS}
            FROM users
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

        Ok(models.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM users WHERE is_deleted = FALSE
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: i32, changes: UserChanges) -> RepoResult<User> {
        let username = changes.username.clone().unwrap_or_default();
        let email = changes.email.clone().unwrap_or_default();

        let model = sqlx::query_as::<_, UserModel>(&format!(
            r"
            UPDATE users
            SET name = COALESCE($2, name),
                username = COALESCE($3, username),
                email = COALESCE($4, email),
                profile_image_url = COALESCE($5, profile_image_url),
                updated_at = NOW()
            WHERE id = $1 AND is_deleted = FALSE
            RETURNING {USER_COLUMNS}
            ",
        ))
        .bind(id)
        .bind(changes.name)
        .bind(changes.username)
        .bind(changes.email)
        .bind(changes.profile_image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_user_conflict(e, &username, &email))?;

        model
            .map(User::from)
            .ok_or_else(|| user_not_found(&id.to_string()))
    }

    #[instrument(skip(self))]
    async fn set_tier(&self, id: i32, tier_id: i32) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET tier_id = $2, updated_at = NOW()
            WHERE id = $1 AND is_deleted = FALSE
            ",
        )
        .bind(id)
        .bind(tier_id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, || tier_not_found(&tier_id.to_string())))?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(&id.to_string()));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: i32) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET is_deleted = TRUE, deleted_at = NOW()
            WHERE id = $1 AND is_deleted = FALSE
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(&id.to_string()));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn hard_delete(&self, id: i32) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM users WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(&id.to_string()));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, username: &str) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT hashed_password FROM users WHERE username = $1 AND is_deleted = FALSE
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgUserRepository>();
    }
}
