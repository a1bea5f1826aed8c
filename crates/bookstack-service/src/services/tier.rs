//! Tier service
//!
//! Superuser-managed writes, public reads. Tiers are hard-deleted; deleting
//! one still referenced by users or rate limits fails with a conflict.

use bookstack_core::entities::{NewTier, TierChanges};
use bookstack_core::{DomainError, PageQuery};
use tracing::{info, instrument};

use crate::dto::{CreateTierRequest, PaginatedResponse, TierResponse, UpdateTierRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::{load_caller, require_superuser};

/// Tier service
pub struct TierService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TierService<'a> {
    /// Create a new TierService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a tier, superuser only
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(
        &self,
        caller_id: i32,
        request: CreateTierRequest,
    ) -> ServiceResult<TierResponse> {
        let caller = load_caller(self.ctx, caller_id).await?;
        require_superuser(&caller)?;

        if self.ctx.tier_repo().name_exists(&request.name).await? {
            return Err(DomainError::TierNameAlreadyExists(request.name).into());
        }

        let tier = self
            .ctx
            .tier_repo()
            .create(NewTier { name: request.name })
            .await?;

        info!(tier_id = tier.id, "Tier created");

        Ok(TierResponse::from(&tier))
    }

    /// List tiers, paginated
    #[instrument(skip(self))]
    pub async fn list(&self, page: PageQuery) -> ServiceResult<PaginatedResponse<TierResponse>> {
        let tiers = self.ctx.tier_repo().page(page).await?;
        let total_count = self.ctx.tier_repo().count().await?;

        let data = tiers.iter().map(TierResponse::from).collect();
        Ok(PaginatedResponse::new(data, page, total_count))
    }

    /// Get a tier by name
    #[instrument(skip(self))]
    pub async fn get_by_name(&self, name: &str) -> ServiceResult<TierResponse> {
        let tier = self.resolve_tier(name).await?;
        Ok(TierResponse::from(&tier))
    }

    /// Rename a tier, superuser only
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        caller_id: i32,
        name: &str,
        request: UpdateTierRequest,
    ) -> ServiceResult<TierResponse> {
        let caller = load_caller(self.ctx, caller_id).await?;
        require_superuser(&caller)?;

        let tier = self.resolve_tier(name).await?;

        let changes = TierChanges {
            name: request.name,
        };

        let Some(new_name) = changes.name.as_deref() else {
            return Err(ServiceError::validation("No fields to update"));
        };

        if new_name != tier.name && self.ctx.tier_repo().name_exists(new_name).await? {
            return Err(DomainError::TierNameAlreadyExists(new_name.to_string()).into());
        }

        let updated = self.ctx.tier_repo().update(tier.id, changes).await?;

        info!(tier_id = updated.id, "Tier updated");

        Ok(TierResponse::from(&updated))
    }

    /// Delete a tier, superuser only. Fails with 409 while users or rate
    /// limits reference it.
    #[instrument(skip(self))]
    pub async fn delete(&self, caller_id: i32, name: &str) -> ServiceResult<()> {
        let caller = load_caller(self.ctx, caller_id).await?;
        require_superuser(&caller)?;

        let tier = self.resolve_tier(name).await?;

        self.ctx.tier_repo().delete(tier.id).await?;

        info!(tier_id = tier.id, "Tier deleted");
        Ok(())
    }

    async fn resolve_tier(&self, name: &str) -> ServiceResult<bookstack_core::entities::Tier> {
        self.ctx
            .tier_repo()
            .find_by_name(name)
            .await?
            .ok_or_else(|| ServiceError::Domain(DomainError::TierNotFound(name.to_string())))
    }
}
