//! Rate limit service
//!
//! CRUD for per-tier rate limit rules. Writes are superuser only; the rules
//! are stored configuration and are not enforced on the request path.

use bookstack_core::entities::{NewRateLimit, RateLimitChanges, Tier};
use bookstack_core::{DomainError, PageQuery};
use tracing::{info, instrument};

use crate::dto::{
    CreateRateLimitRequest, PaginatedResponse, RateLimitResponse, UpdateRateLimitRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::{load_caller, require_superuser};

/// Rate limit service
pub struct RateLimitService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RateLimitService<'a> {
    /// Create a new RateLimitService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a rate limit rule under a tier, superuser only
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(
        &self,
        caller_id: i32,
        tier_name: &str,
        request: CreateRateLimitRequest,
    ) -> ServiceResult<RateLimitResponse> {
        let caller = load_caller(self.ctx, caller_id).await?;
        require_superuser(&caller)?;

        let tier = self.resolve_tier(tier_name).await?;

        if self
            .ctx
            .rate_limit_repo()
            .name_exists(&request.name)
            .await?
        {
            return Err(DomainError::RateLimitNameAlreadyExists(request.name).into());
        }

        let rate_limit = self
            .ctx
            .rate_limit_repo()
            .create(NewRateLimit {
                tier_id: tier.id,
                name: request.name,
                path: request.path,
                limit: request.limit,
                period: request.period,
            })
            .await?;

        info!(rate_limit_id = rate_limit.id, tier_id = tier.id, "Rate limit created");

        Ok(RateLimitResponse::from(&rate_limit))
    }

    /// List a tier's rate limit rules, paginated
    #[instrument(skip(self))]
    pub async fn list_by_tier(
        &self,
        tier_name: &str,
        page: PageQuery,
    ) -> ServiceResult<PaginatedResponse<RateLimitResponse>> {
        let tier = self.resolve_tier(tier_name).await?;

        let rate_limits = self
            .ctx
            .rate_limit_repo()
            .page_by_tier(tier.id, page)
            .await?;
        let total_count = self.ctx.rate_limit_repo().count_by_tier(tier.id).await?;

        let data = rate_limits.iter().map(RateLimitResponse::from).collect();
        Ok(PaginatedResponse::new(data, page, total_count))
    }

    /// Get one of a tier's rate limit rules
    #[instrument(skip(self))]
    pub async fn get(&self, tier_name: &str, id: i32) -> ServiceResult<RateLimitResponse> {
        let tier = self.resolve_tier(tier_name).await?;

        let rate_limit = self
            .ctx
            .rate_limit_repo()
            .find(tier.id, id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::RateLimitNotFound))?;

        Ok(RateLimitResponse::from(&rate_limit))
    }

    /// Update a rate limit rule, superuser only
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        caller_id: i32,
        tier_name: &str,
        id: i32,
        request: UpdateRateLimitRequest,
    ) -> ServiceResult<RateLimitResponse> {
        let caller = load_caller(self.ctx, caller_id).await?;
        require_superuser(&caller)?;

        let tier = self.resolve_tier(tier_name).await?;

        let current = self
            .ctx
            .rate_limit_repo()
            .find(tier.id, id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::RateLimitNotFound))?;

        let changes = RateLimitChanges {
            name: request.name,
            path: request.path,
            limit: request.limit,
            period: request.period,
        };

        if changes.is_empty() {
            return Err(ServiceError::validation("No fields to update"));
        }

        if let Some(new_name) = changes.name.as_deref() {
            if new_name != current.name
                && self.ctx.rate_limit_repo().name_exists(new_name).await?
            {
                return Err(
                    DomainError::RateLimitNameAlreadyExists(new_name.to_string()).into(),
                );
            }
        }

        let updated = self
            .ctx
            .rate_limit_repo()
            .update(tier.id, id, changes)
            .await?;

        info!(rate_limit_id = id, tier_id = tier.id, "Rate limit updated");

        Ok(RateLimitResponse::from(&updated))
    }

    /// Delete a rate limit rule, superuser only
    #[instrument(skip(self))]
    pub async fn delete(&self, caller_id: i32, tier_name: &str, id: i32) -> ServiceResult<()> {
        let caller = load_caller(self.ctx, caller_id).await?;
        require_superuser(&caller)?;

        let tier = self.resolve_tier(tier_name).await?;

        self.ctx.rate_limit_repo().delete(tier.id, id).await?;

        info!(rate_limit_id = id, tier_id = tier.id, "Rate limit deleted");
        Ok(())
    }

    async fn resolve_tier(&self, name: &str) -> ServiceResult<Tier> {
        self.ctx
            .tier_repo()
            .find_by_name(name)
            .await?
            .ok_or_else(|| ServiceError::Domain(DomainError::TierNotFound(name.to_string())))
    }
}
