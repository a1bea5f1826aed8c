//! Rate limit handlers
//!
//! CRUD for per-tier rate limit rules. Writes are superuser only.

use axum::{
    extract::{Path, State},
    Json,
};
use bookstack_service::dto::{
    CreateRateLimitRequest, PaginatedResponse, RateLimitResponse, UpdateRateLimitRequest,
};
use bookstack_service::RateLimitService;

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a rate limit rule under a tier, superuser only
///
/// POST /tier/{name}/rate_limit
pub async fn create_rate_limit(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(tier_name): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateRateLimitRequest>,
) -> ApiResult<Created<Json<RateLimitResponse>>> {
    let service = RateLimitService::new(state.service_context());
    let response = service.create(auth.user_id, &tier_name, request).await?;
    Ok(Created(Json(response)))
}

/// List a tier's rate limit rules
///
/// GET /tier/{name}/rate_limits
pub async fn list_rate_limits(
    State(state): State<AppState>,
    Path(tier_name): Path<String>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<RateLimitResponse>>> {
    let service = RateLimitService::new(state.service_context());
    let response = service.list_by_tier(&tier_name, page).await?;
    Ok(Json(response))
}

/// Get one of a tier's rate limit rules
///
/// GET /tier/{name}/rate_limit/{id}
pub async fn get_rate_limit(
    State(state): State<AppState>,
    Path((tier_name, id)): Path<(String, i32)>,
) -> ApiResult<Json<RateLimitResponse>> {
    let service = RateLimitService::new(state.service_context());
    let response = service.get(&tier_name, id).await?;
    Ok(Json(response))
}

/// Update a rate limit rule, superuser only
///
/// PATCH /tier/{name}/rate_limit/{id}
pub async fn update_rate_limit(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((tier_name, id)): Path<(String, i32)>,
    ValidatedJson(request): ValidatedJson<UpdateRateLimitRequest>,
) -> ApiResult<Json<RateLimitResponse>> {
    let service = RateLimitService::new(state.service_context());
    let response = service
        .update(auth.user_id, &tier_name, id, request)
        .await?;
    Ok(Json(response))
}

/// Delete a rate limit rule, superuser only
///
/// DELETE /tier/{name}/rate_limit/{id}
pub async fn delete_rate_limit(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((tier_name, id)): Path<(String, i32)>,
) -> ApiResult<NoContent> {
    let service = RateLimitService::new(state.service_context());
    service.delete(auth.user_id, &tier_name, id).await?;
    Ok(NoContent)
}
