//! Tier handlers
//!
//! Superuser-managed writes, public reads.

use axum::{
    extract::{Path, State},
    Json,
};
use bookstack_service::dto::{
    CreateTierRequest, PaginatedResponse, TierResponse, UpdateTierRequest,
};
use bookstack_service::TierService;

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a tier, superuser only
///
/// POST /tier
pub async fn create_tier(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateTierRequest>,
) -> ApiResult<Created<Json<TierResponse>>> {
    let service = TierService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List tiers
///
/// GET /tiers
pub async fn list_tiers(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<TierResponse>>> {
    let service = TierService::new(state.service_context());
    let response = service.list(page).await?;
    Ok(Json(response))
}

/// Get a tier by name
///
/// GET /tier/{name}
pub async fn get_tier(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<TierResponse>> {
    let service = TierService::new(state.service_context());
    let response = service.get_by_name(&name).await?;
    Ok(Json(response))
}

/// Rename a tier, superuser only
///
/// PATCH /tier/{name}
pub async fn update_tier(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(name): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateTierRequest>,
) -> ApiResult<Json<TierResponse>> {
    let service = TierService::new(state.service_context());
    let response = service.update(auth.user_id, &name, request).await?;
    Ok(Json(response))
}

/// Delete a tier, superuser only
///
/// DELETE /tier/{name}
pub async fn delete_tier(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(name): Path<String>,
) -> ApiResult<NoContent> {
    let service = TierService::new(state.service_context());
    service.delete(auth.user_id, &name).await?;
    Ok(NoContent)
}
