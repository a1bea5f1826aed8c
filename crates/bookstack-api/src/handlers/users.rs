//! User handlers
//!
//! Registration, profile reads, owner-scoped updates and deletes, and the
//! superuser-only hard delete and tier assignment.

use axum::{
    extract::{Path, State},
    Json,
};
use bookstack_service::dto::{
    PaginatedResponse, RegisterRequest, UpdateUserRequest, UpdateUserTierRequest, UserResponse,
};
use bookstack_service::UserService;

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Register a new user
///
/// POST /user
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// List users
///
/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.list(page).await?;
    Ok(Json(response))
}

/// Get the authenticated user's own profile
///
/// GET /user/me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_me(auth.user_id).await?;
    Ok(Json(response))
}

/// Get a public profile by username
///
/// GET /user/{username}
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_by_username(&username).await?;
    Ok(Json(response))
}

/// Update a user's own profile
///
/// PATCH /user/{username}
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update(auth.user_id, &username, request).await?;
    Ok(Json(response))
}

/// Soft delete a user's own account
///
/// DELETE /user/{username}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.delete(auth.user_id, &username).await?;
    Ok(NoContent)
}

/// Hard delete an account, superuser only
///
/// DELETE /db_user/{username}
pub async fn hard_delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.hard_delete(auth.user_id, &username).await?;
    Ok(NoContent)
}

/// Assign a tier to a user, superuser only
///
/// PATCH /user/{username}/tier
pub async fn set_user_tier(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
    Json(request): Json<UpdateUserTierRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.set_tier(auth.user_id, &username, request).await?;
    Ok(Json(response))
}
