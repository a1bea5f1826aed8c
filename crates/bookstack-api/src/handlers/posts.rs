//! Post handlers
//!
//! Owner-scoped CRUD mirroring the book endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use bookstack_service::dto::{
    CreatePostRequest, PaginatedResponse, PostResponse, UpdatePostRequest,
};
use bookstack_service::PostService;

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a post under the caller's own account
///
/// POST /{username}/post
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let response = service.create(auth.user_id, &username, request).await?;
    Ok(Created(Json(response)))
}

/// One user's paginated post listing
///
/// GET /{username}/posts
pub async fn list_user_posts(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let response = service.list_by_user(&username, page).await?;
    Ok(Json(response))
}

/// One of a user's posts
///
/// GET /{username}/post/{id}
pub async fn get_user_post(
    State(state): State<AppState>,
    Path((username, id)): Path<(String, i32)>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let response = service.get(&username, id).await?;
    Ok(Json(response))
}

/// Owner-only partial update
///
/// PATCH /{username}/post/{id}
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((username, id)): Path<(String, i32)>,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let response = service.update(auth.user_id, &username, id, request).await?;
    Ok(Json(response))
}

/// Owner-only soft delete
///
/// DELETE /{username}/post/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((username, id)): Path<(String, i32)>,
) -> ApiResult<NoContent> {
    let service = PostService::new(state.service_context());
    service.delete(auth.user_id, &username, id).await?;
    Ok(NoContent)
}

/// Hard delete, superuser only
///
/// DELETE /{username}/db_post/{id}
pub async fn hard_delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((username, id)): Path<(String, i32)>,
) -> ApiResult<NoContent> {
    let service = PostService::new(state.service_context());
    service.hard_delete(auth.user_id, &username, id).await?;
    Ok(NoContent)
}
