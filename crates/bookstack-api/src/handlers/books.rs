//! Book handlers
//!
//! Owner-scoped CRUD plus the public cached listing and single fetch.

use axum::{
    extract::{Path, State},
    Json,
};
use bookstack_service::dto::{
    BookResponse, CreateBookRequest, PaginatedResponse, UpdateBookRequest,
};
use bookstack_service::BookService;

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Public paginated book listing
///
/// GET /books
pub async fn list_books(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<BookResponse>>> {
    let service = BookService::new(state.service_context());
    let response = service.list_public(page).await?;
    Ok(Json(response))
}

/// Create a book under the caller's own account
///
/// POST /{username}/book
pub async fn create_book(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateBookRequest>,
) -> ApiResult<Created<Json<BookResponse>>> {
    let service = BookService::new(state.service_context());
    let response = service.create(auth.user_id, &username, request).await?;
    Ok(Created(Json(response)))
}

/// One user's paginated book listing
///
/// GET /{username}/books
pub async fn list_user_books(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<BookResponse>>> {
    let service = BookService::new(state.service_context());
    let response = service.list_by_user(&username, page).await?;
    Ok(Json(response))
}

/// One of a user's books
///
/// GET /{username}/book/{id}
pub async fn get_user_book(
    State(state): State<AppState>,
    Path((username, id)): Path<(String, i32)>,
) -> ApiResult<Json<BookResponse>> {
    let service = BookService::new(state.service_context());
    let response = service.get(&username, id).await?;
    Ok(Json(response))
}

/// Public single fetch by id
///
/// GET /book/{id}
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<BookResponse>> {
    let service = BookService::new(state.service_context());
    let response = service.get_public(id).await?;
    Ok(Json(response))
}

/// Owner-only partial update
///
/// PATCH /{username}/book/{id}
pub async fn update_book(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((username, id)): Path<(String, i32)>,
    ValidatedJson(request): ValidatedJson<UpdateBookRequest>,
) -> ApiResult<Json<BookResponse>> {
    let service = BookService::new(state.service_context());
    let response = service.update(auth.user_id, &username, id, request).await?;
    Ok(Json(response))
}

/// Owner-only soft delete
///
/// DELETE /{username}/book/{id}
pub async fn delete_book(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((username, id)): Path<(String, i32)>,
) -> ApiResult<NoContent> {
    let service = BookService::new(state.service_context());
    service.delete(auth.user_id, &username, id).await?;
    Ok(NoContent)
}

/// Hard delete, superuser only
///
/// DELETE /{username}/db_book/{id}
pub async fn hard_delete_book(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((username, id)): Path<(String, i32)>,
) -> ApiResult<NoContent> {
    let service = BookService::new(state.service_context());
    service.hard_delete(auth.user_id, &username, id).await?;
    Ok(NoContent)
}
