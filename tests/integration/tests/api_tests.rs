//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with migrations applied
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL, JWT_SECRET, SERVER_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, promote_to_superuser, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/user", &request).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(user.username, request.username);
    assert_eq!(user.email, request.email);
    assert!(user.tier_id.is_none());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    let response = server.post("/api/v1/user", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Second registration with same username but different email
    let mut duplicate = RegisterRequest::unique();
    duplicate.username = request.username.clone();
    let response = server.post("/api/v1/user", &duplicate).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/user", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let mut duplicate = RegisterRequest::unique();
    duplicate.email = request.email.clone();
    let response = server.post("/api/v1/user", &duplicate).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_invalid_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.email = "not-an-email".to_string();

    let response = server.post("/api/v1/user", &request).await.unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_register_short_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.password = "short".to_string();

    let response = server.post("/api/v1/user", &request).await.unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/user", &register_req).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.token_type, "bearer");
    assert!(auth.expires_in > 0);
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/user", &register_req).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let login_req = LoginRequest {
        username: register_req.username.clone(),
        password: "WrongPass123!".to_string(),
    };
    let response = server.post("/api/v1/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_login_unknown_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        username: "nosuchuser".to_string(),
        password: "TestPass123!".to_string(),
    };

    let response = server.post("/api/v1/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = server.register_and_login().await.unwrap();

    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.refresh_token,
    };
    let response = server.post("/api/v1/refresh", &refresh_req).await.unwrap();
    let tokens: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!tokens.access_token.is_empty());
    assert!(!tokens.refresh_token.is_empty());
}

#[tokio::test]
async fn test_refresh_after_logout_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = server.register_and_login().await.unwrap();

    // Logout revokes the stored refresh token
    let response = server
        .post_auth("/api/v1/logout", &auth.access_token, &())
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.refresh_token,
    };
    let response = server.post("/api/v1/refresh", &refresh_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = server.register_and_login().await.unwrap();

    let response = server
        .get_auth("/api/v1/user/me", &auth.access_token)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.username, register_req.username);
    assert_eq!(user.email, register_req.email);
}

#[tokio::test]
async fn test_get_current_user_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/user/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_user_by_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = server.register_and_login().await.unwrap();

    // Public read, no token required
    let response = server
        .get(&format!("/api/v1/user/{}", register_req.username))
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.username, register_req.username);
}

#[tokio::test]
async fn test_get_unknown_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/user/nosuchuser").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_update_own_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = server.register_and_login().await.unwrap();

    let update = UpdateUserRequest {
        name: Some("Renamed User".to_string()),
        ..Default::default()
    };
    let response = server
        .patch_auth(
            &format!("/api/v1/user/{}", register_req.username),
            &auth.access_token,
            &update,
        )
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.name, "Renamed User");
}

#[tokio::test]
async fn test_update_other_user_forbidden() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (victim_req, _) = server.register_and_login().await.unwrap();
    let (_, attacker_auth) = server.register_and_login().await.unwrap();

    let update = UpdateUserRequest {
        name: Some("Hijacked".to_string()),
        ..Default::default()
    };
    let response = server
        .patch_auth(
            &format!("/api/v1/user/{}", victim_req.username),
            &attacker_auth.access_token,
            &update,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_list_users_paginated() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    server.register_and_login().await.unwrap();

    let response = server
        .get("/api/v1/users?page=1&items_per_page=5")
        .await
        .unwrap();
    let users: Paginated<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(users.page, 1);
    assert_eq!(users.items_per_page, 5);
    assert!(users.total_count >= 1);
    assert!(users.data.len() <= 5);
}

#[tokio::test]
async fn test_pagination_bounds_normalized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // page=0 snaps to 1, items_per_page above the cap clamps to 100
    let response = server
        .get("/api/v1/users?page=0&items_per_page=1000")
        .await
        .unwrap();
    let users: Paginated<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(users.page, 1);
    assert_eq!(users.items_per_page, 100);
}

#[tokio::test]
async fn test_soft_deleted_user_cannot_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = server.register_and_login().await.unwrap();

    // Soft delete own account
    let response = server
        .delete_auth(
            &format!("/api/v1/user/{}", register_req.username),
            &auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Soft-deleted users disappear from reads and cannot authenticate
    let response = server
        .get(&format!("/api/v1/user/{}", register_req.username))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_hard_delete_requires_superuser() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (victim_req, _) = server.register_and_login().await.unwrap();
    let (_, auth) = server.register_and_login().await.unwrap();

    let response = server
        .delete_auth(
            &format!("/api/v1/db_user/{}", victim_req.username),
            &auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Book Tests
// ============================================================================

#[tokio::test]
async fn test_create_book() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = server.register_and_login().await.unwrap();

    let book_req = CreateBookRequest::unique();
    let response = server
        .post_auth(
            &format!("/api/v1/{}/book", register_req.username),
            &auth.access_token,
            &book_req,
        )
        .await
        .unwrap();
    let book: BookResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(book.title, book_req.title);
    assert_eq!(book.isbn, book_req.isbn);
}

#[tokio::test]
async fn test_create_book_title_and_author_only() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = server.register_and_login().await.unwrap();

    // Only the two required fields; everything else is optional
    let body = serde_json::json!({"title": "Night Train", "author": "A. Conductor"});
    let response = server
        .post_auth(
            &format!("/api/v1/{}/book", register_req.username),
            &auth.access_token,
            &body,
        )
        .await
        .unwrap();
    let book: BookResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(book.title, "Night Train");
    assert!(book.isbn.is_none());
}

#[tokio::test]
async fn test_create_book_for_other_user_forbidden() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (victim_req, _) = server.register_and_login().await.unwrap();
    let (_, attacker_auth) = server.register_and_login().await.unwrap();

    let book_req = CreateBookRequest::unique();
    let response = server
        .post_auth(
            &format!("/api/v1/{}/book", victim_req.username),
            &attacker_auth.access_token,
            &book_req,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_create_book_duplicate_isbn() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = server.register_and_login().await.unwrap();

    let book_req = CreateBookRequest::unique();
    let response = server
        .post_auth(
            &format!("/api/v1/{}/book", register_req.username),
            &auth.access_token,
            &book_req,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Same ISBN again, even with a different title
    let mut duplicate = CreateBookRequest::unique();
    duplicate.isbn = book_req.isbn.clone();
    let response = server
        .post_auth(
            &format!("/api/v1/{}/book", register_req.username),
            &auth.access_token,
            &duplicate,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_create_book_invalid_isbn() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = server.register_and_login().await.unwrap();

    let mut book_req = CreateBookRequest::unique();
    book_req.isbn = Some("123".to_string());
    let response = server
        .post_auth(
            &format!("/api/v1/{}/book", register_req.username),
            &auth.access_token,
            &book_req,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_list_user_books() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = server.register_and_login().await.unwrap();

    let book_req = CreateBookRequest::unique();
    let response = server
        .post_auth(
            &format!("/api/v1/{}/book", register_req.username),
            &auth.access_token,
            &book_req,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!("/api/v1/{}/books", register_req.username))
        .await
        .unwrap();
    let books: Paginated<BookResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(books.total_count, 1);
    assert_eq!(books.data[0].title, book_req.title);
}

#[tokio::test]
async fn test_list_books_for_unknown_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/nosuchuser/books").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_list_public_books() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = server.register_and_login().await.unwrap();

    let book_req = CreateBookRequest::unique();
    let response = server
        .post_auth(
            &format!("/api/v1/{}/book", register_req.username),
            &auth.access_token,
            &book_req,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.get("/api/v1/books").await.unwrap();
    let books: Paginated<BookResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(books.total_count >= 1);
}

#[tokio::test]
async fn test_get_book() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = server.register_and_login().await.unwrap();

    let book_req = CreateBookRequest::unique();
    let response = server
        .post_auth(
            &format!("/api/v1/{}/book", register_req.username),
            &auth.access_token,
            &book_req,
        )
        .await
        .unwrap();
    let created: BookResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Owner-scoped fetch
    let response = server
        .get(&format!(
            "/api/v1/{}/book/{}",
            register_req.username, created.id
        ))
        .await
        .unwrap();
    let book: BookResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(book.id, created.id);

    // Public fetch by id
    let response = server
        .get(&format!("/api/v1/book/{}", created.id))
        .await
        .unwrap();
    let book: BookResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(book.isbn, book_req.isbn);
}

#[tokio::test]
async fn test_update_book_reflected_in_list() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = server.register_and_login().await.unwrap();

    let book_req = CreateBookRequest::unique();
    let response = server
        .post_auth(
            &format!("/api/v1/{}/book", register_req.username),
            &auth.access_token,
            &book_req,
        )
        .await
        .unwrap();
    let created: BookResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Prime the list cache
    let response = server
        .get(&format!("/api/v1/{}/books", register_req.username))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Update the title
    let update = UpdateBookRequest {
        title: Some("Updated Title".to_string()),
        ..Default::default()
    };
    let response = server
        .patch_auth(
            &format!("/api/v1/{}/book/{}", register_req.username, created.id),
            &auth.access_token,
            &update,
        )
        .await
        .unwrap();
    let book: BookResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(book.title, "Updated Title");

    // List cache was invalidated, so the fresh title shows up
    let response = server
        .get(&format!("/api/v1/{}/books", register_req.username))
        .await
        .unwrap();
    let books: Paginated<BookResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(books.data[0].title, "Updated Title");
}

#[tokio::test]
async fn test_update_book_isbn() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = server.register_and_login().await.unwrap();

    let first_req = CreateBookRequest::unique();
    let response = server
        .post_auth(
            &format!("/api/v1/{}/book", register_req.username),
            &auth.access_token,
            &first_req,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let second_req = CreateBookRequest::unique();
    let response = server
        .post_auth(
            &format!("/api/v1/{}/book", register_req.username),
            &auth.access_token,
            &second_req,
        )
        .await
        .unwrap();
    let second: BookResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Changing to an ISBN held by another book conflicts
    let update = UpdateBookRequest {
        isbn: first_req.isbn.clone(),
        ..Default::default()
    };
    let response = server
        .patch_auth(
            &format!("/api/v1/{}/book/{}", register_req.username, second.id),
            &auth.access_token,
            &update,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // Changing to a fresh ISBN goes through
    let fresh = unique_isbn(unique_suffix());
    let update = UpdateBookRequest {
        isbn: Some(fresh.clone()),
        ..Default::default()
    };
    let response = server
        .patch_auth(
            &format!("/api/v1/{}/book/{}", register_req.username, second.id),
            &auth.access_token,
            &update,
        )
        .await
        .unwrap();
    let book: BookResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(book.isbn.as_deref(), Some(fresh.as_str()));
}

#[tokio::test]
async fn test_update_book_by_non_owner_forbidden() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner_req, owner_auth) = server.register_and_login().await.unwrap();
    let (_, attacker_auth) = server.register_and_login().await.unwrap();

    let book_req = CreateBookRequest::unique();
    let response = server
        .post_auth(
            &format!("/api/v1/{}/book", owner_req.username),
            &owner_auth.access_token,
            &book_req,
        )
        .await
        .unwrap();
    let created: BookResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let update = UpdateBookRequest {
        title: Some("Hijacked".to_string()),
        ..Default::default()
    };
    let response = server
        .patch_auth(
            &format!("/api/v1/{}/book/{}", owner_req.username, created.id),
            &attacker_auth.access_token,
            &update,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_delete_book() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = server.register_and_login().await.unwrap();

    let book_req = CreateBookRequest::unique();
    let response = server
        .post_auth(
            &format!("/api/v1/{}/book", register_req.username),
            &auth.access_token,
            &book_req,
        )
        .await
        .unwrap();
    let created: BookResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/api/v1/{}/book/{}", register_req.username, created.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Soft-deleted book is gone from reads
    let response = server
        .get(&format!(
            "/api/v1/{}/book/{}",
            register_req.username, created.id
        ))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_public_read_after_soft_delete() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = server.register_and_login().await.unwrap();

    let book_req = CreateBookRequest::unique();
    let response = server
        .post_auth(
            &format!("/api/v1/{}/book", register_req.username),
            &auth.access_token,
            &book_req,
        )
        .await
        .unwrap();
    let created: BookResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Prime the public single-item cache
    let response = server
        .get(&format!("/api/v1/book/{}", created.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/api/v1/{}/book/{}", register_req.username, created.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Delete drops the public cache entry too, so the read misses and
    // the soft-deleted row stays hidden
    let response = server
        .get(&format!("/api/v1/book/{}", created.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_isbn_of_soft_deleted_book_still_reserved() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = server.register_and_login().await.unwrap();

    let book_req = CreateBookRequest::unique();
    let response = server
        .post_auth(
            &format!("/api/v1/{}/book", register_req.username),
            &auth.access_token,
            &book_req,
        )
        .await
        .unwrap();
    let created: BookResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/api/v1/{}/book/{}", register_req.username, created.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // The soft-deleted row still holds the ISBN in the unique index, so
    // reusing it surfaces as a conflict rather than a server error
    let mut reuse = CreateBookRequest::unique();
    reuse.isbn = book_req.isbn.clone();
    let response = server
        .post_auth(
            &format!("/api/v1/{}/book", register_req.username),
            &auth.access_token,
            &reuse,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_hard_delete_book_requires_superuser() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = server.register_and_login().await.unwrap();

    let book_req = CreateBookRequest::unique();
    let response = server
        .post_auth(
            &format!("/api/v1/{}/book", register_req.username),
            &auth.access_token,
            &book_req,
        )
        .await
        .unwrap();
    let created: BookResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/api/v1/{}/db_book/{}", register_req.username, created.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_post_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = server.register_and_login().await.unwrap();

    // Create
    let post_req = CreatePostRequest::unique();
    let response = server
        .post_auth(
            &format!("/api/v1/{}/post", register_req.username),
            &auth.access_token,
            &post_req,
        )
        .await
        .unwrap();
    let created: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.title, post_req.title);

    // List
    let response = server
        .get(&format!("/api/v1/{}/posts", register_req.username))
        .await
        .unwrap();
    let posts: Paginated<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(posts.total_count, 1);

    // Update
    let update = UpdatePostRequest {
        text: Some("Edited body".to_string()),
        ..Default::default()
    };
    let response = server
        .patch_auth(
            &format!("/api/v1/{}/post/{}", register_req.username, created.id),
            &auth.access_token,
            &update,
        )
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(post.text, "Edited body");

    // Delete, then the read returns 404
    let response = server
        .delete_auth(
            &format!("/api/v1/{}/post/{}", register_req.username, created.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!(
            "/api/v1/{}/post/{}",
            register_req.username, created.id
        ))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_post_by_non_owner_forbidden() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner_req, owner_auth) = server.register_and_login().await.unwrap();
    let (_, attacker_auth) = server.register_and_login().await.unwrap();

    let post_req = CreatePostRequest::unique();
    let response = server
        .post_auth(
            &format!("/api/v1/{}/post", owner_req.username),
            &owner_auth.access_token,
            &post_req,
        )
        .await
        .unwrap();
    let created: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/api/v1/{}/post/{}", owner_req.username, created.id),
            &attacker_auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Tier and Rate Limit Tests
// ============================================================================

#[tokio::test]
async fn test_list_tiers_public() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/tiers").await.unwrap();
    let tiers: Paginated<TierResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(tiers.page, 1);
}

#[tokio::test]
async fn test_create_tier_requires_superuser() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = server.register_and_login().await.unwrap();

    let tier_req = CreateTierRequest::unique();
    let response = server
        .post_auth("/api/v1/tier", &auth.access_token, &tier_req)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_create_tier_unauthenticated() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let tier_req = CreateTierRequest::unique();

    let response = server.post("/api/v1/tier", &tier_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_tier_with_members_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (admin_req, admin_auth) = server.register_and_login().await.unwrap();
    promote_to_superuser(&admin_req.username).await.unwrap();
    let (member_req, _) = server.register_and_login().await.unwrap();

    let tier_req = CreateTierRequest::unique();
    let response = server
        .post_auth("/api/v1/tier", &admin_auth.access_token, &tier_req)
        .await
        .unwrap();
    let tier: TierResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Put a user on the tier
    let assign = serde_json::json!({"tier_id": tier.id});
    let response = server
        .patch_auth(
            &format!("/api/v1/user/{}/tier", member_req.username),
            &admin_auth.access_token,
            &assign,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // A tier with members cannot be removed
    let response = server
        .delete_auth(
            &format!("/api/v1/tier/{}", tier_req.name),
            &admin_auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_get_unknown_tier() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/tier/nosuchtier").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_list_rate_limits_for_unknown_tier() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get("/api/v1/tier/nosuchtier/rate_limits")
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_create_rate_limit_requires_superuser() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = server.register_and_login().await.unwrap();

    let limit_req = CreateRateLimitRequest::unique();
    let response = server
        .post_auth(
            "/api/v1/tier/nosuchtier/rate_limit",
            &auth.access_token,
            &limit_req,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Error Envelope Tests
// ============================================================================

#[tokio::test]
async fn test_error_envelope_shape() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/user/nosuchuser").await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert!(!error.detail.is_empty());
}
