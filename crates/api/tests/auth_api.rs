//! HTTP-level tests for the auth endpoints and the admin user surface.
//!
//! Covers the login/refresh/logout cycle, refresh-token rotation, role
//! gating on the admin routes, user provisioning, and the failed-login
//! lockout counter.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, post_json_auth};
use sqlx::PgPool;
use strata_db::repositories::UserRepo;

/// Log in a user via the API and return the full JSON response.
async fn login_user(app: axum::Router, username: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Login, refresh, logout
// ---------------------------------------------------------------------------

/// A correct username/password pair yields both tokens and a sanitized user.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let (user, password) = common::create_test_user(&pool, "loginuser", 1, None).await;
    let app = common::build_test_app(pool);

    let json = login_user(app, "loginuser", &password).await;

    assert!(json["access_token"].is_string(), "login should issue an access token");
    assert!(json["refresh_token"].is_string(), "login should issue a refresh token");
    assert!(json["expires_in"].is_number(), "login should report the token lifetime");
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["username"], "loginuser");
    assert_eq!(json["user"]["email"], "loginuser@test.com");
    assert_eq!(json["user"]["role"], "admin");
    assert!(
        json["user"].get("password_hash").is_none(),
        "the password hash must never leave the server"
    );
}

/// A bad password is a 401, indistinguishable from an unknown user.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    common::create_test_user(&pool, "wrongpw", 2, None).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "wrongpw", "password": "incorrect_password" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A username nobody registered is also a plain 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_nonexistent_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "ghost", "password": "whatever" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Deactivated accounts are refused with 403 even when the password matches.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_inactive_user(pool: PgPool) {
    let (user, password) = common::create_test_user(&pool, "inactive", 2, None).await;
    UserRepo::deactivate(&pool, user.id)
        .await
        .expect("deactivation should succeed");

    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "inactive", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// A valid refresh token returns new tokens, and the old one stops working.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_token_refresh_rotates(pool: PgPool) {
    let (_user, password) = common::create_test_user(&pool, "refresher", 2, None).await;

    let app = common::build_test_app(pool.clone());
    let login_json = login_user(app, "refresher", &password).await;
    let refresh_token = login_json["refresh_token"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert_ne!(
        json["refresh_token"].as_str().unwrap(),
        refresh_token,
        "refresh token must rotate on use"
    );

    // The consumed token is revoked.
    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(
        response.status(),
        StatusCode::UNAUTHORIZED,
        "a rotated-out refresh token must be rejected"
    );
}

/// A made-up refresh token never matches a stored session digest.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_refresh_with_invalid_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "refresh_token": "not-a-real-token" });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Logout revokes all sessions: 204, then the refresh token is dead.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_logout_revokes_sessions(pool: PgPool) {
    let (_user, password) = common::create_test_user(&pool, "logoutuser", 2, None).await;

    let app = common::build_test_app(pool.clone());
    let login_json = login_user(app, "logoutuser", &password).await;
    let access_token = login_json["access_token"].as_str().unwrap();
    let refresh_token = login_json["refresh_token"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/v1/auth/logout", serde_json::json!({}), access_token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Account lockout: after 5 failed attempts the account is locked.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_account_lockout(pool: PgPool) {
    common::create_test_user(&pool, "lockme", 2, None).await;

    for _ in 0..5 {
        let app = common::build_test_app(pool.clone());
        let body = serde_json::json!({ "username": "lockme", "password": "wrong_pass" });
        let response = post_json(app, "/api/v1/auth/login", body).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // The 6th attempt (even with the wrong password) reports the lock.
    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "username": "lockme", "password": "wrong_pass" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    let error_msg = json["error"].as_str().unwrap_or("");
    assert!(
        error_msg.contains("locked"),
        "error message should mention the account is locked, got: {error_msg}"
    );
}

// ---------------------------------------------------------------------------
// Role gating
// ---------------------------------------------------------------------------

/// Without an Authorization header the admin routes answer 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_endpoint_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/admin/users").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A non-admin user (owner, role_id=2) is forbidden from admin endpoints.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_endpoint_requires_admin_role(pool: PgPool) {
    let (_user, password) = common::create_test_user(&pool, "owneruser", 2, None).await;

    let app = common::build_test_app(pool.clone());
    let token = common::login_for_token(app, "owneruser", &password).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/users", &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// A tampered bearer token is rejected.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_garbage_bearer_token_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/users", "not.a.jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// User provisioning
// ---------------------------------------------------------------------------

/// Provisioning a user as admin returns 201 and the account works at once.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_create_user(pool: PgPool) {
    let (_admin, admin_pw) = common::create_test_user(&pool, "adminmgr", 1, None).await;

    let app = common::build_test_app(pool.clone());
    let token = common::login_for_token(app, "adminmgr", &admin_pw).await;

    let app = common::build_test_app(pool.clone());
    let new_user_body = serde_json::json!({
        "username": "newowner",
        "email": "newowner@test.com",
        "password": "strong_password_123!",
        "role_id": 2,
        "first_name": "Nina",
        "last_name": "Owner",
        "national_id": "NID-NEWOWNER"
    });
    let response = post_json_auth(app, "/api/v1/admin/users", new_user_body, &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["username"], "newowner");
    assert_eq!(json["email"], "newowner@test.com");
    assert_eq!(json["role"], "owner");
    assert_eq!(json["role_id"], 2);
    assert!(json["is_active"].as_bool().unwrap());

    // The new user can log in straight away.
    let app = common::build_test_app(pool);
    login_user(app, "newowner", "strong_password_123!").await;
}

/// Weak passwords are rejected with a validation error.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_create_user_weak_password(pool: PgPool) {
    let (_admin, admin_pw) = common::create_test_user(&pool, "pwadmin", 1, None).await;

    let app = common::build_test_app(pool.clone());
    let token = common::login_for_token(app, "pwadmin", &admin_pw).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "username": "weakpw",
        "email": "weakpw@test.com",
        "password": "short",
        "role_id": 2,
        "first_name": "Wes",
        "last_name": "Weak",
        "national_id": "NID-WEAK"
    });
    let response = post_json_auth(app, "/api/v1/admin/users", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

/// Admin can list users; the collection is wrapped in a data envelope.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_list_users(pool: PgPool) {
    let (_admin, admin_pw) = common::create_test_user(&pool, "listadmin", 1, None).await;
    common::create_test_user(&pool, "listuser2", 3, None).await;

    let app = common::build_test_app(pool.clone());
    let token = common::login_for_token(app, "listadmin", &admin_pw).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/users", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let users = json["data"].as_array().expect("data should be an array");
    assert!(
        users.len() >= 2,
        "list should contain at least the two created users"
    );
}

/// Deactivation returns 204 and the account can no longer log in.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_deactivate_user(pool: PgPool) {
    let (_admin, admin_pw) = common::create_test_user(&pool, "deacadmin", 1, None).await;
    let (victim, victim_pw) = common::create_test_user(&pool, "victim", 3, None).await;

    let app = common::build_test_app(pool.clone());
    let token = common::login_for_token(app, "deacadmin", &admin_pw).await;

    let app = common::build_test_app(pool.clone());
    let response = common::delete_auth(
        app,
        &format!("/api/v1/admin/users/{}", victim.id),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "username": "victim", "password": victim_pw });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Deactivating twice is a 404.
    let app = common::build_test_app(pool);
    let token2 = token.clone();
    let response = common::delete_auth(
        app,
        &format!("/api/v1/admin/users/{}", victim.id),
        &token2,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Admin password reset takes effect immediately.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_reset_password(pool: PgPool) {
    let (_admin, admin_pw) = common::create_test_user(&pool, "resetadmin", 1, None).await;
    let (target, old_pw) = common::create_test_user(&pool, "resetme", 3, None).await;

    let app = common::build_test_app(pool.clone());
    let token = common::login_for_token(app, "resetadmin", &admin_pw).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "new_password": "a_brand_new_password_1" });
    let response = post_json_auth(
        app,
        &format!("/api/v1/admin/users/{}/reset-password", target.id),
        body,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Old password is rejected, new one works.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "username": "resetme", "password": old_pw });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool);
    login_user(app, "resetme", "a_brand_new_password_1").await;
}
