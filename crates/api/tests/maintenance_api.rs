//! HTTP-level integration tests for the maintenance surface: categories
//! and work orders.
//!
//! The role split under test: residents file requests and rate the
//! completed work, staff triage and drive the work order forward, and
//! category administration is admin-only.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth, put_json_auth};
use sqlx::PgPool;
use strata_db::models::condominium::CreateCondominium;
use strata_db::models::maintenance::CreateMaintenanceCategory;
use strata_db::repositories::{CondominiumRepo, MaintenanceCategoryRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct Fixture {
    condominium_id: i64,
    category_id: i64,
    admin_token: String,
    worker_token: String,
    resident_token: String,
}

async fn setup(pool: &PgPool) -> Fixture {
    let condominium = CondominiumRepo::create(
        pool,
        &CreateCondominium {
            name: "Monte Claro".to_string(),
            address: "Av. 10 #55".to_string(),
            city: "Cartago".to_string(),
            country: "CR".to_string(),
            phone: None,
            email: None,
            tax_id: "TAX-MNT".to_string(),
        },
    )
    .await
    .expect("condominium should be created");

    let category = MaintenanceCategoryRepo::create(
        pool,
        &CreateMaintenanceCategory {
            condominium_id: condominium.id,
            name: "Plumbing".to_string(),
            description: None,
            is_preventive: false,
            estimated_cost: None,
        },
    )
    .await
    .expect("category should be created");

    let (_admin, admin_pw) =
        common::create_test_user(pool, "mntadmin", 1, Some(condominium.id)).await;
    let (_worker, worker_pw) =
        common::create_test_user(pool, "plumber", 5, Some(condominium.id)).await;
    let (_resident, resident_pw) =
        common::create_test_user(pool, "tenant7", 3, Some(condominium.id)).await;

    let app = common::build_test_app(pool.clone());
    let admin_token = common::login_for_token(app, "mntadmin", &admin_pw).await;
    let app = common::build_test_app(pool.clone());
    let worker_token = common::login_for_token(app, "plumber", &worker_pw).await;
    let app = common::build_test_app(pool.clone());
    let resident_token = common::login_for_token(app, "tenant7", &resident_pw).await;

    Fixture {
        condominium_id: condominium.id,
        category_id: category.id,
        admin_token,
        worker_token,
        resident_token,
    }
}

fn request_body(category_id: i64) -> serde_json::Value {
    serde_json::json!({
        "category_id": category_id,
        "title": "Kitchen sink leak",
        "description": "Water pooling under the sink since yesterday"
    })
}

/// File a request as the fixture resident and return its id.
async fn file_request(pool: &PgPool, fixture: &Fixture) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/maintenance/requests",
        request_body(fixture.category_id),
        &fixture.resident_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Test: category administration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_crud_is_admin_gated(pool: PgPool) {
    let fixture = setup(&pool).await;
    let body = serde_json::json!({
        "condominium_id": fixture.condominium_id,
        "name": "Electrical",
        "is_preventive": false
    });

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/maintenance/categories",
        body.clone(),
        &fixture.resident_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/v1/maintenance/categories", body, &fixture.admin_token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let category = body_json(response).await;
    let category_id = category["id"].as_i64().unwrap();
    assert_eq!(category["name"], "Electrical");

    // Updates go through PUT; anyone in the condominium can list.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "estimated_cost": "75.00" });
    let response = put_json_auth(
        app,
        &format!("/api/v1/maintenance/categories/{category_id}"),
        body,
        &fixture.admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["estimated_cost"], "75.00");

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/maintenance/categories", &fixture.resident_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Test: filing a request applies defaults and derives the condominium
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_file_request_defaults(pool: PgPool) {
    let fixture = setup(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/maintenance/requests",
        request_body(fixture.category_id),
        &fixture.resident_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "pending");
    assert_eq!(json["priority"], "medium", "priority defaults to medium");
    assert_eq!(
        json["condominium_id"].as_i64().unwrap(),
        fixture.condominium_id,
        "the condominium is derived from the category"
    );
    assert!(json["assigned_to"].is_null());
    assert!(json["rating"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_file_request_validation(pool: PgPool) {
    let fixture = setup(&pool).await;

    // Empty title.
    let app = common::build_test_app(pool.clone());
    let mut body = request_body(fixture.category_id);
    body["title"] = serde_json::json!("   ");
    let response =
        post_json_auth(app, "/api/v1/maintenance/requests", body, &fixture.resident_token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Title must not be empty");

    // Unknown priority.
    let app = common::build_test_app(pool.clone());
    let mut body = request_body(fixture.category_id);
    body["priority"] = serde_json::json!("catastrophic");
    let response =
        post_json_auth(app, "/api/v1/maintenance/requests", body, &fixture.resident_token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Unknown category.
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/maintenance/requests",
        request_body(9999),
        &fixture.resident_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        "Maintenance category with id 9999 not found"
    );
}

// ---------------------------------------------------------------------------
// Test: visibility and list scoping
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_request_visibility(pool: PgPool) {
    let fixture = setup(&pool).await;
    let request_id = file_request(&pool, &fixture).await;

    // Another resident cannot open it.
    let (_other, other_pw) =
        common::create_test_user(&pool, "tenant8", 3, Some(fixture.condominium_id)).await;
    let app = common::build_test_app(pool.clone());
    let other_token = common::login_for_token(app, "tenant8", &other_pw).await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(
        app,
        &format!("/api/v1/maintenance/requests/{request_id}"),
        &other_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Maintenance staff can.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(
        app,
        &format!("/api/v1/maintenance/requests/{request_id}"),
        &fixture.worker_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Lists: the requester and staff see it, the other resident does not.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/maintenance/requests", &fixture.resident_token).await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/maintenance/requests", &other_token).await;
    assert!(body_json(response).await["data"].as_array().unwrap().is_empty());

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/maintenance/requests", &fixture.worker_token).await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: staff drive the work order forward
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_staff_update_flow(pool: PgPool) {
    let fixture = setup(&pool).await;
    let request_id = file_request(&pool, &fixture).await;

    let worker_id: i64 = sqlx::query_scalar("SELECT id FROM users WHERE username = 'plumber'")
        .fetch_one(&pool)
        .await
        .unwrap();

    // Assign and schedule.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "status": "assigned",
        "assigned_to": worker_id,
        "scheduled_for": "2027-04-15",
        "estimated_cost": "120.00"
    });
    let response = put_json_auth(
        app,
        &format!("/api/v1/maintenance/requests/{request_id}"),
        body,
        &fixture.worker_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "assigned");
    assert_eq!(json["assigned_to"].as_i64().unwrap(), worker_id);
    assert!(json["assigned_at"].is_string(), "assignment is timestamped");
    assert_eq!(json["scheduled_for"], "2027-04-15");

    // Complete; completion is timestamped once.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "status": "completed", "actual_cost": "95.50" });
    let response = put_json_auth(
        app,
        &format!("/api/v1/maintenance/requests/{request_id}"),
        body,
        &fixture.worker_token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["status"], "completed");
    assert!(json["completed_at"].is_string());
    assert_eq!(json["actual_cost"], "95.50");

    // Unknown status values are rejected.
    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "status": "abandoned" });
    let response = put_json_auth(
        app,
        &format!("/api/v1/maintenance/requests/{request_id}"),
        body,
        &fixture.worker_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: the requester may only rate, and only completed work
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_resident_rating_rules(pool: PgPool) {
    let fixture = setup(&pool).await;
    let request_id = file_request(&pool, &fixture).await;

    // Residents cannot drive the status.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "status": "completed" });
    let response = put_json_auth(
        app,
        &format!("/api/v1/maintenance/requests/{request_id}"),
        body,
        &fixture.resident_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Residents can only set the rating fields"
    );

    // Rating is capped to 1..=5.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "rating": 6 });
    let response = put_json_auth(
        app,
        &format!("/api/v1/maintenance/requests/{request_id}"),
        body,
        &fixture.resident_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Rating must be between 1 and 5");

    // Rating pending work is rejected.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "rating": 5 });
    let response = put_json_auth(
        app,
        &format!("/api/v1/maintenance/requests/{request_id}"),
        body,
        &fixture.resident_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Only completed requests can be rated"
    );

    // Staff complete the work; now the requester can rate it.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "status": "completed" });
    let response = put_json_auth(
        app,
        &format!("/api/v1/maintenance/requests/{request_id}"),
        body,
        &fixture.worker_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "rating": 4, "rating_comment": "Fast and clean" });
    let response = put_json_auth(
        app,
        &format!("/api/v1/maintenance/requests/{request_id}"),
        body,
        &fixture.resident_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["rating"], 4);
    assert_eq!(json["rating_comment"], "Fast and clean");

    // Someone else's rating attempt is forbidden.
    let (_other, other_pw) =
        common::create_test_user(&pool, "tenant9", 3, Some(fixture.condominium_id)).await;
    let app = common::build_test_app(pool.clone());
    let other_token = common::login_for_token(app, "tenant9", &other_pw).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "rating": 1 });
    let response = put_json_auth(
        app,
        &format!("/api/v1/maintenance/requests/{request_id}"),
        body,
        &other_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        body_json(response).await["error"],
        "You can only update your own maintenance requests"
    );
}
