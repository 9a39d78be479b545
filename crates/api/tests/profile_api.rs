//! HTTP-level integration tests for the `/profile` surface.
//!
//! Covers the self-service scope: a resident reads and edits their own
//! contact details and manages their own vehicle registry, and nothing
//! leaks across users.

mod common;

use axum::http::StatusCode;
use chrono::{Days, Utc};
use common::{body_json, delete_auth, get_auth, post_json_auth, put_json_auth};
use rust_decimal::Decimal;
use sqlx::PgPool;
use strata_db::models::condominium::CreateCondominium;
use strata_db::models::residency::CreateResidency;
use strata_db::models::unit::CreateUnit;
use strata_db::models::unit_type::CreateUnitType;
use strata_db::repositories::{CondominiumRepo, ResidencyRepo, UnitRepo, UnitTypeRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn vehicle_body(plate: &str) -> serde_json::Value {
    serde_json::json!({
        "plate": plate,
        "kind": "car",
        "make": "Toyota",
        "model": "Corolla",
        "year": 2021,
        "color": "gray"
    })
}

// ---------------------------------------------------------------------------
// Test: GET /profile returns user, residencies and vehicles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_profile(pool: PgPool) {
    let condominium = CondominiumRepo::create(
        &pool,
        &CreateCondominium {
            name: "El Prado".to_string(),
            address: "Calle Real 1".to_string(),
            city: "Alajuela".to_string(),
            country: "CR".to_string(),
            phone: None,
            email: None,
            tax_id: "TAX-PROF".to_string(),
        },
    )
    .await
    .unwrap();
    let unit_type = UnitTypeRepo::create(
        &pool,
        &CreateUnitType {
            name: "Standard".to_string(),
            description: None,
            cost_factor: Decimal::new(100, 2),
        },
    )
    .await
    .unwrap();
    let unit = UnitRepo::create(
        &pool,
        &CreateUnit {
            condominium_id: condominium.id,
            unit_type_id: unit_type.id,
            number: "301".to_string(),
            floor: 3,
            block: None,
            area_m2: None,
            bedrooms: 2,
            bathrooms: 2,
            ownership_share: Decimal::new(500, 2),
        },
    )
    .await
    .unwrap();

    let (user, password) = common::create_test_user(&pool, "selfie", 2, Some(condominium.id)).await;
    ResidencyRepo::create(
        &pool,
        &CreateResidency {
            user_id: user.id,
            unit_id: unit.id,
            is_owner: true,
            ownership_share: Decimal::new(500, 2),
            starts_on: Utc::now().date_naive() - Days::new(30),
        },
    )
    .await
    .unwrap();

    let app = common::build_test_app(pool.clone());
    let token = common::login_for_token(app, "selfie", &password).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/profile", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["user"]["username"], "selfie");
    assert_eq!(json["user"]["role"], "owner");
    assert!(
        json["user"].get("password_hash").is_none(),
        "profile must not expose the password hash"
    );
    assert_eq!(json["residencies"].as_array().unwrap().len(), 1);
    assert_eq!(
        json["residencies"][0]["unit_id"].as_i64().unwrap(),
        unit.id
    );
    assert!(json["vehicles"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: PUT /profile edits contact fields only
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_profile_contact_fields(pool: PgPool) {
    common::create_test_user(&pool, "editor", 3, None).await;
    let app = common::build_test_app(pool.clone());
    let token = common::login_for_token(app, "editor", "test_password_123!").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "first_name": "Maria",
        "phone": "+506 8888 0000"
    });
    let response = put_json_auth(app, "/api/v1/profile", body, &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["first_name"], "Maria");
    assert_eq!(json["phone"], "+506 8888 0000");
    // Untouched fields keep their values.
    assert_eq!(json["last_name"], "User");
    assert_eq!(json["username"], "editor");

    // The change persists.
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/profile", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["user"]["first_name"], "Maria");
}

// ---------------------------------------------------------------------------
// Test: vehicle registry CRUD under /profile/vehicles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_vehicle_lifecycle(pool: PgPool) {
    common::create_test_user(&pool, "driver", 3, None).await;
    let app = common::build_test_app(pool.clone());
    let token = common::login_for_token(app, "driver", "test_password_123!").await;

    // Register.
    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/v1/profile/vehicles", vehicle_body("ABC-123"), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let vehicle = body_json(response).await;
    assert_eq!(vehicle["plate"], "ABC-123");
    assert!(vehicle["is_active"].as_bool().unwrap());
    let vehicle_id = vehicle["id"].as_i64().unwrap();

    // List.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/profile/vehicles", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    // Remove; the registry is empty again.
    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/profile/vehicles/{vehicle_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/profile/vehicles", &token).await;
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());

    // Removing it again is a 404.
    let app = common::build_test_app(pool);
    let response = delete_auth(app, &format!("/api/v1/profile/vehicles/{vehicle_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_plate_rejected(pool: PgPool) {
    common::create_test_user(&pool, "plated", 3, None).await;
    let app = common::build_test_app(pool.clone());
    let token = common::login_for_token(app, "plated", "test_password_123!").await;

    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/v1/profile/vehicles", vehicle_body("DUP-001"), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response =
        post_json_auth(app, "/api/v1/profile/vehicles", vehicle_body("DUP-001"), &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

// ---------------------------------------------------------------------------
// Test: vehicles are scoped to their owner
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cannot_delete_another_users_vehicle(pool: PgPool) {
    common::create_test_user(&pool, "vowner", 3, None).await;
    common::create_test_user(&pool, "vthief", 3, None).await;

    let app = common::build_test_app(pool.clone());
    let owner_token = common::login_for_token(app, "vowner", "test_password_123!").await;
    let app = common::build_test_app(pool.clone());
    let thief_token = common::login_for_token(app, "vthief", "test_password_123!").await;

    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/v1/profile/vehicles", vehicle_body("XYZ-777"), &owner_token).await;
    let vehicle_id = body_json(response).await["id"].as_i64().unwrap();

    // Another user's delete sees a 404, not someone else's vehicle.
    let app = common::build_test_app(pool.clone());
    let response = delete_auth(
        app,
        &format!("/api/v1/profile/vehicles/{vehicle_id}"),
        &thief_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The owner still has it.
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/profile/vehicles", &owner_token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}
