//! HTTP-level integration tests for the registry surface: condominiums,
//! unit types, units, residency links, amenities and payment methods.
//!
//! Deeper CRUD behavior is covered at the repository layer; these tests
//! focus on role gating, soft deactivation and the residency lifecycle.

mod common;

use axum::http::StatusCode;
use chrono::Utc;
use common::{body_json, delete_auth, get_auth, post_json_auth, put_json_auth};
use sqlx::PgPool;
use strata_db::models::condominium::CreateCondominium;
use strata_db::repositories::CondominiumRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct Fixture {
    condominium_id: i64,
    resident_id: i64,
    admin_token: String,
    resident_token: String,
}

async fn setup(pool: &PgPool) -> Fixture {
    let condominium = CondominiumRepo::create(
        pool,
        &CreateCondominium {
            name: "El Roble".to_string(),
            address: "Diagonal 4".to_string(),
            city: "Cartago".to_string(),
            country: "CR".to_string(),
            phone: None,
            email: None,
            tax_id: "TAX-REG".to_string(),
        },
    )
    .await
    .expect("condominium should be created");

    let (_admin, admin_pw) =
        common::create_test_user(pool, "registrar", 1, Some(condominium.id)).await;
    let (resident, resident_pw) =
        common::create_test_user(pool, "occupant", 3, Some(condominium.id)).await;

    let app = common::build_test_app(pool.clone());
    let admin_token = common::login_for_token(app, "registrar", &admin_pw).await;
    let app = common::build_test_app(pool.clone());
    let resident_token = common::login_for_token(app, "occupant", &resident_pw).await;

    Fixture {
        condominium_id: condominium.id,
        resident_id: resident.id,
        admin_token,
        resident_token,
    }
}

/// Create a unit type and a unit through the API. Returns the unit id.
async fn create_unit(pool: &PgPool, fixture: &Fixture, number: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "name": format!("Type {number}"),
        "cost_factor": "1.00"
    });
    let response = post_json_auth(app, "/api/v1/unit-types", body, &fixture.admin_token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let unit_type_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "condominium_id": fixture.condominium_id,
        "unit_type_id": unit_type_id,
        "number": number,
        "floor": 2,
        "bedrooms": 2,
        "bathrooms": 1,
        "ownership_share": "25.00"
    });
    let response = post_json_auth(app, "/api/v1/units", body, &fixture.admin_token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Test: condominium CRUD is admin-only, deletes are soft
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_condominium_crud(pool: PgPool) {
    let fixture = setup(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/condominiums", &fixture.resident_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "name": "Monte Claro",
        "address": "Ruta 27 km 8",
        "city": "Escazu",
        "country": "CR",
        "tax_id": "TAX-REG2"
    });
    let response = post_json_auth(app, "/api/v1/condominiums", body, &fixture.admin_token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["name"], "Monte Claro");
    assert!(created["is_active"].as_bool().unwrap());

    // The fixture condominium plus the new one.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/condominiums", &fixture.admin_token).await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "name": "Monte Claro Norte" });
    let response = put_json_auth(
        app,
        &format!("/api/v1/condominiums/{id}"),
        body,
        &fixture.admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Monte Claro Norte");

    // Deactivation drops it from the default list only.
    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/condominiums/{id}"), &fixture.admin_token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/condominiums", &fixture.admin_token).await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        "/api/v1/condominiums?include_inactive=true",
        &fixture.admin_token,
    )
    .await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Test: units are readable by residents, writable by admins
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unit_lifecycle(pool: PgPool) {
    let fixture = setup(&pool).await;
    let unit_id = create_unit(&pool, &fixture, "204").await;

    // Residents list their own condominium's units without parameters.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/units", &fixture.resident_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["number"], "204");

    // But may not create them.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "condominium_id": fixture.condominium_id,
        "unit_type_id": 1,
        "number": "205",
        "floor": 2,
        "bedrooms": 1,
        "bathrooms": 1,
        "ownership_share": "10.00"
    });
    let response = post_json_auth(app, "/api/v1/units", body, &fixture.resident_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "bedrooms": 3 });
    let response = put_json_auth(app, &format!("/api/v1/units/{unit_id}"), body, &fixture.admin_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["bedrooms"].as_i64().unwrap(), 3);

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/units/{unit_id}"), &fixture.admin_token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/units", &fixture.resident_token).await;
    assert!(body_json(response).await["data"].as_array().unwrap().is_empty());

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/units?include_inactive=true", &fixture.resident_token).await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: residency linking and ending
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_residency_lifecycle(pool: PgPool) {
    let fixture = setup(&pool).await;
    let unit_id = create_unit(&pool, &fixture, "310").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "user_id": fixture.resident_id,
        "is_owner": true,
        "ownership_share": "25.00",
        "starts_on": Utc::now().date_naive()
    });
    let response = post_json_auth(
        app,
        &format!("/api/v1/units/{unit_id}/residencies"),
        body,
        &fixture.admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let residency = body_json(response).await;
    let residency_id = residency["id"].as_i64().unwrap();
    assert!(residency["is_active"].as_bool().unwrap());
    assert!(residency["is_owner"].as_bool().unwrap());
    assert!(residency["ends_on"].is_null());

    let app = common::build_test_app(pool.clone());
    let response = get_auth(
        app,
        &format!("/api/v1/units/{unit_id}/residencies"),
        &fixture.resident_token,
    )
    .await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 1);

    // Ending stamps ends_on and deactivates the link.
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/residencies/{residency_id}/end"),
        serde_json::json!({}),
        &fixture.admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let ended = body_json(response).await;
    assert!(!ended["is_active"].as_bool().unwrap());
    assert!(ended["ends_on"].is_string());

    // An ended residency cannot be ended again.
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/residencies/{residency_id}/end"),
        serde_json::json!({}),
        &fixture.admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Residency listings 404 for unknown units.
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/units/9999/residencies", &fixture.resident_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Unit with id 9999 not found");
}

// ---------------------------------------------------------------------------
// Test: amenity catalog
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_amenity_catalog(pool: PgPool) {
    let fixture = setup(&pool).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "condominium_id": fixture.condominium_id,
        "name": "Pool",
        "capacity": 30,
        "hourly_rate": "15.00",
        "deposit_required": true,
        "deposit_amount": "50.00",
        "opens_at": "08:00:00",
        "closes_at": "20:00:00"
    });
    let response = post_json_auth(app, "/api/v1/amenities", body.clone(), &fixture.admin_token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let amenity = body_json(response).await;
    let amenity_id = amenity["id"].as_i64().unwrap();
    assert_eq!(amenity["hourly_rate"], "15.00");
    assert_eq!(amenity["deposit_amount"], "50.00");

    // Residents read the catalog but cannot extend it.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/amenities", &fixture.resident_token).await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/amenities", body, &fixture.resident_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Taking an amenity offline hides it from the default catalog.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "is_active": false });
    let response = put_json_auth(
        app,
        &format!("/api/v1/amenities/{amenity_id}"),
        body,
        &fixture.admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/amenities", &fixture.resident_token).await;
    assert!(body_json(response).await["data"].as_array().unwrap().is_empty());

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        "/api/v1/amenities?include_inactive=true",
        &fixture.resident_token,
    )
    .await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: payment method catalog
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_payment_method_catalog(pool: PgPool) {
    let fixture = setup(&pool).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "condominium_id": fixture.condominium_id,
        "name": "SINPE transfer",
        "requires_receipt": false
    });
    let response = post_json_auth(app, "/api/v1/payment-methods", body, &fixture.admin_token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let method = body_json(response).await;
    let method_id = method["id"].as_i64().unwrap();
    assert_eq!(method["name"], "SINPE transfer");

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/payment-methods", &fixture.resident_token).await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 1);

    // Methods are retired, never deleted.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "is_active": false });
    let response = put_json_auth(
        app,
        &format!("/api/v1/payment-methods/{method_id}"),
        body,
        &fixture.admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/payment-methods", &fixture.resident_token).await;
    assert!(body_json(response).await["data"].as_array().unwrap().is_empty());

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/payment-methods/9999", &fixture.resident_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        "Payment method with id 9999 not found"
    );
}
