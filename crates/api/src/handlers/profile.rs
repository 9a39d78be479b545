//! Handlers for the `/profile` resource (own account + vehicles).
//!
//! Everything here is scoped to the authenticated caller; residents manage
//! their own contact details and vehicle registry, nothing else.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use strata_core::error::CoreError;
use strata_core::types::DbId;
use strata_db::models::residency::Residency;
use strata_db::models::user::{UpdateUser, UserResponse};
use strata_db::models::vehicle::{CreateVehicle, Vehicle};
use strata_db::repositories::{ResidencyRepo, RoleRepo, UserRepo, VehicleRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::load_user;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Full profile payload: the user plus their active residencies and vehicles.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
    pub residencies: Vec<Residency>,
    pub vehicles: Vec<Vehicle>,
}

/// Request body for `PUT /profile`.
///
/// Residents may only change their own names and phone numbers; everything
/// else (role, unit, username) is admin territory.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "must not be empty"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100, message = "must not be empty"))]
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub emergency_phone: Option<String>,
}

// ---------------------------------------------------------------------------
// Profile handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/profile
///
/// The caller's own user record with active residencies and vehicles.
pub async fn get_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<ProfileResponse>> {
    let user = load_user(&state, auth.user_id).await?;
    let role_name = RoleRepo::resolve_name(&state.pool, user.role_id).await?;

    let residencies = ResidencyRepo::list_active_for_user(&state.pool, user.id).await?;
    let vehicles = VehicleRepo::list_for_owner(&state.pool, user.id).await?;

    Ok(Json(ProfileResponse {
        user: UserResponse::from_user(&user, role_name),
        residencies,
        vehicles,
    }))
}

/// PUT /api/v1/profile
///
/// Update the caller's own names and phone numbers.
pub async fn update_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateProfileRequest>,
) -> AppResult<Json<UserResponse>> {
    input.validate()?;
    let update_dto = UpdateUser {
        username: None,
        email: None,
        role_id: None,
        condominium_id: None,
        first_name: input.first_name,
        last_name: input.last_name,
        phone: input.phone,
        emergency_phone: input.emergency_phone,
        is_active: None,
    };

    let user = UserRepo::update(&state.pool, auth.user_id, &update_dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;

    let role_name = RoleRepo::resolve_name(&state.pool, user.role_id).await?;
    Ok(Json(UserResponse::from_user(&user, role_name)))
}

// ---------------------------------------------------------------------------
// Vehicle handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/profile/vehicles
///
/// List the caller's active vehicles.
pub async fn list_vehicles(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Vehicle>>>> {
    let vehicles = VehicleRepo::list_for_owner(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: vehicles }))
}

/// POST /api/v1/profile/vehicles
///
/// Register a vehicle for the caller. Duplicate plates are rejected with 409.
pub async fn create_vehicle(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateVehicle>,
) -> AppResult<(StatusCode, Json<Vehicle>)> {
    input.validate()?;
    let vehicle = VehicleRepo::create(&state.pool, auth.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// DELETE /api/v1/profile/vehicles/{id}
///
/// Soft-remove one of the caller's own vehicles. Returns 204 No Content,
/// or 404 when the vehicle does not exist or belongs to someone else.
pub async fn delete_vehicle(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = VehicleRepo::deactivate_for_owner(&state.pool, id, auth.user_id).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Vehicle",
            id,
        }))
    }
}
