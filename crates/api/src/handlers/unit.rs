//! Handlers for the `/units` resource and the residencies linked to it.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use strata_core::error::CoreError;
use strata_core::types::DbId;
use strata_db::models::residency::{CreateResidency, Residency, UpdateResidency};
use strata_db::models::unit::{CreateUnit, Unit, UpdateUnit};
use strata_db::repositories::{ResidencyRepo, UnitRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::resolve_condominium;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /units`.
#[derive(Debug, Deserialize)]
pub struct ListUnitsQuery {
    /// Condominium to list. Defaults to the caller's own condominium.
    pub condominium_id: Option<DbId>,
    #[serde(default)]
    pub include_inactive: bool,
}

/// Request body for `POST /units/{id}/residencies`; the unit comes from the path.
#[derive(Debug, Deserialize)]
pub struct CreateResidencyRequest {
    pub user_id: DbId,
    pub is_owner: bool,
    pub ownership_share: Decimal,
    pub starts_on: NaiveDate,
}

/// Request body for `POST /residencies/{id}/end`.
#[derive(Debug, Deserialize)]
pub struct EndResidencyRequest {
    /// Last day of the residency. Defaults to today.
    pub ends_on: Option<NaiveDate>,
}

// ---------------------------------------------------------------------------
// Unit handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/units
///
/// List units for a condominium (the caller's own unless an admin passes
/// `?condominium_id`).
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListUnitsQuery>,
) -> AppResult<Json<DataResponse<Vec<Unit>>>> {
    let condominium_id = match params.condominium_id {
        Some(id) => id,
        None => resolve_condominium(&state, auth.user_id).await?,
    };

    let units =
        UnitRepo::list_for_condominium(&state.pool, condominium_id, params.include_inactive)
            .await?;
    Ok(Json(DataResponse { data: units }))
}

/// GET /api/v1/units/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Unit>> {
    let unit = UnitRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Unit", id }))?;
    Ok(Json(unit))
}

/// POST /api/v1/units
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateUnit>,
) -> AppResult<(StatusCode, Json<Unit>)> {
    input.validate()?;
    let unit = UnitRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(unit)))
}

/// PUT /api/v1/units/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUnit>,
) -> AppResult<Json<Unit>> {
    input.validate()?;
    let unit = UnitRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Unit", id }))?;
    Ok(Json(unit))
}

/// DELETE /api/v1/units/{id}
pub async fn deactivate(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deactivated = UnitRepo::deactivate(&state.pool, id).await?;
    if deactivated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Unit", id }))
    }
}

// ---------------------------------------------------------------------------
// Residency handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/units/{id}/residencies
///
/// Residency history for a unit, active links first.
pub async fn list_residencies(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(unit_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Residency>>>> {
    // 404 for unknown units rather than an empty list.
    UnitRepo::find_by_id(&state.pool, unit_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Unit",
            id: unit_id,
        }))?;

    let residencies = ResidencyRepo::list_for_unit(&state.pool, unit_id).await?;
    Ok(Json(DataResponse { data: residencies }))
}

/// POST /api/v1/units/{id}/residencies
///
/// Link a user to the unit as owner or tenant.
pub async fn create_residency(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(unit_id): Path<DbId>,
    Json(input): Json<CreateResidencyRequest>,
) -> AppResult<(StatusCode, Json<Residency>)> {
    UnitRepo::find_by_id(&state.pool, unit_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Unit",
            id: unit_id,
        }))?;

    let create_dto = CreateResidency {
        user_id: input.user_id,
        unit_id,
        is_owner: input.is_owner,
        ownership_share: input.ownership_share,
        starts_on: input.starts_on,
    };

    let residency = ResidencyRepo::create(&state.pool, &create_dto).await?;
    Ok((StatusCode::CREATED, Json(residency)))
}

/// PUT /api/v1/residencies/{id}
pub async fn update_residency(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateResidency>,
) -> AppResult<Json<Residency>> {
    let residency = ResidencyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Residency",
            id,
        }))?;
    Ok(Json(residency))
}

/// POST /api/v1/residencies/{id}/end
///
/// Close an active residency: sets `ends_on` and deactivates the link.
/// Returns 404 when the residency does not exist or is already ended.
pub async fn end_residency(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<EndResidencyRequest>,
) -> AppResult<Json<Residency>> {
    let ends_on = input.ends_on.unwrap_or_else(|| Utc::now().date_naive());

    let residency = ResidencyRepo::end(&state.pool, id, ends_on)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Residency",
            id,
        }))?;
    Ok(Json(residency))
}
