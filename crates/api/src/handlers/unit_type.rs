//! Handlers for the `/unit-types` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use strata_core::error::CoreError;
use strata_core::types::DbId;
use strata_db::models::unit_type::{CreateUnitType, UnitType, UpdateUnitType};
use strata_db::repositories::UnitTypeRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/unit-types
///
/// List all unit types. Any authenticated user may read the catalog.
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<UnitType>>>> {
    let unit_types = UnitTypeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: unit_types }))
}

/// POST /api/v1/unit-types
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateUnitType>,
) -> AppResult<(StatusCode, Json<UnitType>)> {
    input.validate()?;
    let unit_type = UnitTypeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(unit_type)))
}

/// PUT /api/v1/unit-types/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUnitType>,
) -> AppResult<Json<UnitType>> {
    input.validate()?;
    let unit_type = UnitTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "UnitType",
            id,
        }))?;
    Ok(Json(unit_type))
}
