//! Handlers for the `/cameras` resource (staff only).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use strata_core::error::CoreError;
use strata_core::types::DbId;
use strata_db::models::camera::{Camera, CreateCamera, UpdateCamera};
use strata_db::repositories::CameraRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::resolve_condominium;
use crate::middleware::rbac::{RequireAdmin, RequireStaff};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /cameras`.
#[derive(Debug, Deserialize)]
pub struct ListCamerasQuery {
    pub condominium_id: Option<DbId>,
    #[serde(default)]
    pub include_inactive: bool,
}

/// GET /api/v1/cameras
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Query(params): Query<ListCamerasQuery>,
) -> AppResult<Json<DataResponse<Vec<Camera>>>> {
    let condominium_id = match params.condominium_id {
        Some(id) => id,
        None => resolve_condominium(&state, staff.user_id).await?,
    };
    let cameras =
        CameraRepo::list_for_condominium(&state.pool, condominium_id, params.include_inactive)
            .await?;
    Ok(Json(DataResponse { data: cameras }))
}

/// GET /api/v1/cameras/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<Camera>> {
    let camera = CameraRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(camera_not_found(id))?;
    Ok(Json(camera))
}

/// POST /api/v1/cameras
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateCamera>,
) -> AppResult<(StatusCode, Json<Camera>)> {
    input.validate()?;
    let camera = CameraRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(camera)))
}

/// PUT /api/v1/cameras/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCamera>,
) -> AppResult<Json<Camera>> {
    input.validate()?;
    let camera = CameraRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(camera_not_found(id))?;
    Ok(Json(camera))
}

/// DELETE /api/v1/cameras/{id}
pub async fn deactivate(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deactivated = CameraRepo::deactivate(&state.pool, id).await?;
    if deactivated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(camera_not_found(id))
    }
}

fn camera_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Camera",
        id,
    })
}
