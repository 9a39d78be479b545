//! Handlers for the `/condominiums` resource.
//!
//! All handlers require the `admin` role via [`RequireAdmin`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use strata_core::error::CoreError;
use strata_core::types::DbId;
use strata_db::models::condominium::{Condominium, CreateCondominium, UpdateCondominium};
use strata_db::repositories::CondominiumRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::IncludeInactiveParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/condominiums
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateCondominium>,
) -> AppResult<(StatusCode, Json<Condominium>)> {
    input.validate()?;
    let condominium = CondominiumRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(condominium)))
}

/// GET /api/v1/condominiums
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<Json<DataResponse<Vec<Condominium>>>> {
    let condominiums = CondominiumRepo::list(&state.pool, params.include_inactive).await?;
    Ok(Json(DataResponse { data: condominiums }))
}

/// GET /api/v1/condominiums/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Condominium>> {
    let condominium = CondominiumRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Condominium",
            id,
        }))?;
    Ok(Json(condominium))
}

/// PUT /api/v1/condominiums/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCondominium>,
) -> AppResult<Json<Condominium>> {
    input.validate()?;
    let condominium = CondominiumRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Condominium",
            id,
        }))?;
    Ok(Json(condominium))
}

/// DELETE /api/v1/condominiums/{id}
pub async fn deactivate(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deactivated = CondominiumRepo::deactivate(&state.pool, id).await?;
    if deactivated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Condominium",
            id,
        }))
    }
}
