//! Handlers for the `/amenities` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use strata_core::error::CoreError;
use strata_core::types::DbId;
use strata_db::models::amenity::{Amenity, CreateAmenity, UpdateAmenity};
use strata_db::repositories::AmenityRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::resolve_condominium;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /amenities`.
#[derive(Debug, Deserialize)]
pub struct ListAmenitiesQuery {
    /// Condominium to list. Defaults to the caller's own condominium.
    pub condominium_id: Option<DbId>,
    #[serde(default)]
    pub include_inactive: bool,
}

/// GET /api/v1/amenities
///
/// List amenities for a condominium (the caller's own unless
/// `?condominium_id` is given).
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListAmenitiesQuery>,
) -> AppResult<Json<DataResponse<Vec<Amenity>>>> {
    let condominium_id = match params.condominium_id {
        Some(id) => id,
        None => resolve_condominium(&state, auth.user_id).await?,
    };

    let amenities =
        AmenityRepo::list_for_condominium(&state.pool, condominium_id, params.include_inactive)
            .await?;
    Ok(Json(DataResponse { data: amenities }))
}

/// GET /api/v1/amenities/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Amenity>> {
    let amenity = AmenityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Amenity",
            id,
        }))?;
    Ok(Json(amenity))
}

/// POST /api/v1/amenities
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateAmenity>,
) -> AppResult<(StatusCode, Json<Amenity>)> {
    input.validate()?;
    let amenity = AmenityRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(amenity)))
}

/// PUT /api/v1/amenities/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAmenity>,
) -> AppResult<Json<Amenity>> {
    input.validate()?;
    let amenity = AmenityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Amenity",
            id,
        }))?;
    Ok(Json(amenity))
}

/// DELETE /api/v1/amenities/{id}
pub async fn deactivate(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deactivated = AmenityRepo::deactivate(&state.pool, id).await?;
    if deactivated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Amenity",
            id,
        }))
    }
}
