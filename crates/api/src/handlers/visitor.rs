//! Handlers for the `/visitors` resource.
//!
//! Residents register their own visitors; the gate checks a visitor out
//! when they leave. A visitor is on premises while `left_at` is null.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use strata_core::error::CoreError;
use strata_core::pagination::{clamp_limit, clamp_offset};
use strata_core::roles::is_staff;
use strata_core::types::DbId;
use strata_db::models::visitor::{CreateVisitor, Visitor};
use strata_db::repositories::{UnitRepo, VisitorRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::resolve_condominium;
use crate::middleware::auth::AuthUser;
use crate::query::{DEFAULT_LIMIT, MAX_LIMIT};
use crate::response::DataResponse;
use crate::state::AppState;

// ---- Request types ----

/// Body for `POST /visitors`. The authorizer is always the caller.
#[derive(Debug, Deserialize, Validate)]
pub struct VisitorRequest {
    pub unit_id: DbId,
    #[validate(length(min = 1, max = 150, message = "must be 1-150 characters"))]
    pub name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub national_id: String,
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub reason: String,
    pub vehicle_plate: Option<String>,
}

/// Query parameters for `GET /visitors`.
#[derive(Debug, Deserialize)]
pub struct ListVisitorsQuery {
    #[serde(default)]
    pub on_premises_only: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---- Handlers ----

/// GET /api/v1/visitors
///
/// Staff see every visitor of the condominium; residents only the ones
/// they authorized.
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListVisitorsQuery>,
) -> AppResult<Json<DataResponse<Vec<Visitor>>>> {
    let condominium_id = resolve_condominium(&state, auth.user_id).await?;
    let authorized_by = if is_staff(&auth.role) {
        None
    } else {
        Some(auth.user_id)
    };
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);

    let visitors = VisitorRepo::list_for_condominium(
        &state.pool,
        condominium_id,
        params.on_premises_only,
        authorized_by,
        limit,
        offset,
    )
    .await?;
    Ok(Json(DataResponse { data: visitors }))
}

/// GET /api/v1/visitors/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Visitor>> {
    let visitor = find_visitor(&state, id).await?;
    if visitor.authorized_by != auth.user_id && !is_staff(&auth.role) {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only view visitors you authorized".into(),
        )));
    }
    Ok(Json(visitor))
}

/// POST /api/v1/visitors
///
/// Registers a visitor entering now, authorized by the caller.
pub async fn register(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<VisitorRequest>,
) -> AppResult<(StatusCode, Json<Visitor>)> {
    input.validate()?;
    let unit = UnitRepo::find_by_id(&state.pool, input.unit_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Unit",
            id: input.unit_id,
        }))?;

    let create = CreateVisitor {
        condominium_id: unit.condominium_id,
        unit_id: unit.id,
        authorized_by: auth.user_id,
        name: input.name,
        national_id: input.national_id,
        phone: input.phone,
        reason: input.reason,
        vehicle_plate: input.vehicle_plate,
    };
    let visitor = VisitorRepo::create(&state.pool, &create).await?;
    Ok((StatusCode::CREATED, Json(visitor)))
}

/// POST /api/v1/visitors/{id}/checkout
///
/// Stamps `left_at`. Allowed for staff and for the authorizer. Returns
/// 409 when the visitor already left.
pub async fn checkout(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Visitor>> {
    let visitor = find_visitor(&state, id).await?;
    if visitor.authorized_by != auth.user_id && !is_staff(&auth.role) {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only check out visitors you authorized".into(),
        )));
    }
    if visitor.left_at.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "Visitor has already checked out".into(),
        )));
    }

    let updated = VisitorRepo::checkout(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::Conflict(
            "Visitor has already checked out".into(),
        )))?;
    Ok(Json(updated))
}

// ---- Helpers ----

async fn find_visitor(state: &AppState, id: DbId) -> AppResult<Visitor> {
    VisitorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Visitor",
            id,
        }))
}
