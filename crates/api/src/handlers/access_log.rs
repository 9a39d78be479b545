//! Handlers for the `/access-logs` resource (staff only).

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use strata_core::pagination::{clamp_limit, clamp_offset};
use strata_core::statuses::{validate_choice, ACCESS_DIRECTIONS, ACCESS_METHODS};
use strata_core::types::DbId;
use strata_db::models::access_log::{AccessLog, CreateAccessLog};
use strata_db::repositories::AccessLogRepo;

use crate::error::AppResult;
use crate::handlers::resolve_condominium;
use crate::middleware::rbac::RequireStaff;
use crate::query::{DEFAULT_LIMIT, MAX_LIMIT};
use crate::response::DataResponse;
use crate::state::AppState;

// ---- Request types ----

/// Body for `POST /access-logs`.
#[derive(Debug, Deserialize)]
pub struct AccessLogRequest {
    pub condominium_id: Option<DbId>,
    pub user_id: Option<DbId>,
    pub visitor_id: Option<DbId>,
    pub vehicle_id: Option<DbId>,
    pub camera_id: Option<DbId>,
    pub direction: String,
    pub method: String,
    #[serde(default = "default_authorized")]
    pub is_authorized: bool,
    pub notes: Option<String>,
}

fn default_authorized() -> bool {
    true
}

/// Query parameters for `GET /access-logs`.
#[derive(Debug, Deserialize)]
pub struct ListAccessLogsQuery {
    pub user_id: Option<DbId>,
    pub direction: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---- Handlers ----

/// GET /api/v1/access-logs
///
/// Lists access events for the staff member's condominium, newest first.
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Query(params): Query<ListAccessLogsQuery>,
) -> AppResult<Json<DataResponse<Vec<AccessLog>>>> {
    if let Some(direction) = &params.direction {
        validate_choice("direction", direction, &ACCESS_DIRECTIONS)?;
    }
    let condominium_id = resolve_condominium(&state, staff.user_id).await?;
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);

    let logs = AccessLogRepo::list_for_condominium(
        &state.pool,
        condominium_id,
        params.user_id,
        params.direction.as_deref(),
        limit,
        offset,
    )
    .await?;
    Ok(Json(DataResponse { data: logs }))
}

/// POST /api/v1/access-logs
///
/// Records an entry or exit event at the gate.
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Json(input): Json<AccessLogRequest>,
) -> AppResult<(StatusCode, Json<AccessLog>)> {
    validate_choice("direction", &input.direction, &ACCESS_DIRECTIONS)?;
    validate_choice("method", &input.method, &ACCESS_METHODS)?;
    let condominium_id = match input.condominium_id {
        Some(id) => id,
        None => resolve_condominium(&state, staff.user_id).await?,
    };

    let create = CreateAccessLog {
        condominium_id,
        user_id: input.user_id,
        visitor_id: input.visitor_id,
        vehicle_id: input.vehicle_id,
        camera_id: input.camera_id,
        direction: input.direction,
        method: input.method,
        is_authorized: input.is_authorized,
        notes: input.notes,
    };
    let log = AccessLogRepo::create(&state.pool, &create).await?;
    Ok((StatusCode::CREATED, Json(log)))
}
