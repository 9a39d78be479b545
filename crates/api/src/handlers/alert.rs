//! Handlers for the `/alerts` resource.
//!
//! Any authenticated user of a condominium can read its alerts; raising
//! and reviewing them is staff work.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use strata_core::error::CoreError;
use strata_core::pagination::{clamp_limit, clamp_offset};
use strata_core::statuses::{validate_choice, ALERT_SEVERITIES};
use strata_core::types::{DbId, Timestamp};
use strata_db::models::alert::{CreateAlert, SecurityAlert};
use strata_db::repositories::AlertRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::resolve_condominium;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::query::{DEFAULT_LIMIT, MAX_LIMIT};
use crate::response::DataResponse;
use crate::state::AppState;

// ---- Request types ----

/// Body for `POST /alerts`.
#[derive(Debug, Deserialize, Validate)]
pub struct AlertRequest {
    pub condominium_id: Option<DbId>,
    pub camera_id: Option<DbId>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub alert_type: String,
    pub severity: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: String,
    /// Defaults to now when the event time is not known.
    pub occurred_at: Option<Timestamp>,
}

/// Body for `POST /alerts/{id}/review`.
#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub action_taken: Option<String>,
}

/// Query parameters for `GET /alerts`.
#[derive(Debug, Deserialize)]
pub struct ListAlertsQuery {
    #[serde(default)]
    pub unreviewed_only: bool,
    pub severity: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---- Handlers ----

/// GET /api/v1/alerts
///
/// Lists alerts for the caller's condominium, newest first. Supports
/// `?unreviewed_only` and `?severity` filters.
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListAlertsQuery>,
) -> AppResult<Json<DataResponse<Vec<SecurityAlert>>>> {
    if let Some(severity) = &params.severity {
        validate_choice("severity", severity, &ALERT_SEVERITIES)?;
    }
    let condominium_id = resolve_condominium(&state, auth.user_id).await?;
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);

    let alerts = AlertRepo::list_for_condominium(
        &state.pool,
        condominium_id,
        params.unreviewed_only,
        params.severity.as_deref(),
        limit,
        offset,
    )
    .await?;
    Ok(Json(DataResponse { data: alerts }))
}

/// GET /api/v1/alerts/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SecurityAlert>> {
    let alert = AlertRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(alert_not_found(id))?;
    Ok(Json(alert))
}

/// POST /api/v1/alerts
///
/// Raises an alert in the staff member's condominium (or an explicit
/// `condominium_id` when given).
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Json(input): Json<AlertRequest>,
) -> AppResult<(StatusCode, Json<SecurityAlert>)> {
    input.validate()?;
    validate_choice("severity", &input.severity, &ALERT_SEVERITIES)?;
    let condominium_id = match input.condominium_id {
        Some(id) => id,
        None => resolve_condominium(&state, staff.user_id).await?,
    };

    let create = CreateAlert {
        condominium_id,
        camera_id: input.camera_id,
        alert_type: input.alert_type,
        severity: input.severity,
        description: input.description,
        occurred_at: input.occurred_at,
    };
    let alert = AlertRepo::create(&state.pool, &create).await?;
    Ok((StatusCode::CREATED, Json(alert)))
}

/// POST /api/v1/alerts/{id}/review
///
/// Marks an alert as reviewed by the acting staff member.
pub async fn review(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<ReviewRequest>,
) -> AppResult<Json<SecurityAlert>> {
    let alert = AlertRepo::review(&state.pool, id, staff.user_id, input.action_taken.as_deref())
        .await?
        .ok_or(alert_not_found(id))?;
    Ok(Json(alert))
}

// ---- Helpers ----

fn alert_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Alert",
        id,
    })
}
