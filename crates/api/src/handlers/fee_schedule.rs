//! Handlers for the `/fee-schedules` resource (admin only).
//!
//! A fee schedule defines the base amounts for one condominium billing
//! period. The two billing passes hang off it: `generate` creates the
//! per-unit fees, `apply-late-charges` adds penalty and interest to
//! unpaid fees past the grace window. Both passes are idempotent.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use strata_core::error::CoreError;
use strata_core::types::DbId;
use strata_db::models::fee_schedule::{CreateFeeSchedule, FeeSchedule, UpdateFeeSchedule};
use strata_db::repositories::FeeScheduleRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---- Request / response types ----

/// Query parameters for `GET /fee-schedules`.
#[derive(Debug, Deserialize)]
pub struct ListSchedulesQuery {
    pub condominium_id: Option<DbId>,
    pub period_year: Option<i32>,
}

/// Result of a fee generation pass.
#[derive(Debug, Serialize)]
pub struct GenerateResult {
    /// Number of fees created by this pass (0 when all units were billed).
    pub generated: u64,
}

/// Result of a late-charge pass.
#[derive(Debug, Serialize)]
pub struct LateChargeResult {
    /// Number of fees that received penalty and interest in this pass.
    pub charged: u64,
}

// ---- Handlers ----

/// GET /api/v1/fee-schedules
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<ListSchedulesQuery>,
) -> AppResult<Json<DataResponse<Vec<FeeSchedule>>>> {
    let schedules =
        FeeScheduleRepo::list(&state.pool, params.condominium_id, params.period_year).await?;
    Ok(Json(DataResponse { data: schedules }))
}

/// GET /api/v1/fee-schedules/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<FeeSchedule>> {
    let schedule = FeeScheduleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(schedule_not_found(id))?;
    Ok(Json(schedule))
}

/// POST /api/v1/fee-schedules
///
/// Creating a second schedule for the same condominium and period fails
/// with 409 via the unique constraint.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateFeeSchedule>,
) -> AppResult<(StatusCode, Json<FeeSchedule>)> {
    if !(1..=12).contains(&input.period_month) {
        return Err(AppError::Core(CoreError::Validation(
            "Period month must be between 1 and 12".into(),
        )));
    }
    let schedule = FeeScheduleRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(schedule)))
}

/// PUT /api/v1/fee-schedules/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFeeSchedule>,
) -> AppResult<Json<FeeSchedule>> {
    let schedule = FeeScheduleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(schedule_not_found(id))?;
    Ok(Json(schedule))
}

/// POST /api/v1/fee-schedules/{id}/generate
///
/// Creates a fee for every active unit that does not have one yet.
pub async fn generate(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<GenerateResult>> {
    let today = Utc::now().date_naive();
    let generated = FeeScheduleRepo::generate_fees(&state.pool, id, today)
        .await?
        .ok_or(schedule_not_found(id))?;
    Ok(Json(GenerateResult { generated }))
}

/// POST /api/v1/fee-schedules/{id}/apply-late-charges
///
/// No-op (count 0) while the grace window is still open.
pub async fn apply_late_charges(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<LateChargeResult>> {
    let today = Utc::now().date_naive();
    let charged = FeeScheduleRepo::apply_late_charges(&state.pool, id, today)
        .await?
        .ok_or(schedule_not_found(id))?;
    Ok(Json(LateChargeResult { charged }))
}

// ---- Helpers ----

fn schedule_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Fee schedule",
        id,
    })
}
