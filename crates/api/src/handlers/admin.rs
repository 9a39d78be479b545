//! Handlers under `/admin`: account management and the condominium
//! statistics overview. Everything here is gated on [`RequireAdmin`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strata_core::error::CoreError;
use strata_core::pagination::{clamp_limit, clamp_offset};
use strata_core::types::DbId;
use strata_db::models::user::{CreateUser, UpdateUser, User, UserResponse};
use strata_db::repositories::{RoleRepo, UserRepo};
use validator::Validate;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::{DEFAULT_LIMIT, MAX_LIMIT};
use crate::response::DataResponse;
use crate::state::AppState;

/// Floor for new passwords, on creation and reset alike.
const MIN_PASSWORD_LENGTH: usize = 12;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Body for `POST /admin/users`. The password has its own strength check
/// against the configured minimum, so it carries no validate attribute.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 50, message = "must be 3-50 characters"))]
    pub username: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    pub password: String,
    pub role_id: DbId,
    pub condominium_id: Option<DbId>,
    #[validate(length(min = 1, max = 100, message = "must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "must not be empty"))]
    pub last_name: String,
    #[validate(length(min = 1, max = 50, message = "must not be empty"))]
    pub national_id: String,
    pub phone: Option<String>,
    pub emergency_phone: Option<String>,
}

/// Body for `PUT /admin/users/{id}`. Password changes go through the
/// reset endpoint instead.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 3, max = 50, message = "must be 3-50 characters"))]
    pub username: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    pub role_id: Option<DbId>,
    pub condominium_id: Option<DbId>,
    #[validate(length(min = 1, max = 100, message = "must not be empty"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100, message = "must not be empty"))]
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub emergency_phone: Option<String>,
    pub is_active: Option<bool>,
}

/// Body for `POST /admin/users/{id}/reset-password`.
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub new_password: String,
}

/// Parameters of `GET /admin/users`.
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub condominium_id: Option<DbId>,
    #[serde(default)]
    pub include_inactive: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// User management handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/users
///
/// Provision an account. The password is strength-checked and hashed;
/// the response is the public user shape with 201.
pub async fn create_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    input.validate()?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateUser {
        username: input.username,
        email: input.email,
        password_hash: hashed,
        role_id: input.role_id,
        condominium_id: input.condominium_id,
        first_name: input.first_name,
        last_name: input.last_name,
        national_id: input.national_id,
        phone: input.phone,
        emergency_phone: input.emergency_phone,
    };

    let user = UserRepo::create(&state.pool, &create_dto).await?;
    let response = user_to_response(&state, &user).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/v1/admin/users
///
/// Accounts with resolved role names, optionally one condominium only.
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<ListUsersQuery>,
) -> AppResult<Json<DataResponse<Vec<UserResponse>>>> {
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);

    let users = UserRepo::list(
        &state.pool,
        params.condominium_id,
        params.include_inactive,
        limit,
        offset,
    )
    .await?;

    // One roles query for the whole page.
    let roles = RoleRepo::list(&state.pool).await?;

    let responses: Vec<UserResponse> = users
        .iter()
        .map(|u| {
            let role_name = roles
                .iter()
                .find(|r| r.id == u.role_id)
                .map(|r| r.name.clone())
                .unwrap_or_else(|| "unknown".to_string());
            UserResponse::from_user(u, role_name)
        })
        .collect();

    Ok(Json(DataResponse { data: responses }))
}

/// GET /api/v1/admin/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    let response = user_to_response(&state, &user).await?;
    Ok(Json(response))
}

/// PUT /api/v1/admin/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    input.validate()?;
    let update_dto = UpdateUser {
        username: input.username,
        email: input.email,
        role_id: input.role_id,
        condominium_id: input.condominium_id,
        first_name: input.first_name,
        last_name: input.last_name,
        phone: input.phone,
        emergency_phone: input.emergency_phone,
        is_active: input.is_active,
    };

    let user = UserRepo::update(&state.pool, id, &update_dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    let response = user_to_response(&state, &user).await?;
    Ok(Json(response))
}

/// DELETE /api/v1/admin/users/{id}
///
/// Soft-deactivates the account; 204 on success. Their sessions stay
/// valid until expiry but login is refused.
pub async fn deactivate_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deactivated = UserRepo::deactivate(&state.pool, id).await?;
    if deactivated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "User", id }))
    }
}

/// POST /api/v1/admin/users/{id}/reset-password
///
/// Sets a new password on behalf of a user; 204 on success.
pub async fn reset_password(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<ResetPasswordRequest>,
) -> AppResult<StatusCode> {
    validate_password_strength(&input.new_password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    let hashed = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let updated = UserRepo::update_password(&state.pool, id, &hashed).await?;
    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "User", id }))
    }
}

// ---------------------------------------------------------------------------
// Condominium statistics
// ---------------------------------------------------------------------------

/// Parameters of `GET /admin/stats`.
#[derive(Debug, Deserialize)]
pub struct AdminStatsQuery {
    /// Condominium to report on. Defaults to the admin's own condominium.
    pub condominium_id: Option<DbId>,
}

/// Resident head counts.
#[derive(Debug, Serialize)]
pub struct ResidentStats {
    pub total: i64,
    pub active: i64,
}

/// Unit counts and occupancy.
#[derive(Debug, Serialize)]
pub struct UnitStats {
    pub total: i64,
    pub active: i64,
    /// Share of active units with at least one active residency, in percent.
    pub occupancy_rate: f64,
}

/// Payment volume for the current calendar month.
#[derive(Debug, Serialize)]
pub struct PaymentStats {
    pub count: i64,
    pub income: Decimal,
}

/// Aggregate condominium statistics for the admin overview.
#[derive(Debug, Serialize)]
pub struct AdminStats {
    pub residents: ResidentStats,
    pub units: UnitStats,
    pub payments_this_month: PaymentStats,
    pub alerts_this_month: i64,
    pub active_cameras: i64,
    pub open_maintenance_requests: i64,
}

#[derive(Debug, sqlx::FromRow)]
struct AdminStatsRow {
    residents_total: i64,
    residents_active: i64,
    units_total: i64,
    units_active: i64,
    units_occupied: i64,
    payments_count: i64,
    payments_income: Decimal,
    alerts_this_month: i64,
    active_cameras: i64,
    open_requests: i64,
}

/// GET /api/v1/admin/stats
///
/// Aggregate counts for one condominium: residents, units + occupancy,
/// payment volume this month, alerts this month, cameras, open work orders.
pub async fn stats(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Query(params): Query<AdminStatsQuery>,
) -> AppResult<Json<AdminStats>> {
    let condominium_id = match params.condominium_id {
        Some(id) => id,
        None => crate::handlers::resolve_condominium(&state, admin.user_id).await?,
    };

    let row = sqlx::query_as::<_, AdminStatsRow>(
        "SELECT \
            (SELECT COUNT(*) FROM users u JOIN roles r ON r.id = u.role_id \
             WHERE u.condominium_id = $1 AND r.name IN ('owner', 'tenant')) AS residents_total, \
            (SELECT COUNT(*) FROM users u JOIN roles r ON r.id = u.role_id \
             WHERE u.condominium_id = $1 AND r.name IN ('owner', 'tenant') \
             AND u.is_active) AS residents_active, \
            (SELECT COUNT(*) FROM units WHERE condominium_id = $1) AS units_total, \
            (SELECT COUNT(*) FROM units WHERE condominium_id = $1 AND is_active) AS units_active, \
            (SELECT COUNT(DISTINCT u.id) FROM units u \
             JOIN residencies res ON res.unit_id = u.id AND res.is_active \
             WHERE u.condominium_id = $1 AND u.is_active) AS units_occupied, \
            (SELECT COUNT(*) FROM payments p \
             JOIN maintenance_fees f ON f.id = p.fee_id \
             JOIN units u ON u.id = f.unit_id \
             WHERE u.condominium_id = $1 AND p.status = 'completed' \
             AND p.paid_at >= date_trunc('month', NOW())) AS payments_count, \
            (SELECT COALESCE(SUM(p.amount), 0) FROM payments p \
             JOIN maintenance_fees f ON f.id = p.fee_id \
             JOIN units u ON u.id = f.unit_id \
             WHERE u.condominium_id = $1 AND p.status = 'completed' \
             AND p.paid_at >= date_trunc('month', NOW())) AS payments_income, \
            (SELECT COUNT(*) FROM security_alerts \
             WHERE condominium_id = $1 \
             AND occurred_at >= date_trunc('month', NOW())) AS alerts_this_month, \
            (SELECT COUNT(*) FROM cameras \
             WHERE condominium_id = $1 AND is_active) AS active_cameras, \
            (SELECT COUNT(*) FROM maintenance_requests \
             WHERE condominium_id = $1 \
             AND status IN ('pending', 'assigned', 'in_progress')) AS open_requests",
    )
    .bind(condominium_id)
    .fetch_one(&state.pool)
    .await?;

    let occupancy_rate = if row.units_active > 0 {
        row.units_occupied as f64 / row.units_active as f64 * 100.0
    } else {
        0.0
    };

    Ok(Json(AdminStats {
        residents: ResidentStats {
            total: row.residents_total,
            active: row.residents_active,
        },
        units: UnitStats {
            total: row.units_total,
            active: row.units_active,
            occupancy_rate,
        },
        payments_this_month: PaymentStats {
            count: row.payments_count,
            income: row.payments_income,
        },
        alerts_this_month: row.alerts_this_month,
        active_cameras: row.active_cameras,
        open_maintenance_requests: row.open_requests,
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Row to public shape, resolving the role name on the way.
async fn user_to_response(state: &AppState, user: &User) -> AppResult<UserResponse> {
    let role_name = RoleRepo::resolve_name(&state.pool, user.role_id).await?;
    Ok(UserResponse::from_user(user, role_name))
}
