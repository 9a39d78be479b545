//! Handlers for `/maintenance/categories` and `/maintenance/requests`.
//!
//! Requests are work orders: residents file them, staff triage, assign,
//! schedule and complete them, and the requester may rate the result.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use strata_core::error::CoreError;
use strata_core::pagination::{clamp_limit, clamp_offset};
use strata_core::roles::is_staff;
use strata_core::statuses::{
    validate_choice, MAINTENANCE_PRIORITIES, MAINTENANCE_STATUSES,
};
use strata_core::types::DbId;
use strata_db::models::maintenance::{
    CreateMaintenanceCategory, CreateMaintenanceRequest, MaintenanceCategory,
    MaintenanceRequest, UpdateMaintenanceCategory, UpdateMaintenanceRequest,
};
use strata_db::repositories::{MaintenanceCategoryRepo, MaintenanceRequestRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::resolve_condominium;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::{DEFAULT_LIMIT, MAX_LIMIT};
use crate::response::DataResponse;
use crate::state::AppState;

// ---- Request types ----

/// Query parameters for `GET /maintenance/categories`.
#[derive(Debug, Deserialize)]
pub struct ListCategoriesQuery {
    pub condominium_id: Option<DbId>,
    #[serde(default)]
    pub include_inactive: bool,
}

/// Body for `POST /maintenance/requests`.
///
/// Title and description get trim-based emptiness checks in the handler,
/// which catch whitespace-only values a length rule would admit.
#[derive(Debug, Deserialize)]
pub struct MaintenanceRequestBody {
    pub category_id: DbId,
    pub unit_id: Option<DbId>,
    pub amenity_id: Option<DbId>,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    #[serde(default = "default_priority")]
    pub priority: String,
}

fn default_priority() -> String {
    "medium".to_string()
}

/// Query parameters for `GET /maintenance/requests`.
#[derive(Debug, Deserialize)]
pub struct ListRequestsQuery {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---- Category handlers ----

/// GET /api/v1/maintenance/categories
pub async fn list_categories(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListCategoriesQuery>,
) -> AppResult<Json<DataResponse<Vec<MaintenanceCategory>>>> {
    let condominium_id = match params.condominium_id {
        Some(id) => id,
        None => resolve_condominium(&state, auth.user_id).await?,
    };
    let categories = MaintenanceCategoryRepo::list_for_condominium(
        &state.pool,
        condominium_id,
        params.include_inactive,
    )
    .await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/maintenance/categories
pub async fn create_category(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateMaintenanceCategory>,
) -> AppResult<(StatusCode, Json<MaintenanceCategory>)> {
    input.validate()?;
    let category = MaintenanceCategoryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/v1/maintenance/categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMaintenanceCategory>,
) -> AppResult<Json<MaintenanceCategory>> {
    input.validate()?;
    let category = MaintenanceCategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Maintenance category",
            id,
        }))?;
    Ok(Json(category))
}

// ---- Request handlers ----

/// GET /api/v1/maintenance/requests
///
/// Residents see their own requests; staff see every request of the
/// condominium and may filter by `?status` and `?priority`.
pub async fn list_requests(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListRequestsQuery>,
) -> AppResult<Json<DataResponse<Vec<MaintenanceRequest>>>> {
    if let Some(status) = &params.status {
        validate_choice("status", status, &MAINTENANCE_STATUSES)?;
    }
    if let Some(priority) = &params.priority {
        validate_choice("priority", priority, &MAINTENANCE_PRIORITIES)?;
    }

    let condominium_id = resolve_condominium(&state, auth.user_id).await?;
    let requested_by = if is_staff(&auth.role) {
        None
    } else {
        Some(auth.user_id)
    };
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);

    let requests = MaintenanceRequestRepo::list_for_condominium(
        &state.pool,
        condominium_id,
        requested_by,
        params.status.as_deref(),
        params.priority.as_deref(),
        limit,
        offset,
    )
    .await?;
    Ok(Json(DataResponse { data: requests }))
}

/// GET /api/v1/maintenance/requests/{id}
pub async fn get_request(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MaintenanceRequest>> {
    let request = find_request(&state, id).await?;
    if request.requested_by != auth.user_id && !is_staff(&auth.role) {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only view your own maintenance requests".into(),
        )));
    }
    Ok(Json(request))
}

/// POST /api/v1/maintenance/requests
///
/// Files a work order in the category's condominium on behalf of the
/// caller.
pub async fn create_request(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<MaintenanceRequestBody>,
) -> AppResult<(StatusCode, Json<MaintenanceRequest>)> {
    validate_choice("priority", &input.priority, &MAINTENANCE_PRIORITIES)?;
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title must not be empty".into(),
        )));
    }
    if input.description.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Description must not be empty".into(),
        )));
    }

    let category = MaintenanceCategoryRepo::find_by_id(&state.pool, input.category_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Maintenance category",
            id: input.category_id,
        }))?;

    let create = CreateMaintenanceRequest {
        condominium_id: category.condominium_id,
        category_id: category.id,
        requested_by: auth.user_id,
        unit_id: input.unit_id,
        amenity_id: input.amenity_id,
        title: input.title,
        description: input.description,
        location: input.location,
        priority: input.priority,
    };
    let request = MaintenanceRequestRepo::create(&state.pool, &create).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// PUT /api/v1/maintenance/requests/{id}
///
/// Staff apply the full update (status, priority, assignment, schedule,
/// costs). The requester may only rate, and only once the request is
/// completed.
pub async fn update_request(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMaintenanceRequest>,
) -> AppResult<Json<MaintenanceRequest>> {
    let request = find_request(&state, id).await?;

    if is_staff(&auth.role) {
        if let Some(status) = &input.status {
            validate_choice("status", status, &MAINTENANCE_STATUSES)?;
        }
        if let Some(priority) = &input.priority {
            validate_choice("priority", priority, &MAINTENANCE_PRIORITIES)?;
        }
        let updated = MaintenanceRequestRepo::update(&state.pool, id, &input, auth.user_id)
            .await?
            .ok_or(request_not_found(id))?;
        return Ok(Json(updated));
    }

    if request.requested_by != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only update your own maintenance requests".into(),
        )));
    }
    let rating = input.rating.ok_or(AppError::Core(CoreError::Validation(
        "Residents can only set the rating fields".into(),
    )))?;
    if !(1..=5).contains(&rating) {
        return Err(AppError::Core(CoreError::Validation(
            "Rating must be between 1 and 5".into(),
        )));
    }

    // The repo guard enforces requester + completed status.
    let rated = MaintenanceRequestRepo::rate(
        &state.pool,
        id,
        auth.user_id,
        rating,
        input.rating_comment.as_deref(),
    )
    .await?
    .ok_or(AppError::Core(CoreError::Validation(
        "Only completed requests can be rated".into(),
    )))?;
    Ok(Json(rated))
}

// ---- Helpers ----

async fn find_request(state: &AppState, id: DbId) -> AppResult<MaintenanceRequest> {
    MaintenanceRequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(request_not_found(id))
}

fn request_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Maintenance request",
        id,
    })
}
