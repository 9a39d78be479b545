//! Handlers for the `/reservations` resource.
//!
//! Booking is fully server-priced: the client sends the slot and party
//! details, the server computes the price from the amenity's hourly rate
//! and rejects slots that conflict with an existing blocking reservation.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use strata_core::error::CoreError;
use strata_core::pagination::{clamp_limit, clamp_offset};
use strata_core::reservations::{quote, validate_slot, ReservationStatus};
use strata_core::roles::ROLE_ADMIN;
use strata_core::types::DbId;
use strata_db::models::reservation::{CreateReservation, Reservation};
use strata_db::repositories::{AmenityRepo, ReservationRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::{DEFAULT_LIMIT, MAX_LIMIT};
use crate::response::DataResponse;
use crate::state::AppState;

// ---- Request types ----

/// Body for `POST /reservations`.
///
/// Price and status are never accepted from the client.
#[derive(Debug, Deserialize)]
pub struct ReservationRequest {
    pub amenity_id: DbId,
    pub reserved_on: NaiveDate,
    pub starts_at: NaiveTime,
    pub ends_at: NaiveTime,
    pub party_size: i32,
    pub purpose: String,
    pub notes: Option<String>,
}

/// Query parameters for `GET /reservations`.
#[derive(Debug, Deserialize)]
pub struct ListReservationsQuery {
    /// Admin-only filter; residents always see their own reservations.
    pub user_id: Option<DbId>,
    pub amenity_id: Option<DbId>,
    pub reserved_on: Option<NaiveDate>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---- Handlers ----

/// GET /api/v1/reservations
///
/// Residents see their own reservations. Admins see all and may filter
/// by `?user_id`, `?amenity_id` and `?reserved_on`.
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListReservationsQuery>,
) -> AppResult<Json<DataResponse<Vec<Reservation>>>> {
    let user_filter = if auth.role == ROLE_ADMIN {
        params.user_id
    } else {
        Some(auth.user_id)
    };
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);

    let reservations = ReservationRepo::list(
        &state.pool,
        user_filter,
        params.amenity_id,
        params.reserved_on,
        limit,
        offset,
    )
    .await?;
    Ok(Json(DataResponse { data: reservations }))
}

/// GET /api/v1/reservations/{id}
///
/// Visible to the reservation's owner and to admins.
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Reservation>> {
    let reservation = find_reservation(&state, id).await?;
    if reservation.user_id != auth.user_id && auth.role != ROLE_ADMIN {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only view your own reservations".into(),
        )));
    }
    Ok(Json(reservation))
}

/// POST /api/v1/reservations
///
/// Books a slot for the authenticated user. The slot must fall inside
/// the amenity's opening hours, the party must fit its capacity and the
/// date must not be in the past. Returns 409 when the slot is taken.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<ReservationRequest>,
) -> AppResult<(StatusCode, Json<Reservation>)> {
    let amenity = AmenityRepo::find_by_id(&state.pool, input.amenity_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Amenity",
            id: input.amenity_id,
        }))?;
    if !amenity.is_active {
        return Err(AppError::Core(CoreError::Validation(
            "Amenity is not available for reservations".into(),
        )));
    }

    if input.reserved_on < Utc::now().date_naive() {
        return Err(AppError::Core(CoreError::Validation(
            "Reservation date cannot be in the past".into(),
        )));
    }
    validate_slot(
        input.starts_at,
        input.ends_at,
        amenity.opens_at,
        amenity.closes_at,
    )?;
    if input.party_size < 1 || input.party_size > amenity.capacity {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Party size must be between 1 and {}",
            amenity.capacity
        ))));
    }

    let total_amount = quote(amenity.hourly_rate, input.starts_at, input.ends_at);
    let create = CreateReservation {
        amenity_id: amenity.id,
        user_id: auth.user_id,
        reserved_on: input.reserved_on,
        starts_at: input.starts_at,
        ends_at: input.ends_at,
        party_size: input.party_size,
        purpose: input.purpose,
        notes: input.notes,
        status: ReservationStatus::Confirmed.as_str().to_string(),
        total_amount,
    };

    let reservation = ReservationRepo::create_checked(&state.pool, &create)
        .await?
        .ok_or(AppError::Core(CoreError::Conflict(
            "Time slot conflicts with an existing reservation".into(),
        )))?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

/// POST /api/v1/reservations/{id}/cancel
///
/// The reservation's owner or an admin may cancel while the reservation
/// is still pending or confirmed.
pub async fn cancel(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Reservation>> {
    let reservation = find_reservation(&state, id).await?;
    if reservation.user_id != auth.user_id && auth.role != ROLE_ADMIN {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only cancel your own reservations".into(),
        )));
    }

    let status = ReservationStatus::parse(&reservation.status)?;
    if !status.cancellable() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "A {} reservation cannot be cancelled",
            reservation.status
        ))));
    }

    // The guard in the UPDATE covers a status change racing this request.
    let cancelled = ReservationRepo::cancel(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::Validation(
            "Reservation is no longer cancellable".into(),
        )))?;
    Ok(Json(cancelled))
}

// ---- Helpers ----

async fn find_reservation(state: &AppState, id: DbId) -> AppResult<Reservation> {
    ReservationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Reservation",
            id,
        }))
}
