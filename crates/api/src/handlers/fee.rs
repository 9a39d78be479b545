//! Handlers for the `/fees` resource.
//!
//! Fees are created by the schedule generation pass, never through this
//! surface. Residents see the fees of units they actively reside in;
//! admins see everything and may filter. Payments are recorded against
//! a fee and immediately reflected in its totals and status.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strata_core::error::CoreError;
use strata_core::fees::FeeStatus;
use strata_core::pagination::{clamp_limit, clamp_offset};
use strata_core::roles::ROLE_ADMIN;
use strata_core::types::DbId;
use strata_db::models::fee::Fee;
use strata_db::models::payment::{CreatePayment, Payment};
use strata_db::repositories::{FeeRepo, PaymentRepo, ResidencyRepo};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::{DEFAULT_LIMIT, MAX_LIMIT};
use crate::response::DataResponse;
use crate::state::AppState;

// ---- Request / response types ----

/// Query parameters for `GET /fees` (filters apply to the admin view only).
#[derive(Debug, Deserialize)]
pub struct ListFeesQuery {
    pub unit_id: Option<DbId>,
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Body for `POST /fees/{id}/payments`.
///
/// The transaction reference is generated server-side.
#[derive(Debug, Deserialize)]
pub struct PaymentRequest {
    pub method_id: DbId,
    pub amount: Decimal,
    pub receipt_number: Option<String>,
    pub notes: Option<String>,
}

/// Response for a recorded payment: the payment plus the fee it updated.
#[derive(Debug, Serialize)]
pub struct PaymentReceipt {
    pub payment: Payment,
    pub fee: Fee,
}

// ---- Handlers ----

/// GET /api/v1/fees
///
/// Residents get the fees of their active units. Admins get all fees
/// and may filter by `?unit_id` and `?status`.
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListFeesQuery>,
) -> AppResult<Json<DataResponse<Vec<Fee>>>> {
    if auth.role != ROLE_ADMIN {
        let fees = FeeRepo::list_for_user(&state.pool, auth.user_id).await?;
        return Ok(Json(DataResponse { data: fees }));
    }

    if let Some(status) = &params.status {
        FeeStatus::parse(status)?;
    }
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);
    let fees = FeeRepo::list(
        &state.pool,
        params.unit_id,
        params.status.as_deref(),
        limit,
        offset,
    )
    .await?;
    Ok(Json(DataResponse { data: fees }))
}

/// GET /api/v1/fees/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Fee>> {
    let fee = find_fee(&state, id).await?;
    ensure_fee_access(&state, &auth, &fee).await?;
    Ok(Json(fee))
}

/// POST /api/v1/fees/{id}/payments
///
/// Records a payment against the fee and recomputes its totals in the
/// same transaction. Overpayment is accepted; the fee's due amount goes
/// negative and its status becomes `paid`.
pub async fn record_payment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<PaymentRequest>,
) -> AppResult<(StatusCode, Json<PaymentReceipt>)> {
    let fee = find_fee(&state, id).await?;
    ensure_fee_access(&state, &auth, &fee).await?;

    if input.amount <= Decimal::ZERO {
        return Err(AppError::Core(CoreError::Validation(
            "Payment amount must be greater than zero".into(),
        )));
    }

    let create = CreatePayment {
        method_id: input.method_id,
        amount: input.amount,
        transaction_ref: Uuid::new_v4().to_string(),
        receipt_number: input.receipt_number,
        notes: input.notes,
        recorded_by: auth.user_id,
    };
    let (payment, updated_fee) =
        PaymentRepo::apply(&state.pool, id, &create, Utc::now().date_naive())
            .await?
            .ok_or(fee_not_found(id))?;

    Ok((
        StatusCode::CREATED,
        Json(PaymentReceipt {
            payment,
            fee: updated_fee,
        }),
    ))
}

/// GET /api/v1/fees/{id}/payments
pub async fn list_payments(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Payment>>>> {
    let fee = find_fee(&state, id).await?;
    ensure_fee_access(&state, &auth, &fee).await?;

    let payments = PaymentRepo::list_for_fee(&state.pool, id).await?;
    Ok(Json(DataResponse { data: payments }))
}

// ---- Helpers ----

async fn find_fee(state: &AppState, id: DbId) -> AppResult<Fee> {
    FeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(fee_not_found(id))
}

fn fee_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Fee", id })
}

/// A fee is visible to admins and to active residents of its unit.
async fn ensure_fee_access(state: &AppState, auth: &AuthUser, fee: &Fee) -> AppResult<()> {
    if auth.role == ROLE_ADMIN {
        return Ok(());
    }
    let resides = ResidencyRepo::user_resides_in_unit(&state.pool, auth.user_id, fee.unit_id).await?;
    if resides {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Forbidden(
            "You can only access fees for your own unit".into(),
        )))
    }
}
