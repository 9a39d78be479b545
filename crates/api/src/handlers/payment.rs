//! Handlers for the `/payments` resource.

use axum::extract::{Path, State};
use axum::Json;
use strata_core::error::CoreError;
use strata_core::types::DbId;
use strata_db::models::payment::Payment;
use strata_db::repositories::PaymentRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// POST /api/v1/payments/{id}/verify
///
/// Marks a payment as verified by the acting admin. Verification is an
/// audit stamp; it does not change the payment or fee amounts.
pub async fn verify(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Payment>> {
    let payment = PaymentRepo::verify(&state.pool, id, admin.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Payment",
            id,
        }))?;
    Ok(Json(payment))
}
