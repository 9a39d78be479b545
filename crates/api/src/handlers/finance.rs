//! Handler for the resident finance summary (`GET /finances`).
//!
//! One aggregate endpoint backing the resident's finance screen: the
//! outstanding balance of their primary unit, recent payment activity
//! and what is due next.

use axum::extract::State;
use axum::Json;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use strata_core::error::CoreError;
use strata_core::statuses::PAYMENT_COMPLETED;
use strata_core::types::DbId;
use strata_db::models::fee::Fee;
use strata_db::models::payment::Payment;
use strata_db::models::payment_method::PaymentMethod;
use strata_db::repositories::{PaymentMethodRepo, ResidencyRepo, UnitRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// The full finance summary for the caller's primary unit.
#[derive(Debug, Serialize)]
pub struct FinanceSummary {
    pub unit_id: DbId,
    /// Sum of `amount_due` over the unit's pending and overdue fees.
    pub balance_due: Decimal,
    pub unpaid_fees: i64,
    pub payments_this_month: i64,
    pub paid_this_year: Decimal,
    pub next_due: Option<NextDueFee>,
    /// Last 10 completed payments against the unit's fees.
    pub recent_payments: Vec<Payment>,
    pub payment_methods: Vec<PaymentMethod>,
    /// Unpaid fees, soonest due first.
    pub outstanding_fees: Vec<Fee>,
}

/// The next fee coming due for the unit.
#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct NextDueFee {
    pub fee_id: DbId,
    pub amount_due: Decimal,
    pub due_on: NaiveDate,
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

#[derive(Debug, sqlx::FromRow)]
struct FinanceTotalsRow {
    balance_due: Option<Decimal>,
    unpaid_fees: Option<i64>,
    payments_this_month: Option<i64>,
    paid_this_year: Option<Decimal>,
}

/// GET /api/v1/finances
///
/// Summarizes the caller's primary unit (their oldest active residency).
/// Returns 404 when the caller has no active residency.
pub async fn summary(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<FinanceSummary>> {
    let residency = ResidencyRepo::primary_for_user(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Active residency for user",
            id: auth.user_id,
        }))?;
    let unit_id = residency.unit_id;

    let totals = sqlx::query_as::<_, FinanceTotalsRow>(
        "SELECT \
             (SELECT COALESCE(SUM(amount_due), 0) FROM maintenance_fees \
              WHERE unit_id = $1 AND status IN ('pending', 'overdue')) AS balance_due, \
             (SELECT COUNT(*) FROM maintenance_fees \
              WHERE unit_id = $1 AND status IN ('pending', 'overdue')) AS unpaid_fees, \
             (SELECT COUNT(*) FROM payments p \
              JOIN maintenance_fees f ON f.id = p.fee_id \
              WHERE f.unit_id = $1 AND p.status = $2 \
                AND p.paid_at >= date_trunc('month', NOW())) AS payments_this_month, \
             (SELECT COALESCE(SUM(p.amount), 0) FROM payments p \
              JOIN maintenance_fees f ON f.id = p.fee_id \
              WHERE f.unit_id = $1 AND p.status = $2 \
                AND p.paid_at >= date_trunc('year', NOW())) AS paid_this_year",
    )
    .bind(unit_id)
    .bind(PAYMENT_COMPLETED)
    .fetch_one(&state.pool)
    .await?;

    let next_due = sqlx::query_as::<_, NextDueFee>(
        "SELECT id AS fee_id, amount_due, due_on FROM maintenance_fees \
         WHERE unit_id = $1 AND status IN ('pending', 'overdue') \
         ORDER BY due_on ASC, id ASC \
         LIMIT 1",
    )
    .bind(unit_id)
    .fetch_optional(&state.pool)
    .await?;

    let recent_payments = sqlx::query_as::<_, Payment>(
        "SELECT p.id, p.fee_id, p.method_id, p.amount, p.transaction_ref, \
                p.receipt_number, p.status, p.paid_at, p.notes, p.recorded_by, \
                p.verified_by, p.verified_at, p.created_at \
         FROM payments p \
         JOIN maintenance_fees f ON f.id = p.fee_id \
         WHERE f.unit_id = $1 AND p.status = $2 \
         ORDER BY p.paid_at DESC, p.id DESC \
         LIMIT 10",
    )
    .bind(unit_id)
    .bind(PAYMENT_COMPLETED)
    .fetch_all(&state.pool)
    .await?;

    let outstanding_fees = sqlx::query_as::<_, Fee>(
        "SELECT id, unit_id, schedule_id, amount_administration, amount_maintenance, \
                amount_security, amount_cleaning, amount_extras, amount_penalties, \
                amount_interest, amount_total, amount_paid, amount_due, status, \
                due_on, last_paid_at, created_at \
         FROM maintenance_fees \
         WHERE unit_id = $1 AND status IN ('pending', 'overdue') \
         ORDER BY due_on ASC, id ASC",
    )
    .bind(unit_id)
    .fetch_all(&state.pool)
    .await?;

    let unit = UnitRepo::find_by_id(&state.pool, unit_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Unit",
            id: unit_id,
        }))?;
    let payment_methods =
        PaymentMethodRepo::list_for_condominium(&state.pool, unit.condominium_id, false).await?;

    Ok(Json(FinanceSummary {
        unit_id,
        balance_due: totals.balance_due.unwrap_or(Decimal::ZERO),
        unpaid_fees: totals.unpaid_fees.unwrap_or(0),
        payments_this_month: totals.payments_this_month.unwrap_or(0),
        paid_this_year: totals.paid_this_year.unwrap_or(Decimal::ZERO),
        next_due,
        recent_payments,
        payment_methods,
        outstanding_fees,
    }))
}
