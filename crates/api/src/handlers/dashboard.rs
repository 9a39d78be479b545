//! Handlers for the resident dashboard (`GET /dashboard`).
//!
//! One aggregate endpoint backing the app's home screen, plus a static
//! quick-action catalog the client renders as shortcut tiles.

use axum::extract::State;
use axum::Json;
use chrono::{Days, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use strata_core::types::DbId;
use strata_db::models::access_log::AccessLog;
use strata_db::models::alert::SecurityAlert;
use strata_db::models::fee::Fee;
use strata_db::models::reservation::Reservation;
use strata_db::models::unit::Unit;
use strata_db::models::user::UserResponse;
use strata_db::repositories::{
    AccessLogRepo, AlertRepo, ResidencyRepo, RoleRepo, UnitRepo,
};

use crate::error::AppResult;
use crate::handlers::{load_user, resolve_condominium};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Upcoming dues cover fees due within this many days.
const DUES_WINDOW_DAYS: u64 = 30;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// The resident dashboard aggregate.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub profile: UserResponse,
    /// The caller's primary unit (oldest active residency), if any.
    pub unit: Option<Unit>,
    /// The unit's next unpaid fee, earliest due date first.
    pub next_fee: Option<Fee>,
    /// The caller's next confirmed reservations (up to 3).
    pub upcoming_reservations: Vec<Reservation>,
    /// Latest unreviewed alerts of the condominium (up to 5).
    pub recent_alerts: Vec<SecurityAlert>,
    /// The caller's latest access events (up to 5).
    pub recent_access: Vec<AccessLog>,
    /// Sum of `amount_due` over the unit's pending and overdue fees.
    pub balance_due: Decimal,
    /// Fees coming due within 30 days (up to 3).
    pub upcoming_dues: Vec<UpcomingDue>,
}

/// A fee coming due soon, with the countdown precomputed.
#[derive(Debug, Serialize)]
pub struct UpcomingDue {
    pub fee_id: DbId,
    pub amount_due: Decimal,
    pub due_on: NaiveDate,
    pub days_remaining: i64,
}

/// One entry of the quick-action catalog.
#[derive(Debug, Serialize)]
pub struct QuickAction {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub route: &'static str,
    pub icon: &'static str,
}

// ---------------------------------------------------------------------------
// Dashboard aggregate
// ---------------------------------------------------------------------------

#[derive(Debug, sqlx::FromRow)]
struct UpcomingDueRow {
    id: DbId,
    amount_due: Decimal,
    due_on: NaiveDate,
}

/// GET /api/v1/dashboard
///
/// Returns the caller's home-screen aggregate. 404 when the caller's
/// user row no longer exists.
pub async fn dashboard(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DashboardResponse>> {
    let user = load_user(&state, auth.user_id).await?;
    let role = RoleRepo::resolve_name(&state.pool, user.role_id).await?;
    let profile = UserResponse::from_user(&user, role);
    let condominium_id = resolve_condominium(&state, auth.user_id).await?;
    let today = Utc::now().date_naive();

    let residency = ResidencyRepo::primary_for_user(&state.pool, auth.user_id).await?;
    let unit = match &residency {
        Some(r) => UnitRepo::find_by_id(&state.pool, r.unit_id).await?,
        None => None,
    };

    let (next_fee, balance_due, upcoming_dues) = match &unit {
        Some(unit) => {
            let next_fee = sqlx::query_as::<_, Fee>(
                "SELECT id, unit_id, schedule_id, amount_administration, amount_maintenance, \
                        amount_security, amount_cleaning, amount_extras, amount_penalties, \
                        amount_interest, amount_total, amount_paid, amount_due, status, \
                        due_on, last_paid_at, created_at \
                 FROM maintenance_fees \
                 WHERE unit_id = $1 AND status IN ('pending', 'overdue') \
                 ORDER BY due_on ASC, id ASC \
                 LIMIT 1",
            )
            .bind(unit.id)
            .fetch_optional(&state.pool)
            .await?;

            let balance: Option<Decimal> = sqlx::query_scalar(
                "SELECT COALESCE(SUM(amount_due), 0) FROM maintenance_fees \
                 WHERE unit_id = $1 AND status IN ('pending', 'overdue')",
            )
            .bind(unit.id)
            .fetch_one(&state.pool)
            .await?;

            let due_rows: Vec<UpcomingDueRow> = sqlx::query_as(
                "SELECT id, amount_due, due_on FROM maintenance_fees \
                 WHERE unit_id = $1 AND amount_due > 0 \
                   AND due_on >= $2 AND due_on <= $3 \
                 ORDER BY due_on ASC, id ASC \
                 LIMIT 3",
            )
            .bind(unit.id)
            .bind(today)
            .bind(today + Days::new(DUES_WINDOW_DAYS))
            .fetch_all(&state.pool)
            .await?;
            let dues = due_rows
                .into_iter()
                .map(|r| UpcomingDue {
                    fee_id: r.id,
                    amount_due: r.amount_due,
                    due_on: r.due_on,
                    days_remaining: (r.due_on - today).num_days(),
                })
                .collect();

            (next_fee, balance.unwrap_or(Decimal::ZERO), dues)
        }
        None => (None, Decimal::ZERO, Vec::new()),
    };

    let upcoming_reservations = sqlx::query_as::<_, Reservation>(
        "SELECT id, amenity_id, user_id, reserved_on, starts_at, ends_at, party_size, \
                purpose, notes, status, total_amount, deposit_paid, created_at \
         FROM reservations \
         WHERE user_id = $1 AND status = 'confirmed' AND reserved_on >= $2 \
         ORDER BY reserved_on ASC, starts_at ASC \
         LIMIT 3",
    )
    .bind(auth.user_id)
    .bind(today)
    .fetch_all(&state.pool)
    .await?;

    let recent_alerts =
        AlertRepo::list_for_condominium(&state.pool, condominium_id, true, None, 5, 0).await?;
    let recent_access = AccessLogRepo::list_for_condominium(
        &state.pool,
        condominium_id,
        Some(auth.user_id),
        None,
        5,
        0,
    )
    .await?;

    Ok(Json(DashboardResponse {
        profile,
        unit,
        next_fee,
        upcoming_reservations,
        recent_alerts,
        recent_access,
        balance_due,
        upcoming_dues,
    }))
}

// ---------------------------------------------------------------------------
// Quick actions
// ---------------------------------------------------------------------------

/// GET /api/v1/dashboard/quick-actions
///
/// Static catalog of shortcut actions the client renders on the home
/// screen. Kept server-side so all platforms show the same set.
pub async fn quick_actions(_auth: AuthUser) -> Json<DataResponse<Vec<QuickAction>>> {
    let actions = vec![
        QuickAction {
            id: "pay-fee",
            label: "Pay fee",
            description: "Record a payment for an outstanding maintenance fee",
            route: "/fees",
            icon: "credit-card",
        },
        QuickAction {
            id: "reserve-amenity",
            label: "Reserve amenity",
            description: "Book a common area for a date and time slot",
            route: "/reservations",
            icon: "calendar",
        },
        QuickAction {
            id: "report-issue",
            label: "Report issue",
            description: "File a maintenance request",
            route: "/maintenance/requests",
            icon: "wrench",
        },
        QuickAction {
            id: "contact-admin",
            label: "Contact administration",
            description: "See announcements and administration contact details",
            route: "/announcements",
            icon: "mail",
        },
    ];
    Json(DataResponse { data: actions })
}
