//! Handler for the notification feed (`GET /notifications`).
//!
//! The feed is assembled on demand from the live tables; nothing is
//! stored per recipient. Three sources, one common item shape, grouped
//! by source so clients can render sections.

use axum::extract::State;
use axum::Json;
use chrono::{Days, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use strata_core::roles::audience_for_role;
use strata_core::types::{DbId, Timestamp};
use strata_db::repositories::{AlertRepo, AnnouncementRepo};

use crate::error::AppResult;
use crate::handlers::resolve_condominium;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// How many items each source contributes at most.
const SOURCE_LIMIT: i64 = 10;

/// Payment reminders cover fees due within this many days.
const REMINDER_WINDOW_DAYS: u64 = 7;

/// Reminders this close to the due date are flagged high priority.
const URGENT_DAYS: i64 = 3;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// One feed item, regardless of source.
#[derive(Debug, Serialize)]
pub struct FeedItem {
    pub id: DbId,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub occurred_at: Timestamp,
    pub is_read: bool,
    pub priority: String,
}

/// The grouped notification feed.
#[derive(Debug, Serialize)]
pub struct NotificationFeed {
    pub announcements: Vec<FeedItem>,
    pub alerts: Vec<FeedItem>,
    pub payment_reminders: Vec<FeedItem>,
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

#[derive(Debug, sqlx::FromRow)]
struct ReminderRow {
    id: DbId,
    amount_due: Decimal,
    due_on: NaiveDate,
}

/// GET /api/v1/notifications
///
/// Returns the caller's feed: published announcements for their
/// audience, recent security alerts of their condominium (read state
/// mirrors the review flag), and payment reminders for fees of their
/// active units coming due within a week.
pub async fn feed(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<NotificationFeed>> {
    let condominium_id = resolve_condominium(&state, auth.user_id).await?;
    let today = Utc::now().date_naive();

    let published = AnnouncementRepo::list_published(
        &state.pool,
        condominium_id,
        audience_for_role(&auth.role),
        SOURCE_LIMIT,
    )
    .await?;
    let announcements = published
        .into_iter()
        .map(|a| FeedItem {
            id: a.id,
            kind: a.kind,
            title: a.title,
            message: a.body,
            occurred_at: a.published_at.unwrap_or(a.created_at),
            is_read: false,
            priority: a.priority,
        })
        .collect();

    let recent_alerts =
        AlertRepo::list_for_condominium(&state.pool, condominium_id, false, None, SOURCE_LIMIT, 0)
            .await?;
    let alerts = recent_alerts
        .into_iter()
        .map(|a| FeedItem {
            id: a.id,
            kind: a.alert_type,
            title: format!("Security alert ({})", a.severity),
            message: a.description,
            occurred_at: a.occurred_at,
            is_read: a.is_reviewed,
            priority: a.severity,
        })
        .collect();

    let window_end = today + Days::new(REMINDER_WINDOW_DAYS);
    let reminders: Vec<ReminderRow> = sqlx::query_as(
        "SELECT f.id, f.amount_due, f.due_on \
         FROM maintenance_fees f \
         JOIN residencies r ON r.unit_id = f.unit_id \
         WHERE r.user_id = $1 AND r.is_active = true \
           AND f.amount_due > 0 \
           AND f.due_on >= $2 AND f.due_on <= $3 \
         ORDER BY f.due_on ASC, f.id ASC",
    )
    .bind(auth.user_id)
    .bind(today)
    .bind(window_end)
    .fetch_all(&state.pool)
    .await?;

    let payment_reminders = reminders
        .into_iter()
        .map(|r| {
            let days_remaining = (r.due_on - today).num_days();
            FeedItem {
                id: r.id,
                kind: "payment_due".to_string(),
                title: "Upcoming maintenance fee".to_string(),
                message: format!("{} due on {}", r.amount_due, r.due_on),
                occurred_at: r.due_on.and_time(NaiveTime::MIN).and_utc(),
                is_read: false,
                priority: if days_remaining <= URGENT_DAYS {
                    "high".to_string()
                } else {
                    "medium".to_string()
                },
            }
        })
        .collect();

    Ok(Json(NotificationFeed {
        announcements,
        alerts,
        payment_reminders,
    }))
}
