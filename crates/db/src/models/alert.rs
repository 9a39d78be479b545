//! Security alert model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use strata_core::types::{DbId, Timestamp};

/// A security alert row from the `security_alerts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SecurityAlert {
    pub id: DbId,
    pub condominium_id: DbId,
    pub camera_id: Option<DbId>,
    pub alert_type: String,
    pub severity: String,
    pub description: String,
    pub occurred_at: Timestamp,
    pub is_reviewed: bool,
    pub reviewed_by: Option<DbId>,
    pub reviewed_at: Option<Timestamp>,
    pub action_taken: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for raising a security alert.
pub struct CreateAlert {
    pub condominium_id: DbId,
    pub camera_id: Option<DbId>,
    pub alert_type: String,
    pub severity: String,
    pub description: String,
    pub occurred_at: Option<Timestamp>,
}
