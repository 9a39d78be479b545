//! Access log model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use strata_core::types::{DbId, Timestamp};

/// An access log row from the `access_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AccessLog {
    pub id: DbId,
    pub condominium_id: DbId,
    pub user_id: Option<DbId>,
    pub visitor_id: Option<DbId>,
    pub vehicle_id: Option<DbId>,
    pub camera_id: Option<DbId>,
    pub direction: String,
    pub method: String,
    pub occurred_at: Timestamp,
    pub is_authorized: bool,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for recording an access event.
pub struct CreateAccessLog {
    pub condominium_id: DbId,
    pub user_id: Option<DbId>,
    pub visitor_id: Option<DbId>,
    pub vehicle_id: Option<DbId>,
    pub camera_id: Option<DbId>,
    pub direction: String,
    pub method: String,
    pub is_authorized: bool,
    pub notes: Option<String>,
}
