//! Residency (user-unit link) model and DTOs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use strata_core::types::{DbId, Timestamp};

/// A residency row from the `residencies` table.
///
/// Links a user to a unit as owner or tenant. A user's "primary" unit is
/// their oldest active residency.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Residency {
    pub id: DbId,
    pub user_id: DbId,
    pub unit_id: DbId,
    pub is_owner: bool,
    pub ownership_share: Decimal,
    pub starts_on: NaiveDate,
    pub ends_on: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a residency.
#[derive(Debug, Deserialize)]
pub struct CreateResidency {
    pub user_id: DbId,
    pub unit_id: DbId,
    pub is_owner: bool,
    pub ownership_share: Decimal,
    pub starts_on: NaiveDate,
}

/// DTO for updating a residency. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateResidency {
    pub is_owner: Option<bool>,
    pub ownership_share: Option<Decimal>,
    pub starts_on: Option<NaiveDate>,
}
