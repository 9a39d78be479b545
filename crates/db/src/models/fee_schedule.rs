//! Billing fee schedule model and DTOs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use strata_core::types::{DbId, Timestamp};

/// A fee schedule row from the `fee_schedules` table.
///
/// One row per condominium and billing period
/// (`uq_fee_schedules_period`). The four base amounts are scaled by each
/// unit type's cost factor at generation time; `late_fee`, `grace_days`,
/// and `monthly_interest_pct` drive the late-charge pass.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FeeSchedule {
    pub id: DbId,
    pub condominium_id: DbId,
    pub period_month: i32,
    pub period_year: i32,
    pub base_administration: Decimal,
    pub base_maintenance: Decimal,
    pub base_security: Decimal,
    pub base_cleaning: Decimal,
    pub late_fee: Decimal,
    pub grace_days: i32,
    pub monthly_interest_pct: Decimal,
    pub due_on: NaiveDate,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a fee schedule.
#[derive(Debug, Deserialize)]
pub struct CreateFeeSchedule {
    pub condominium_id: DbId,
    pub period_month: i32,
    pub period_year: i32,
    pub base_administration: Decimal,
    pub base_maintenance: Decimal,
    pub base_security: Decimal,
    pub base_cleaning: Decimal,
    pub late_fee: Decimal,
    pub grace_days: i32,
    pub monthly_interest_pct: Decimal,
    pub due_on: NaiveDate,
}

/// DTO for updating a fee schedule. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateFeeSchedule {
    pub base_administration: Option<Decimal>,
    pub base_maintenance: Option<Decimal>,
    pub base_security: Option<Decimal>,
    pub base_cleaning: Option<Decimal>,
    pub late_fee: Option<Decimal>,
    pub grace_days: Option<i32>,
    pub monthly_interest_pct: Option<Decimal>,
    pub due_on: Option<NaiveDate>,
    pub is_active: Option<bool>,
}
