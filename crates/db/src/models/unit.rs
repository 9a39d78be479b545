//! Unit entity model and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use strata_core::types::{DbId, Timestamp};
use validator::Validate;

/// A unit row from the `units` table.
///
/// `number` is unique per condominium (`uq_units_condominium_number`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Unit {
    pub id: DbId,
    pub condominium_id: DbId,
    pub unit_type_id: DbId,
    pub number: String,
    pub floor: i32,
    pub block: Option<String>,
    pub area_m2: Option<Decimal>,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub ownership_share: Decimal,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a unit.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUnit {
    pub condominium_id: DbId,
    pub unit_type_id: DbId,
    #[validate(length(min = 1, max = 20, message = "must be 1-20 characters"))]
    pub number: String,
    pub floor: i32,
    pub block: Option<String>,
    pub area_m2: Option<Decimal>,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub ownership_share: Decimal,
}

/// DTO for updating a unit. All fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUnit {
    pub unit_type_id: Option<DbId>,
    #[validate(length(min = 1, max = 20, message = "must be 1-20 characters"))]
    pub number: Option<String>,
    pub floor: Option<i32>,
    pub block: Option<String>,
    pub area_m2: Option<Decimal>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub ownership_share: Option<Decimal>,
    pub is_active: Option<bool>,
}
