//! Unit type model and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use strata_core::types::{DbId, Timestamp};
use validator::Validate;

/// A unit type row from the `unit_types` table.
///
/// `cost_factor` scales a schedule's base amounts when fees are generated
/// for units of this type.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UnitType {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub cost_factor: Decimal,
    pub created_at: Timestamp,
}

/// DTO for creating a unit type.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUnitType {
    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub name: String,
    pub description: Option<String>,
    pub cost_factor: Decimal,
}

/// DTO for updating a unit type. All fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUnitType {
    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub cost_factor: Option<Decimal>,
}
