//! Resident vehicle model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use strata_core::types::{DbId, Timestamp};
use validator::Validate;

/// A vehicle row from the `vehicles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vehicle {
    pub id: DbId,
    pub owner_id: DbId,
    pub plate: String,
    pub kind: String,
    pub make: String,
    pub model: String,
    pub year: Option<i32>,
    pub color: String,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// DTO for registering a vehicle.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicle {
    #[validate(length(min = 1, max = 15, message = "must be 1-15 characters"))]
    pub plate: String,
    pub kind: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub make: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub model: String,
    pub year: Option<i32>,
    pub color: String,
}
