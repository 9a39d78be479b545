//! Amenity entity model and DTOs.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use strata_core::types::{DbId, Timestamp};
use validator::Validate;

/// An amenity row from the `amenities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Amenity {
    pub id: DbId,
    pub condominium_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub capacity: i32,
    pub hourly_rate: Decimal,
    pub deposit_required: bool,
    pub deposit_amount: Decimal,
    pub opens_at: NaiveTime,
    pub closes_at: NaiveTime,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// DTO for creating an amenity.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAmenity {
    pub condominium_id: DbId,
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub capacity: i32,
    pub hourly_rate: Decimal,
    pub deposit_required: bool,
    pub deposit_amount: Decimal,
    pub opens_at: NaiveTime,
    pub closes_at: NaiveTime,
}

/// DTO for updating an amenity. All fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAmenity {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub capacity: Option<i32>,
    pub hourly_rate: Option<Decimal>,
    pub deposit_required: Option<bool>,
    pub deposit_amount: Option<Decimal>,
    pub opens_at: Option<NaiveTime>,
    pub closes_at: Option<NaiveTime>,
    pub is_active: Option<bool>,
}
