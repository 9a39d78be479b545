//! Security camera model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use strata_core::types::{DbId, Timestamp};
use validator::Validate;

/// A camera row from the `cameras` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Camera {
    pub id: DbId,
    pub condominium_id: DbId,
    pub name: String,
    pub location: String,
    pub ip_address: String,
    pub port: i32,
    pub is_active: bool,
    pub installed_at: Option<NaiveDate>,
    pub created_at: Timestamp,
}

/// DTO for registering a camera.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCamera {
    pub condominium_id: DbId,
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub location: String,
    pub ip_address: String,
    #[validate(range(min = 1, max = 65535, message = "must be a valid port"))]
    pub port: i32,
    pub installed_at: Option<NaiveDate>,
}

/// DTO for updating a camera. All fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCamera {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub location: Option<String>,
    pub ip_address: Option<String>,
    #[validate(range(min = 1, max = 65535, message = "must be a valid port"))]
    pub port: Option<i32>,
    pub is_active: Option<bool>,
}
