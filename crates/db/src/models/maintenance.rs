//! Maintenance category and work-order models and DTOs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use strata_core::types::{DbId, Timestamp};
use validator::Validate;

/// A category row from the `maintenance_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MaintenanceCategory {
    pub id: DbId,
    pub condominium_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub is_preventive: bool,
    pub estimated_cost: Option<Decimal>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a maintenance category.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenanceCategory {
    pub condominium_id: DbId,
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub name: String,
    pub description: Option<String>,
    pub is_preventive: bool,
    pub estimated_cost: Option<Decimal>,
}

/// DTO for updating a maintenance category. All fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMaintenanceCategory {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_preventive: Option<bool>,
    pub estimated_cost: Option<Decimal>,
    pub is_active: Option<bool>,
}

/// A work-order row from the `maintenance_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MaintenanceRequest {
    pub id: DbId,
    pub condominium_id: DbId,
    pub category_id: DbId,
    pub requested_by: DbId,
    pub unit_id: Option<DbId>,
    pub amenity_id: Option<DbId>,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub priority: String,
    pub status: String,
    pub assigned_to: Option<DbId>,
    pub assigned_by: Option<DbId>,
    pub assigned_at: Option<Timestamp>,
    pub scheduled_for: Option<NaiveDate>,
    pub completed_at: Option<Timestamp>,
    pub estimated_cost: Option<Decimal>,
    pub actual_cost: Option<Decimal>,
    pub rating: Option<i32>,
    pub rating_comment: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for filing a maintenance request.
pub struct CreateMaintenanceRequest {
    pub condominium_id: DbId,
    pub category_id: DbId,
    pub requested_by: DbId,
    pub unit_id: Option<DbId>,
    pub amenity_id: Option<DbId>,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub priority: String,
}

/// DTO for updating a work order. All fields are optional.
///
/// Staff may change status, priority, assignment, scheduling, and costs;
/// the requester may only set the rating fields, and only once the request
/// is completed. The handler enforces the split.
#[derive(Debug, Deserialize)]
pub struct UpdateMaintenanceRequest {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assigned_to: Option<DbId>,
    pub scheduled_for: Option<NaiveDate>,
    pub estimated_cost: Option<Decimal>,
    pub actual_cost: Option<Decimal>,
    pub rating: Option<i32>,
    pub rating_comment: Option<String>,
}
