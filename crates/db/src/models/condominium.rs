//! Condominium entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use strata_core::types::{DbId, Timestamp};
use validator::Validate;

/// A condominium row from the `condominiums` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Condominium {
    pub id: DbId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub tax_id: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a condominium.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCondominium {
    #[validate(length(min = 1, max = 150, message = "must be 1-150 characters"))]
    pub name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub address: String,
    pub city: String,
    pub country: String,
    pub phone: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub tax_id: String,
}

/// DTO for updating a condominium. All fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCondominium {
    #[validate(length(min = 1, max = 150, message = "must be 1-150 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    pub is_active: Option<bool>,
}
