//! Payment method catalog model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use strata_core::types::{DbId, Timestamp};
use validator::Validate;

/// A payment method row from the `payment_methods` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PaymentMethod {
    pub id: DbId,
    pub condominium_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub requires_receipt: bool,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a payment method.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePaymentMethod {
    pub condominium_id: DbId,
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub name: String,
    pub description: Option<String>,
    pub requires_receipt: bool,
}

/// DTO for updating a payment method. All fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePaymentMethod {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub requires_receipt: Option<bool>,
    pub is_active: Option<bool>,
}
