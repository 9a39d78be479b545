//! Payment model and DTOs.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use strata_core::types::{DbId, Timestamp};

/// A payment row from the `payments` table.
///
/// `transaction_ref` is a server-generated UUID, unique across all payments
/// (`uq_payments_transaction_ref`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Payment {
    pub id: DbId,
    pub fee_id: DbId,
    pub method_id: DbId,
    pub amount: Decimal,
    pub transaction_ref: String,
    pub receipt_number: Option<String>,
    pub status: String,
    pub paid_at: Timestamp,
    pub notes: Option<String>,
    pub recorded_by: DbId,
    pub verified_by: Option<DbId>,
    pub verified_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for recording a payment against a fee.
pub struct CreatePayment {
    pub method_id: DbId,
    pub amount: Decimal,
    pub transaction_ref: String,
    pub receipt_number: Option<String>,
    pub notes: Option<String>,
    pub recorded_by: DbId,
}
