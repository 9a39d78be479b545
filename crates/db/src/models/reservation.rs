//! Amenity reservation model and DTOs.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use strata_core::types::{DbId, Timestamp};

/// A reservation row from the `reservations` table.
///
/// Occupies the half-open slot `[starts_at, ends_at)` on `reserved_on`
/// while `status` is `pending` or `confirmed`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reservation {
    pub id: DbId,
    pub amenity_id: DbId,
    pub user_id: DbId,
    pub reserved_on: NaiveDate,
    pub starts_at: NaiveTime,
    pub ends_at: NaiveTime,
    pub party_size: i32,
    pub purpose: String,
    pub notes: Option<String>,
    pub status: String,
    pub total_amount: Decimal,
    pub deposit_paid: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a reservation. The price and status are computed
/// server-side, never accepted from the client.
pub struct CreateReservation {
    pub amenity_id: DbId,
    pub user_id: DbId,
    pub reserved_on: NaiveDate,
    pub starts_at: NaiveTime,
    pub ends_at: NaiveTime,
    pub party_size: i32,
    pub purpose: String,
    pub notes: Option<String>,
    pub status: String,
    pub total_amount: Decimal,
}
