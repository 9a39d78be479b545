//! Maintenance fee model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use strata_core::fees::FeeComponents;
use strata_core::types::{DbId, Timestamp};

/// A maintenance fee row from the `maintenance_fees` table.
///
/// `amount_total`, `amount_due`, and `status` are derived values: the
/// repository recomputes them from the components and `amount_paid` inside
/// the same transaction as every mutation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Fee {
    pub id: DbId,
    pub unit_id: DbId,
    pub schedule_id: DbId,
    pub amount_administration: Decimal,
    pub amount_maintenance: Decimal,
    pub amount_security: Decimal,
    pub amount_cleaning: Decimal,
    pub amount_extras: Decimal,
    pub amount_penalties: Decimal,
    pub amount_interest: Decimal,
    pub amount_total: Decimal,
    pub amount_paid: Decimal,
    pub amount_due: Decimal,
    pub status: String,
    pub due_on: NaiveDate,
    pub last_paid_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl Fee {
    /// The seven itemized components of this fee.
    pub fn components(&self) -> FeeComponents {
        FeeComponents {
            administration: self.amount_administration,
            maintenance: self.amount_maintenance,
            security: self.amount_security,
            cleaning: self.amount_cleaning,
            extras: self.amount_extras,
            penalties: self.amount_penalties,
            interest: self.amount_interest,
        }
    }
}

