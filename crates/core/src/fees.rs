//! Maintenance-fee arithmetic and status derivation.
//!
//! A fee invoice is itemized into seven cost components. The stored totals
//! are always derived values: `amount_total` is the component sum and
//! `amount_due` is `amount_total - amount_paid`. Repositories recompute
//! both, plus the status, after every fee mutation so persisted rows never
//! drift from these invariants.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::CoreError;

/// Lifecycle states of a maintenance fee, derived from its balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeStatus {
    /// Unpaid, not yet past its due date.
    Pending,
    /// Fully settled (`amount_due <= 0`).
    Paid,
    /// Unpaid with no payments recorded, past its due date.
    Overdue,
    /// Partially settled (`amount_due > 0` and `amount_paid > 0`).
    PartiallyPaid,
}

impl FeeStatus {
    /// The lowercase database representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeeStatus::Pending => "pending",
            FeeStatus::Paid => "paid",
            FeeStatus::Overdue => "overdue",
            FeeStatus::PartiallyPaid => "partially_paid",
        }
    }

    /// Parse the database representation back into a status.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "pending" => Ok(FeeStatus::Pending),
            "paid" => Ok(FeeStatus::Paid),
            "overdue" => Ok(FeeStatus::Overdue),
            "partially_paid" => Ok(FeeStatus::PartiallyPaid),
            other => Err(CoreError::Validation(format!(
                "Unknown fee status: {other}"
            ))),
        }
    }
}

/// The seven itemized cost components of a fee invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeeComponents {
    pub administration: Decimal,
    pub maintenance: Decimal,
    pub security: Decimal,
    pub cleaning: Decimal,
    pub extras: Decimal,
    pub penalties: Decimal,
    pub interest: Decimal,
}

impl FeeComponents {
    /// Sum of all seven components.
    pub fn total(&self) -> Decimal {
        self.administration
            + self.maintenance
            + self.security
            + self.cleaning
            + self.extras
            + self.penalties
            + self.interest
    }
}

/// Derive a fee's status from its outstanding balance and due date.
///
/// The mapping, checked in order:
/// 1. `amount_due <= 0` -> [`FeeStatus::Paid`]
/// 2. `amount_paid > 0` -> [`FeeStatus::PartiallyPaid`]
/// 3. `due_on < today`  -> [`FeeStatus::Overdue`]
/// 4. otherwise         -> [`FeeStatus::Pending`]
pub fn derive_status(
    amount_due: Decimal,
    amount_paid: Decimal,
    due_on: NaiveDate,
    today: NaiveDate,
) -> FeeStatus {
    if amount_due <= Decimal::ZERO {
        FeeStatus::Paid
    } else if amount_paid > Decimal::ZERO {
        FeeStatus::PartiallyPaid
    } else if due_on < today {
        FeeStatus::Overdue
    } else {
        FeeStatus::Pending
    }
}

/// Build the components of a freshly generated fee from a billing schedule's
/// base amounts and the unit type's cost factor.
///
/// Each base amount is scaled by `cost_factor` and rounded to 2 decimal
/// places. Extras, penalties, and interest always start at zero; they are
/// added later by manual adjustment or the late-charge pass.
pub fn scaled_components(
    base_administration: Decimal,
    base_maintenance: Decimal,
    base_security: Decimal,
    base_cleaning: Decimal,
    cost_factor: Decimal,
) -> FeeComponents {
    let scale = |base: Decimal| (base * cost_factor).round_dp(2);
    FeeComponents {
        administration: scale(base_administration),
        maintenance: scale(base_maintenance),
        security: scale(base_security),
        cleaning: scale(base_cleaning),
        extras: Decimal::ZERO,
        penalties: Decimal::ZERO,
        interest: Decimal::ZERO,
    }
}

/// Compute the late charges for an overdue fee.
///
/// Returns `(penalty, interest)`: the flat late fee from the schedule, and
/// one month of interest on the currently outstanding amount, rounded to 2
/// decimal places.
pub fn late_charges(
    outstanding: Decimal,
    late_fee: Decimal,
    monthly_interest_pct: Decimal,
) -> (Decimal, Decimal) {
    let interest = (outstanding * monthly_interest_pct / Decimal::ONE_HUNDRED).round_dp(2);
    (late_fee, interest)
}
