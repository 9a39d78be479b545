//! Amenity reservation rules: slot validation, overlap detection, pricing.
//!
//! A reservation occupies a half-open interval `[starts_at, ends_at)` on a
//! single calendar date. Only reservations in a blocking status (pending or
//! confirmed) occupy their slot; cancelled and completed ones free it.

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::error::CoreError;

/// Lifecycle states of an amenity reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    /// The lowercase database representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::Completed => "completed",
        }
    }

    /// Parse the database representation back into a status.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "pending" => Ok(ReservationStatus::Pending),
            "confirmed" => Ok(ReservationStatus::Confirmed),
            "cancelled" => Ok(ReservationStatus::Cancelled),
            "completed" => Ok(ReservationStatus::Completed),
            other => Err(CoreError::Validation(format!(
                "Unknown reservation status: {other}"
            ))),
        }
    }

    /// Whether a reservation in this status occupies its time slot.
    pub fn blocks_slot(&self) -> bool {
        matches!(self, ReservationStatus::Pending | ReservationStatus::Confirmed)
    }

    /// Whether a reservation in this status may still be cancelled.
    pub fn cancellable(&self) -> bool {
        self.blocks_slot()
    }
}

/// Half-open interval overlap test.
///
/// Two slots conflict iff `a_start < b_end && a_end > b_start`. Back-to-back
/// slots (`a_end == b_start`) do not overlap.
pub fn overlaps(
    a_start: NaiveTime,
    a_end: NaiveTime,
    b_start: NaiveTime,
    b_end: NaiveTime,
) -> bool {
    a_start < b_end && a_end > b_start
}

/// Validate a requested slot against the amenity's opening window.
pub fn validate_slot(
    starts_at: NaiveTime,
    ends_at: NaiveTime,
    opens_at: NaiveTime,
    closes_at: NaiveTime,
) -> Result<(), CoreError> {
    if ends_at <= starts_at {
        return Err(CoreError::Validation(
            "Reservation end time must be after its start time".into(),
        ));
    }
    if starts_at < opens_at || ends_at > closes_at {
        return Err(CoreError::Validation(format!(
            "Reservation must fall within opening hours ({opens_at} - {closes_at})"
        )));
    }
    Ok(())
}

/// Price a slot at the amenity's hourly rate, prorated by the minute and
/// rounded to 2 decimal places.
pub fn quote(hourly_rate: Decimal, starts_at: NaiveTime, ends_at: NaiveTime) -> Decimal {
    let minutes = (ends_at - starts_at).num_minutes();
    (hourly_rate * Decimal::from(minutes) / Decimal::from(60)).round_dp(2)
}
