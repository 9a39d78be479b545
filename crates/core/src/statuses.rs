//! String-valued status and category vocabularies stored as lowercase TEXT.
//!
//! Fee and reservation statuses carry real logic and live in [`crate::fees`]
//! and [`crate::reservations`]; the vocabularies here are validated at the
//! API boundary and otherwise passed through as strings.

use crate::error::CoreError;

pub const PAYMENT_STATUSES: [&str; 5] =
    ["pending", "processing", "completed", "failed", "refunded"];

pub const PAYMENT_COMPLETED: &str = "completed";

pub const ALERT_SEVERITIES: [&str; 4] = ["low", "medium", "high", "critical"];

pub const MAINTENANCE_PRIORITIES: [&str; 4] = ["low", "medium", "high", "urgent"];

pub const MAINTENANCE_STATUSES: [&str; 5] =
    ["pending", "assigned", "in_progress", "completed", "cancelled"];

pub const ANNOUNCEMENT_KINDS: [&str; 7] = [
    "general",
    "urgent",
    "maintenance",
    "meeting",
    "notice",
    "financial",
    "security",
];

pub const ANNOUNCEMENT_AUDIENCES: [&str; 3] = ["all", "owners", "tenants"];

pub const ACCESS_DIRECTIONS: [&str; 2] = ["entry", "exit"];

pub const ACCESS_METHODS: [&str; 4] = ["card", "code", "manual", "plate"];

/// Check `value` against an allowed vocabulary, naming the field on failure.
pub fn validate_choice(
    field: &str,
    value: &str,
    allowed: &[&str],
) -> Result<(), CoreError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid {field}: '{value}' (expected one of: {})",
            allowed.join(", ")
        )))
    }
}
