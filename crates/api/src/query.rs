//! Query-parameter types and paging bounds shared across handlers.

use serde::Deserialize;

/// Page size when the client does not pass `limit`.
pub const DEFAULT_LIMIT: i64 = 50;

/// Hard cap on `limit`; larger values are clamped, not rejected.
pub const MAX_LIMIT: i64 = 100;

/// `?include_inactive=` flag for catalogs with soft deactivation.
#[derive(Debug, Deserialize)]
pub struct IncludeInactiveParams {
    #[serde(default)]
    pub include_inactive: bool,
}
