//! Route definitions for the `/finances` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::finance;
use crate::state::AppState;

/// Routes mounted at `/finances`.
///
/// ```text
/// GET /   -> summary (resident finance aggregate)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(finance::summary))
}
