//! Route definitions for the `/access-logs` resource (staff only).

use axum::routing::get;
use axum::Router;

use crate::handlers::access_log;
use crate::state::AppState;

/// Routes mounted at `/access-logs`.
///
/// ```text
/// GET  /   -> list
/// POST /   -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(access_log::list).post(access_log::create))
}
