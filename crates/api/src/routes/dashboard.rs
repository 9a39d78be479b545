//! Route definitions for the `/dashboard` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// GET /                -> dashboard (resident home-screen aggregate)
/// GET /quick-actions   -> quick_actions (static catalog)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::dashboard))
        .route("/quick-actions", get(dashboard::quick_actions))
}
