//! Route definitions for the `/fee-schedules` resource (admin only).

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::fee_schedule;
use crate::state::AppState;

/// Routes mounted at `/fee-schedules`.
///
/// ```text
/// GET  /                          -> list
/// POST /                          -> create
/// GET  /{id}                      -> get_by_id
/// PUT  /{id}                      -> update
/// POST /{id}/generate             -> generate (per-unit fees)
/// POST /{id}/apply-late-charges   -> apply_late_charges
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(fee_schedule::list).post(fee_schedule::create))
        .route(
            "/{id}",
            get(fee_schedule::get_by_id).put(fee_schedule::update),
        )
        .route("/{id}/generate", post(fee_schedule::generate))
        .route(
            "/{id}/apply-late-charges",
            post(fee_schedule::apply_late_charges),
        )
}
