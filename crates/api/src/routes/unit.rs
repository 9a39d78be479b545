//! Route definitions for the `/units` and `/residencies` resources.
//!
//! Residencies are created under their unit
//! (`/units/{unit_id}/residencies`) and mutated by their own id.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::unit;
use crate::state::AppState;

/// Routes mounted at `/units`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create (admin)
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update (admin)
/// DELETE /{id}                    -> deactivate (admin)
/// GET    /{unit_id}/residencies   -> list_residencies
/// POST   /{unit_id}/residencies   -> create_residency (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(unit::list).post(unit::create))
        .route(
            "/{id}",
            get(unit::get_by_id).put(unit::update).delete(unit::deactivate),
        )
        .route(
            "/{unit_id}/residencies",
            get(unit::list_residencies).post(unit::create_residency),
        )
}

/// Routes mounted at `/residencies`.
///
/// ```text
/// PUT  /{id}       -> update_residency (admin)
/// POST /{id}/end   -> end_residency (admin)
/// ```
pub fn residency_router() -> Router<AppState> {
    Router::new()
        .route("/{id}", put(unit::update_residency))
        .route("/{id}/end", post(unit::end_residency))
}
