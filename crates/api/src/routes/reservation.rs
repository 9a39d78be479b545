//! Route definitions for the `/reservations` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::reservation;
use crate::state::AppState;

/// Routes mounted at `/reservations`.
///
/// ```text
/// GET  /              -> list
/// POST /              -> create (409 on slot conflict)
/// GET  /{id}          -> get_by_id (owner or admin)
/// POST /{id}/cancel   -> cancel (owner or admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reservation::list).post(reservation::create))
        .route("/{id}", get(reservation::get_by_id))
        .route("/{id}/cancel", post(reservation::cancel))
}
