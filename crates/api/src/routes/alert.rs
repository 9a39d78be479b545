//! Route definitions for the `/alerts` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::alert;
use crate::state::AppState;

/// Routes mounted at `/alerts`.
///
/// ```text
/// GET  /              -> list
/// POST /              -> create (staff)
/// GET  /{id}          -> get_by_id
/// POST /{id}/review   -> review (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(alert::list).post(alert::create))
        .route("/{id}", get(alert::get_by_id))
        .route("/{id}/review", post(alert::review))
}
