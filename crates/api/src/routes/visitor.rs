//! Route definitions for the `/visitors` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::visitor;
use crate::state::AppState;

/// Routes mounted at `/visitors`.
///
/// ```text
/// GET  /                -> list
/// POST /                -> register
/// GET  /{id}            -> get_by_id (authorizer or staff)
/// POST /{id}/checkout   -> checkout (authorizer or staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(visitor::list).post(visitor::register))
        .route("/{id}", get(visitor::get_by_id))
        .route("/{id}/checkout", post(visitor::checkout))
}
