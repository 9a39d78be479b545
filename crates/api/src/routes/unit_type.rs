//! Route definitions for the `/unit-types` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::unit_type;
use crate::state::AppState;

/// Routes mounted at `/unit-types`. Unit types have no deactivation;
/// units keep referencing them.
///
/// ```text
/// GET  /       -> list
/// POST /       -> create (admin)
/// PUT  /{id}   -> update (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(unit_type::list).post(unit_type::create))
        .route("/{id}", put(unit_type::update))
}
