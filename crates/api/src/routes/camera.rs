//! Route definitions for the `/cameras` resource (staff only).

use axum::routing::get;
use axum::Router;

use crate::handlers::camera;
use crate::state::AppState;

/// Routes mounted at `/cameras`.
///
/// ```text
/// GET    /       -> list (staff)
/// POST   /       -> create (admin)
/// GET    /{id}   -> get_by_id (staff)
/// PUT    /{id}   -> update (admin)
/// DELETE /{id}   -> deactivate (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(camera::list).post(camera::create))
        .route(
            "/{id}",
            get(camera::get_by_id)
                .put(camera::update)
                .delete(camera::deactivate),
        )
}
