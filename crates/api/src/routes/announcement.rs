//! Route definitions for the `/announcements` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::announcement;
use crate::state::AppState;

/// Routes mounted at `/announcements`.
///
/// ```text
/// GET    /               -> list (published feed; admin drafts via query)
/// POST   /               -> create (admin)
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update (admin)
/// DELETE /{id}           -> delete (admin)
/// POST   /{id}/publish   -> publish (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(announcement::list).post(announcement::create))
        .route(
            "/{id}",
            get(announcement::get_by_id)
                .put(announcement::update)
                .delete(announcement::delete),
        )
        .route("/{id}/publish", post(announcement::publish))
}
