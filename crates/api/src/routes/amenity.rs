//! Route definitions for the `/amenities` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::amenity;
use crate::state::AppState;

/// Routes mounted at `/amenities`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create (admin)
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update (admin)
/// DELETE /{id}   -> deactivate (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(amenity::list).post(amenity::create))
        .route(
            "/{id}",
            get(amenity::get_by_id)
                .put(amenity::update)
                .delete(amenity::deactivate),
        )
}
