//! Route definitions for the `/maintenance` surface.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::maintenance;
use crate::state::AppState;

/// Routes mounted at `/maintenance`.
///
/// ```text
/// GET  /categories        -> list_categories
/// POST /categories        -> create_category (admin)
/// PUT  /categories/{id}   -> update_category (admin)
/// GET  /requests          -> list_requests
/// POST /requests          -> create_request
/// GET  /requests/{id}     -> get_request (requester or staff)
/// PUT  /requests/{id}     -> update_request (staff update / requester rating)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(maintenance::list_categories).post(maintenance::create_category),
        )
        .route("/categories/{id}", put(maintenance::update_category))
        .route(
            "/requests",
            get(maintenance::list_requests).post(maintenance::create_request),
        )
        .route(
            "/requests/{id}",
            get(maintenance::get_request).put(maintenance::update_request),
        )
}
