//! Route definitions for the `/profile` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Routes mounted at `/profile`.
///
/// ```text
/// GET    /                -> get_profile
/// PUT    /                -> update_profile
/// GET    /vehicles        -> list_vehicles
/// POST   /vehicles        -> create_vehicle
/// DELETE /vehicles/{id}   -> delete_vehicle
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(profile::get_profile).put(profile::update_profile))
        .route(
            "/vehicles",
            get(profile::list_vehicles).post(profile::create_vehicle),
        )
        .route("/vehicles/{id}", delete(profile::delete_vehicle))
}
