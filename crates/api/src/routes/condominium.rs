//! Route definitions for the `/condominiums` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::condominium;
use crate::state::AppState;

/// Routes mounted at `/condominiums`.
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
        .route("/", get(condominium::list).post(condominium::create))
        .route(
            "/{id}",
            get(condominium::get_by_id)
                .put(condominium::update)
                .delete(condominium::deactivate),
        )
}
