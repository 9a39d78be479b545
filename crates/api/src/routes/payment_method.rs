//! Route definitions for the `/payment-methods` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::payment_method;
use crate::state::AppState;

/// Routes mounted at `/payment-methods`.
///
/// ```text
/// GET  /       -> list
/// POST /       -> create (admin)
/// GET  /{id}   -> get_by_id
/// PUT  /{id}   -> update (admin; deactivation via is_active)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(payment_method::list).post(payment_method::create))
        .route(
            "/{id}",
            get(payment_method::get_by_id).put(payment_method::update),
        )
}
