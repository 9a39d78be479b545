//! Route definitions for the `/fees` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::fee;
use crate::state::AppState;

/// Routes mounted at `/fees`. Fees are created by schedule generation,
/// so there is no POST on the collection.
///
/// ```text
/// GET  /                 -> list
/// GET  /{id}             -> get_by_id
/// GET  /{id}/payments    -> list_payments
/// POST /{id}/payments    -> record_payment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(fee::list))
        .route("/{id}", get(fee::get_by_id))
        .route(
            "/{id}/payments",
            get(fee::list_payments).post(fee::record_payment),
        )
}
