//! Route definitions for the `/payments` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::payment;
use crate::state::AppState;

/// Routes mounted at `/payments`. Payments are recorded through
/// `/fees/{id}/payments`; this surface only carries verification.
///
/// ```text
/// POST /{id}/verify   -> verify (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/verify", post(payment::verify))
}
