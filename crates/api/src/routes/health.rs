use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of the health probe.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` when fully healthy, `"degraded"` when the database is down.
    pub status: &'static str,
    /// Running crate version.
    pub version: &'static str,
    pub db_healthy: bool,
}

/// GET /health -- liveness plus a database round trip.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = strata_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mounted at the root, not under `/api/v1`, so probes skip auth.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
