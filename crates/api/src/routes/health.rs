//! Liveness and readiness for the user service.
//!
//! The service is only useful once the `roles` table is seeded, so health
//! reports that alongside database reachability.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use connect_db::repositories::RoleRepo;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Degraded,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: &'static str,
    pub db_healthy: bool,
    /// True when the `roles` table holds at least one row.
    pub roles_seeded: bool,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    // One query answers both questions: a failed count means the database
    // is unreachable.
    let (db_healthy, roles_seeded) = match RoleRepo::count(&state.pool).await {
        Ok(count) => (true, count > 0),
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not count roles");
            (false, false)
        }
    };

    let status = if db_healthy && roles_seeded {
        HealthStatus::Ok
    } else {
        HealthStatus::Degraded
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        roles_seeded,
    })
}

/// Root-level health route (not under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
