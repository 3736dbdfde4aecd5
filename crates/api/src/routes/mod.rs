pub mod health;
pub mod roles;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /roles                 list roles
/// /roles/{name}          get role by name
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/roles", roles::router())
}
