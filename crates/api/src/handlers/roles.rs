//! Handlers for the read-only `/roles` resource.

use axum::extract::{Path, State};
use axum::Json;
use connect_core::error::CoreError;
use connect_core::roles::RoleKind;
use connect_db::models::role::Role;
use connect_db::repositories::RoleRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/roles
///
/// List every persisted role in insertion order.
pub async fn list_roles(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Role>>>> {
    let roles = RoleRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: roles }))
}

/// GET /api/v1/roles/{name}
///
/// Look up a role by its stored name. Names outside the role enumeration are
/// rejected before touching the database.
pub async fn get_role(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<DataResponse<Role>>> {
    let kind: RoleKind = name.parse()?;

    let role = RoleRepo::find_by_name(&state.pool, kind.as_str())
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByName {
                entity: "Role",
                name: kind.to_string(),
            })
        })?;

    Ok(Json(DataResponse { data: role }))
}
