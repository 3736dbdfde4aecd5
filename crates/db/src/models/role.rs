//! Role entity model.

use connect_core::roles::RoleKind;
use connect_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A role row from the `roles` table.
///
/// `name` stays a plain string: rows written outside the seeder may hold
/// names that are not a [`RoleKind`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Role {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a role.
#[derive(Debug)]
pub struct CreateRole {
    pub name: String,
    pub description: Option<String>,
}

impl From<RoleKind> for CreateRole {
    fn from(kind: RoleKind) -> Self {
        Self {
            name: kind.as_str().to_string(),
            description: Some(kind.description().to_string()),
        }
    }
}
