//! [`RoleStore`] backed by the Postgres `roles` table.

use connect_core::roles::RoleKind;
use connect_core::seeding::{RoleStore, StorageError};

use crate::models::role::CreateRole;
use crate::repositories::RoleRepo;
use crate::DbPool;

/// PostgreSQL unique constraint violation.
const UNIQUE_VIOLATION: &str = "23505";

/// Seeding store over a connection pool.
#[derive(Clone)]
pub struct PgRoleStore {
    pool: DbPool,
}

impl PgRoleStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl RoleStore for PgRoleStore {
    async fn count(&self) -> Result<i64, StorageError> {
        RoleRepo::count(&self.pool)
            .await
            .map_err(|e| classify(e, None))
    }

    async fn insert(&self, kind: RoleKind) -> Result<(), StorageError> {
        let role = RoleRepo::create(&self.pool, &CreateRole::from(kind))
            .await
            .map_err(|e| classify(e, Some(kind)))?;
        tracing::debug!(id = role.id, name = %role.name, "Inserted role row");
        Ok(())
    }
}

/// Map a sqlx error onto the seeding error taxonomy.
fn classify(err: sqlx::Error, kind: Option<RoleKind>) -> StorageError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return StorageError::DuplicateKey {
                name: kind.map(|k| k.as_str().to_string()).unwrap_or_default(),
            };
        }
    }
    StorageError::Unavailable(err.to_string())
}
