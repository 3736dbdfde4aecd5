//! Startup seeding of the `roles` table.
//!
//! The table is seeded only when it is completely empty. A table holding any
//! row at all, even one that is not a known role kind, counts as seeded, so
//! kinds added to [`RoleKind::ALL`] after the first successful seed are never
//! back-filled by this routine.

use std::future::Future;

use crate::roles::RoleKind;

// ---------------------------------------------------------------------------
// Storage seam
// ---------------------------------------------------------------------------

/// Failure reported by a [`RoleStore`].
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The store could not be reached or the query failed.
    #[error("Role storage unavailable: {0}")]
    Unavailable(String),

    /// An insert collided with the unique constraint on role name.
    #[error("Role '{name}' already exists")]
    DuplicateKey { name: String },
}

/// Minimal storage access needed to seed roles.
pub trait RoleStore: Send + Sync {
    /// Number of rows currently in the role table.
    fn count(&self) -> impl Future<Output = Result<i64, StorageError>> + Send;

    /// Insert one role row for `kind`. The store assigns the identifier.
    fn insert(&self, kind: RoleKind) -> impl Future<Output = Result<(), StorageError>> + Send;
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

/// What [`ensure_seeded`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The table was empty and `inserted` rows were written.
    Seeded { inserted: usize },
    /// The table already held `existing` rows; nothing was written.
    AlreadySeeded { existing: i64 },
}

/// Seed `kinds` into an empty role table, in slice order.
///
/// Writes nothing when the table already has rows. The first failing call
/// aborts the operation; rows inserted before it are left in place.
pub async fn ensure_seeded<S: RoleStore>(
    store: &S,
    kinds: &[RoleKind],
) -> Result<SeedOutcome, StorageError> {
    let existing = store.count().await?;
    if existing != 0 {
        tracing::info!(existing, "Role table already populated, skipping seed");
        return Ok(SeedOutcome::AlreadySeeded { existing });
    }

    tracing::info!(count = kinds.len(), "Role table empty, seeding roles");
    for (inserted, &kind) in kinds.iter().enumerate() {
        if let Err(err) = store.insert(kind).await {
            tracing::error!(role = %kind, inserted, error = %err, "Role seeding failed");
            return Err(err);
        }
        tracing::info!(role = %kind, "Seeded role");
    }

    Ok(SeedOutcome::Seeded {
        inserted: kinds.len(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
