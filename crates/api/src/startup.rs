//! Process startup: connect to storage, migrate and seed roles.
//!
//! Everything here runs before the HTTP listener is bound. Any failure is
//! returned to `main`, which aborts the process instead of serving traffic
//! against an unseeded role table.

use connect_core::roles::RoleKind;
use connect_core::seeding::{ensure_seeded, SeedOutcome, StorageError};
use connect_db::store::PgRoleStore;
use connect_db::DbPool;

use crate::config::{ConfigError, ServerConfig};

/// A failure that prevents the service from starting.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Database health check failed: {0}")]
    HealthCheck(#[source] sqlx::Error),

    #[error("Failed to run database migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Role seeding failed: {0}")]
    Seed(#[from] StorageError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Connect, verify, migrate and seed. Returns the live pool.
pub async fn prepare_database(config: &ServerConfig) -> Result<DbPool, StartupError> {
    let pool = connect_db::create_pool(&config.database_url, config.db_max_connections)
        .await
        .map_err(StartupError::Connect)?;
    tracing::info!("Database connection pool created");

    connect_db::health_check(&pool)
        .await
        .map_err(StartupError::HealthCheck)?;
    tracing::info!("Database health check passed");

    connect_db::run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    seed_roles(&pool).await?;

    Ok(pool)
}

/// Seed the full role enumeration into an empty `roles` table.
pub async fn seed_roles(pool: &DbPool) -> Result<SeedOutcome, StartupError> {
    let store = PgRoleStore::new(pool.clone());
    let outcome = ensure_seeded(&store, &RoleKind::ALL).await?;
    match outcome {
        SeedOutcome::Seeded { inserted } => tracing::info!(inserted, "Roles seeded"),
        SeedOutcome::AlreadySeeded { existing } => {
            tracing::info!(existing, "Roles already present")
        }
    }
    Ok(outcome)
}
