//! Schema migrations, embedded at compile time.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use courtyard_core::error::{AppError, ErrorKind};

/// The migration set compiled in from `migrations/` at the workspace
/// root. Adding a file there is picked up on the next build.
static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Brings the schema up to date. Already-applied migrations are
/// skipped; a checksum mismatch against an applied migration aborts.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Migration run failed", e))?;

    info!(known_migrations = MIGRATOR.iter().count(), "Schema is up to date");
    Ok(())
}
