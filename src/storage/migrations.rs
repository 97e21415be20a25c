// storage/migrations.rs
// Database migration management

use sqlx::migrate::Migrator;
use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;

/// Migrations from `migrations/`, embedded in the binary at compile time.
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Applies any pending migrations.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), DatabaseError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}
