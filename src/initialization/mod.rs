//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources at process start:
//! - Logger
//! - Reference-set store (database pool plus migrations)

mod logger;

use log::info;

use crate::config::Config;
use crate::error_handling::DatabaseError;
use crate::storage::{init_db_pool_with_path, run_migrations, SqliteStore};

// Re-export public API
pub use logger::init_logger_with;

/// Opens the configured database, applies migrations and wraps it in a store.
///
/// # Errors
///
/// Returns a `DatabaseError` if the file cannot be created, the pool cannot
/// connect, or migrations fail.
pub async fn init_store(config: &Config) -> Result<SqliteStore, DatabaseError> {
    let pool = init_db_pool_with_path(&config.db_path, config.pool_settings()).await?;
    run_migrations(&pool).await?;
    info!(
        "Reference store ready at {} (max {} connections)",
        config.db_path.display(),
        config.max_connections
    );
    Ok(SqliteStore::new(pool))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::canonicalize;
    use crate::registry::ReferenceSet;
    use crate::storage::ReferenceStore;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_store_is_usable_and_persistent() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            db_path: dir.path().join("verdict.db"),
            ..Default::default()
        };

        let store = init_store(&config).await.unwrap();
        assert!(store
            .insert_if_absent(ReferenceSet::Legitimate, &canonicalize("example.com"))
            .await
            .unwrap());
        store.close().await;

        let reopened = init_store(&config).await.unwrap();
        assert!(reopened
            .exists(ReferenceSet::Legitimate, &canonicalize("example.com"))
            .await
            .unwrap());
    }
}
