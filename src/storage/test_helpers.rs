//! Shared test helpers for storage and registry tests.

use std::time::Duration;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tempfile::TempDir;

use crate::storage::{init_db_pool_with_path, run_migrations, PoolSettings, SqliteStore};

/// Creates a test database pool with migrations applied.
/// Uses a single-connection in-memory database for fast test execution.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// In-memory store for tests that do not exercise concurrency.
pub async fn create_test_store() -> SqliteStore {
    SqliteStore::new(create_test_pool().await)
}

/// File-backed store with a multi-connection pool, for concurrency tests.
/// The returned `TempDir` must be kept alive for the duration of the test.
pub async fn create_file_store(max_connections: u32) -> (SqliteStore, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let settings = PoolSettings {
        max_connections,
        acquire_timeout: Duration::from_secs(10),
    };
    let pool = init_db_pool_with_path(&dir.path().join("verdict.db"), settings)
        .await
        .expect("Failed to create file-backed pool");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    (SqliteStore::new(pool), dir)
}
