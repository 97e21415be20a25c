//! Reference-set store interface and its SQLite implementation.

use std::future::Future;

use sqlx::SqlitePool;

use crate::domain::CanonicalDomain;
use crate::error_handling::StoreError;
use crate::registry::ReferenceSet;

/// Key-existence store holding the two reference sets.
///
/// Implementations acquire and release their own connections per call.
pub trait ReferenceStore: Send + Sync {
    /// Exact membership test.
    fn exists(
        &self,
        set: ReferenceSet,
        domain: &CanonicalDomain,
    ) -> impl Future<Output = Result<bool, StoreError>> + Send;

    /// Atomically inserts `domain` unless present. Returns `true` only if this
    /// call added it.
    fn insert_if_absent(
        &self,
        set: ReferenceSet,
        domain: &CanonicalDomain,
    ) -> impl Future<Output = Result<bool, StoreError>> + Send;

    /// Number of domains in `set`.
    fn count(&self, set: ReferenceSet) -> impl Future<Output = Result<i64, StoreError>> + Send;

    /// Up to `limit` domains from `set`, oldest first.
    fn sample(
        &self,
        set: ReferenceSet,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<String>, StoreError>> + Send;
}

/// Table and unique column backing each set.
fn table_and_column(set: ReferenceSet) -> (&'static str, &'static str) {
    match set {
        ReferenceSet::Legitimate => ("legitimate_sites", "official_url"),
        ReferenceSet::Suspicious => ("suspicious_sites", "suspicious_url"),
    }
}

/// [`ReferenceStore`] backed by a pooled SQLite database.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteStore { pool }
    }

    /// Closes the pool; later calls fail with a store error.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl ReferenceStore for SqliteStore {
    async fn exists(&self, set: ReferenceSet, domain: &CanonicalDomain) -> Result<bool, StoreError> {
        let (table, column) = table_and_column(set);
        let sql = format!("SELECT 1 FROM {table} WHERE {column} = ? LIMIT 1");
        let row = sqlx::query(&sql)
            .bind(domain.as_str())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    async fn insert_if_absent(
        &self,
        set: ReferenceSet,
        domain: &CanonicalDomain,
    ) -> Result<bool, StoreError> {
        let (table, column) = table_and_column(set);
        // Single statement guarded by the UNIQUE constraint: no check-then-insert race.
        let sql = format!("INSERT INTO {table} ({column}) VALUES (?) ON CONFLICT({column}) DO NOTHING");
        let result = sqlx::query(&sql)
            .bind(domain.as_str())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self, set: ReferenceSet) -> Result<i64, StoreError> {
        let (table, _) = table_and_column(set);
        let sql = format!("SELECT COUNT(*) FROM {table}");
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        Ok(count)
    }

    async fn sample(&self, set: ReferenceSet, limit: u32) -> Result<Vec<String>, StoreError> {
        let (table, column) = table_and_column(set);
        let sql = format!("SELECT {column} FROM {table} ORDER BY id LIMIT ?");
        let rows: Vec<String> = sqlx::query_scalar(&sql)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
