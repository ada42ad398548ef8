//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{StoreError, UrlRepository};

/// How long a writer waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS url(
        id INTEGER PRIMARY KEY,
        alias TEXT NOT NULL UNIQUE,
        url TEXT NOT NULL
    )
"#;

const CREATE_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_alias ON url(alias)";

/// SQLite repository for URL mappings.
///
/// The schema is created on construction, so an instance never serves a
/// request against a missing table.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Wraps an existing pool and ensures the schema exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the schema statements fail.
    pub async fn new(pool: Arc<SqlitePool>) -> Result<Self, StoreError> {
        let repository = Self { pool };
        repository.ensure_schema().await?;
        Ok(repository)
    }

    /// Opens (creating if needed) the database file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the directory, database or schema
    /// cannot be created.
    pub async fn connect(path: impl AsRef<Path>, max_connections: u32) -> Result<Self, StoreError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(StoreError::backend)?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(map_sqlx_error)?;

        Self::new(Arc::new(pool)).await
    }

    /// Returns the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        self.pool.as_ref()
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        sqlx::query(CREATE_INDEX)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn save(&self, url: &str, alias: &str) -> Result<i64, StoreError> {
        let result = sqlx::query("INSERT INTO url(url, alias) VALUES (?, ?)")
            .bind(url)
            .bind(alias)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.last_insert_rowid())
    }

    async fn lookup(&self, alias: &str) -> Result<UrlMapping, StoreError> {
        let row = sqlx::query_as::<_, (i64, String, String)>(
            "SELECT id, alias, url FROM url WHERE alias = ?",
        )
        .bind(alias)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        let (id, alias, url) = row.ok_or(StoreError::NotFound)?;

        Ok(UrlMapping::new(id, alias, url))
    }

    async fn delete(&self, alias: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM url WHERE alias = ?")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        debug!(alias, rows = result.rows_affected(), "delete executed");

        Ok(())
    }
}

/// Returns true if `e` is a unique constraint violation.
fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

/// Maps a sqlx error onto the repository taxonomy.
fn map_sqlx_error(e: sqlx::Error) -> StoreError {
    if is_unique_violation(&e) {
        return StoreError::Conflict;
    }

    StoreError::backend(e)
}
