//! # cosmos-db
//!
//! libSQL persistence for Cosmos: celestial bodies, researchers, and the
//! missions linking them.
//!
//! Writes are validated before any SQL runs. Deleting a celestial body or a
//! researcher removes its missions in the same transaction. Reads intended for
//! external output come back as the acyclic views from `cosmos_core::views`.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod updates;

#[cfg(test)]
mod test_support;

use cosmos_config::DatabaseConfig;
use error::DatabaseError;
use libsql::Builder;

/// Database handle for one unit of work.
///
/// Wraps a libSQL database and its single connection. Callers create one and
/// pass it (usually inside a [`service::CosmosService`]) to each operation;
/// there is no process-wide handle.
pub struct CosmosDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl CosmosDb {
    /// Open a local database at the given path with foreign keys enforced.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        Self::open(path, true).await
    }

    /// Open the database described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_with(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        Self::open(&config.path, config.foreign_keys).await
    }

    async fn open(path: &str, foreign_keys: bool) -> Result<Self, DatabaseError> {
        tracing::debug!(path, foreign_keys, "opening database");
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Must be per-connection in SQLite
        if foreign_keys {
            conn.execute("PRAGMA foreign_keys = ON", ())
                .await
                .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;
        }

        let cosmos_db = Self { db, conn };
        cosmos_db.run_migrations().await?;
        Ok(cosmos_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> CosmosDb {
        CosmosDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        for table in ["celestial_bodies", "researchers", "missions"] {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn foreign_keys_enabled_by_default() {
        let db = test_db().await;
        let mut rows = db.conn().query("PRAGMA foreign_keys", ()).await.unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
    }

    #[tokio::test]
    async fn foreign_keys_can_be_disabled() {
        let config = DatabaseConfig {
            foreign_keys: false,
            ..DatabaseConfig::in_memory()
        };
        let db = CosmosDb::open_with(&config).await.unwrap();
        let mut rows = db.conn().query("PRAGMA foreign_keys", ()).await.unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 0);
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        // Run migrations again — should not fail
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn mission_columns_reject_null() {
        let db = test_db().await;
        db.conn()
            .execute("INSERT INTO celestial_bodies (name) VALUES ('Mars')", ())
            .await
            .unwrap();
        db.conn()
            .execute(
                "INSERT INTO researchers (name, field_of_study) VALUES ('Ada', 'Astrophysics')",
                (),
            )
            .await
            .unwrap();

        let result = db
            .conn()
            .execute(
                "INSERT INTO missions (name, celestial_body_id, researcher_id)
                 VALUES ('M1', NULL, 1)",
                (),
            )
            .await;
        assert!(result.is_err(), "NULL celestial_body_id should be rejected");
    }

    #[tokio::test]
    async fn schema_cascade_removes_missions() {
        let db = test_db().await;
        db.conn()
            .execute_batch(
                "INSERT INTO celestial_bodies (id, name) VALUES (1, 'Mars');
                 INSERT INTO researchers (id, name, field_of_study)
                     VALUES (1, 'Ada', 'Astrophysics');
                 INSERT INTO missions (name, celestial_body_id, researcher_id)
                     VALUES ('M1', 1, 1);",
            )
            .await
            .unwrap();

        db.conn()
            .execute("DELETE FROM celestial_bodies WHERE id = 1", ())
            .await
            .unwrap();

        let mut rows = db
            .conn()
            .query("SELECT COUNT(*) FROM missions", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 0);
    }
}
