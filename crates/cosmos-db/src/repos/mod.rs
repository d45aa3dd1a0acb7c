//! Repository modules implementing CRUD operations for all Cosmos entities.
//!
//! Each module adds methods to `CosmosService` via `impl CosmosService` blocks.
//! The shared pieces here are the dynamic UPDATE runner and the transactional
//! parent delete.

pub mod celestial_body;
pub mod mission;
pub mod researcher;

use crate::error::DatabaseError;
use crate::service::CosmosService;

/// A root entity that owns missions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Parent {
    CelestialBody,
    Researcher,
}

impl Parent {
    const fn as_str(self) -> &'static str {
        match self {
            Self::CelestialBody => "celestial_body",
            Self::Researcher => "researcher",
        }
    }

    const fn table(self) -> &'static str {
        match self {
            Self::CelestialBody => "celestial_bodies",
            Self::Researcher => "researchers",
        }
    }

    /// The `missions` column referencing this parent.
    const fn mission_column(self) -> &'static str {
        match self {
            Self::CelestialBody => "celestial_body_id",
            Self::Researcher => "researcher_id",
        }
    }
}

impl CosmosService {
    /// Apply `sets` to row `id` of `table` in one UPDATE.
    ///
    /// An empty `sets` is a no-op. Returns `NoResult` if no row has `id`.
    pub(crate) async fn update_columns(
        &self,
        table: &str,
        id: i64,
        sets: Vec<(&str, libsql::Value)>,
    ) -> Result<(), DatabaseError> {
        if sets.is_empty() {
            return Ok(());
        }

        let mut clauses = Vec::with_capacity(sets.len());
        let mut params: Vec<libsql::Value> = Vec::with_capacity(sets.len() + 1);
        for (column, value) in sets {
            params.push(value);
            clauses.push(format!("{column} = ?{}", params.len()));
        }
        params.push(libsql::Value::Integer(id));

        let sql = format!(
            "UPDATE {table} SET {} WHERE id = ?{}",
            clauses.join(", "),
            params.len()
        );
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        Ok(())
    }

    /// Delete a parent row and every mission referencing it as one transaction.
    ///
    /// Returns the number of missions removed. On any failure the transaction
    /// is rolled back, nothing is deleted, and the original error is returned.
    pub(crate) async fn delete_with_missions(
        &self,
        parent: Parent,
        id: i64,
    ) -> Result<u64, DatabaseError> {
        let tx = self.db().conn().transaction().await?;

        let outcome = delete_parent_and_missions(&tx, parent, id).await;
        match outcome {
            Ok(removed) => {
                tx.commit().await?;
                tracing::info!(entity = parent.as_str(), id, removed, "deleted with missions");
                Ok(removed)
            }
            Err(e) => {
                tracing::warn!(
                    entity = parent.as_str(),
                    id,
                    error = %e,
                    "cascade delete rolled back"
                );
                // Dropping an unfinished transaction also rolls it back
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!(error = %rollback_err, "explicit rollback failed");
                }
                Err(e)
            }
        }
    }
}

async fn delete_parent_and_missions(
    conn: &libsql::Connection,
    parent: Parent,
    id: i64,
) -> Result<u64, DatabaseError> {
    let removed = conn
        .execute(
            &format!("DELETE FROM missions WHERE {} = ?1", parent.mission_column()),
            [id],
        )
        .await?;
    let deleted = conn
        .execute(&format!("DELETE FROM {} WHERE id = ?1", parent.table()), [id])
        .await?;
    if deleted == 0 {
        return Err(DatabaseError::NoResult);
    }
    Ok(removed)
}
