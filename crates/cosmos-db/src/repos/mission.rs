//! Mission repository — validated CRUD and the two-parent view.
//!
//! Foreign keys are checked for presence only. A mission naming a parent that
//! does not exist is rejected by the schema's foreign-key constraint and the
//! libSQL error is returned as is.

use cosmos_core::entities::Mission;
use cosmos_core::inputs::NewMission;
use cosmos_core::views::MissionView;

use crate::error::DatabaseError;
use crate::helpers::{MISSION_COLS, mission_at};
use crate::service::CosmosService;
use crate::updates::mission::MissionUpdate;

impl CosmosService {
    pub async fn create_mission(&self, input: NewMission) -> Result<Mission, DatabaseError> {
        let fields = input.validate()?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO missions (name, celestial_body_id, researcher_id) VALUES (?1, ?2, ?3)",
                libsql::params![
                    fields.name(),
                    fields.celestial_body_id(),
                    fields.researcher_id()
                ],
            )
            .await?;
        let id = self.db().conn().last_insert_rowid();
        tracing::debug!(id, "created mission");

        Ok(Mission {
            id,
            name: fields.name().to_string(),
            celestial_body_id: fields.celestial_body_id(),
            researcher_id: fields.researcher_id(),
        })
    }

    pub async fn get_mission(&self, id: i64) -> Result<Mission, DatabaseError> {
        let sql = format!("SELECT {MISSION_COLS} FROM missions WHERE id = ?1");
        let mut rows = self.db().conn().query(&sql, [id]).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        mission_at(&row, 0)
    }

    /// Load a mission with both parents resolved.
    ///
    /// Returns `InvalidState` if a parent row is missing, which can only happen
    /// when foreign keys are disabled.
    pub async fn mission_view(&self, id: i64) -> Result<MissionView, DatabaseError> {
        let mission = self.get_mission(id).await?;

        let body = self
            .get_celestial_body(mission.celestial_body_id)
            .await
            .map_err(|e| dangling(e, id, "celestial body", mission.celestial_body_id))?;
        let researcher = self
            .get_researcher(mission.researcher_id)
            .await
            .map_err(|e| dangling(e, id, "researcher", mission.researcher_id))?;

        Ok(MissionView::new(mission, body, researcher))
    }

    /// Validate and apply a partial update. Nothing is written if any field fails.
    pub async fn update_mission(
        &self,
        id: i64,
        update: MissionUpdate,
    ) -> Result<Mission, DatabaseError> {
        update.validate()?;

        let mut sets = Vec::new();
        if let Some(name) = update.name {
            sets.push(("name", libsql::Value::from(name)));
        }
        if let Some(body_id) = update.celestial_body_id {
            sets.push(("celestial_body_id", libsql::Value::from(body_id)));
        }
        if let Some(researcher_id) = update.researcher_id {
            sets.push(("researcher_id", libsql::Value::from(researcher_id)));
        }

        self.update_columns("missions", id, sets).await?;
        self.get_mission(id).await
    }

    /// Delete a single mission. Its parents are untouched.
    pub async fn delete_mission(&self, id: i64) -> Result<(), DatabaseError> {
        let deleted = self
            .db()
            .conn()
            .execute("DELETE FROM missions WHERE id = ?1", [id])
            .await?;
        if deleted == 0 {
            return Err(DatabaseError::NoResult);
        }
        Ok(())
    }

    pub async fn list_missions(&self, limit: u32) -> Result<Vec<Mission>, DatabaseError> {
        let limit = self.effective_limit(limit);
        let sql = format!("SELECT {MISSION_COLS} FROM missions ORDER BY id LIMIT {limit}");
        self.collect_missions(&sql, ()).await
    }

    pub async fn missions_for_celestial_body(
        &self,
        celestial_body_id: i64,
    ) -> Result<Vec<Mission>, DatabaseError> {
        let sql =
            format!("SELECT {MISSION_COLS} FROM missions WHERE celestial_body_id = ?1 ORDER BY id");
        self.collect_missions(&sql, [celestial_body_id]).await
    }

    pub async fn missions_for_researcher(
        &self,
        researcher_id: i64,
    ) -> Result<Vec<Mission>, DatabaseError> {
        let sql =
            format!("SELECT {MISSION_COLS} FROM missions WHERE researcher_id = ?1 ORDER BY id");
        self.collect_missions(&sql, [researcher_id]).await
    }

    async fn collect_missions(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<Vec<Mission>, DatabaseError> {
        let mut rows = self.db().conn().query(sql, params).await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(mission_at(&row, 0)?);
        }
        Ok(results)
    }
}

fn dangling(err: DatabaseError, mission_id: i64, parent: &str, parent_id: i64) -> DatabaseError {
    match err {
        DatabaseError::NoResult => DatabaseError::InvalidState(format!(
            "mission {mission_id} references missing {parent} {parent_id}"
        )),
        other => other,
    }
}
