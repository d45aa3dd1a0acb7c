//! Researcher repository — validated CRUD, view assembly, cascading delete.

use cosmos_core::entities::Researcher;
use cosmos_core::inputs::NewResearcher;
use cosmos_core::views::{ResearcherMission, ResearcherView};

use crate::error::DatabaseError;
use crate::helpers::{
    CELESTIAL_BODY_COLS, MISSION_COLS, RESEARCHER_COLS, celestial_body_at, mission_at, qualified,
    researcher_at,
};
use crate::repos::Parent;
use crate::service::CosmosService;
use crate::updates::researcher::ResearcherUpdate;

impl CosmosService {
    pub async fn create_researcher(
        &self,
        input: NewResearcher,
    ) -> Result<Researcher, DatabaseError> {
        let fields = input.validate()?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO researchers (name, field_of_study) VALUES (?1, ?2)",
                libsql::params![fields.name(), fields.field_of_study()],
            )
            .await?;
        let id = self.db().conn().last_insert_rowid();
        tracing::debug!(id, "created researcher");

        Ok(Researcher {
            id,
            name: fields.name().to_string(),
            field_of_study: fields.field_of_study().to_string(),
        })
    }

    pub async fn get_researcher(&self, id: i64) -> Result<Researcher, DatabaseError> {
        let sql = format!("SELECT {RESEARCHER_COLS} FROM researchers WHERE id = ?1");
        let mut rows = self.db().conn().query(&sql, [id]).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        researcher_at(&row, 0)
    }

    /// Load a researcher with its missions, each carrying its celestial body.
    pub async fn researcher_view(&self, id: i64) -> Result<ResearcherView, DatabaseError> {
        let researcher = self.get_researcher(id).await?;

        let sql = format!(
            "SELECT {}, {} FROM missions m
             JOIN celestial_bodies c ON c.id = m.celestial_body_id
             WHERE m.researcher_id = ?1
             ORDER BY m.id",
            qualified("m", MISSION_COLS),
            qualified("c", CELESTIAL_BODY_COLS),
        );
        let mut rows = self.db().conn().query(&sql, [id]).await?;
        let mut missions = Vec::new();
        while let Some(row) = rows.next().await? {
            missions.push(ResearcherMission::new(
                mission_at(&row, 0)?,
                celestial_body_at(&row, 4)?,
            ));
        }

        Ok(ResearcherView::new(researcher, missions))
    }

    /// Validate and apply a partial update. Nothing is written if any field fails.
    pub async fn update_researcher(
        &self,
        id: i64,
        update: ResearcherUpdate,
    ) -> Result<Researcher, DatabaseError> {
        update.validate()?;

        let mut sets = Vec::new();
        if let Some(name) = update.name {
            sets.push(("name", libsql::Value::from(name)));
        }
        if let Some(field_of_study) = update.field_of_study {
            sets.push(("field_of_study", libsql::Value::from(field_of_study)));
        }

        self.update_columns("researchers", id, sets).await?;
        self.get_researcher(id).await
    }

    /// Delete a researcher and its missions. Returns the missions removed.
    pub async fn delete_researcher(&self, id: i64) -> Result<u64, DatabaseError> {
        self.delete_with_missions(Parent::Researcher, id).await
    }

    pub async fn list_researchers(&self, limit: u32) -> Result<Vec<Researcher>, DatabaseError> {
        let limit = self.effective_limit(limit);
        let sql = format!("SELECT {RESEARCHER_COLS} FROM researchers ORDER BY id LIMIT {limit}");
        let mut rows = self.db().conn().query(&sql, ()).await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(researcher_at(&row, 0)?);
        }
        Ok(results)
    }
}
