//! Celestial body repository — CRUD, view assembly, cascading delete.

use cosmos_core::entities::CelestialBody;
use cosmos_core::inputs::NewCelestialBody;
use cosmos_core::views::{BodyMission, CelestialBodyView};

use crate::error::DatabaseError;
use crate::helpers::{
    CELESTIAL_BODY_COLS, MISSION_COLS, RESEARCHER_COLS, celestial_body_at, mission_at, qualified,
    researcher_at,
};
use crate::repos::Parent;
use crate::service::CosmosService;
use crate::updates::celestial_body::CelestialBodyUpdate;

impl CosmosService {
    pub async fn create_celestial_body(
        &self,
        input: NewCelestialBody,
    ) -> Result<CelestialBody, DatabaseError> {
        self.db()
            .conn()
            .execute(
                "INSERT INTO celestial_bodies (name, distance_from_earth, nearest_star)
                 VALUES (?1, ?2, ?3)",
                libsql::params![
                    input.name.as_deref(),
                    input.distance_from_earth,
                    input.nearest_star.as_deref()
                ],
            )
            .await?;
        let id = self.db().conn().last_insert_rowid();
        tracing::debug!(id, "created celestial body");

        Ok(CelestialBody {
            id,
            name: input.name,
            distance_from_earth: input.distance_from_earth,
            nearest_star: input.nearest_star,
        })
    }

    pub async fn get_celestial_body(&self, id: i64) -> Result<CelestialBody, DatabaseError> {
        let sql = format!("SELECT {CELESTIAL_BODY_COLS} FROM celestial_bodies WHERE id = ?1");
        let mut rows = self.db().conn().query(&sql, [id]).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        celestial_body_at(&row, 0)
    }

    /// Load a celestial body with its missions, each carrying its researcher.
    pub async fn celestial_body_view(&self, id: i64) -> Result<CelestialBodyView, DatabaseError> {
        let body = self.get_celestial_body(id).await?;

        let sql = format!(
            "SELECT {}, {} FROM missions m
             JOIN researchers r ON r.id = m.researcher_id
             WHERE m.celestial_body_id = ?1
             ORDER BY m.id",
            qualified("m", MISSION_COLS),
            qualified("r", RESEARCHER_COLS),
        );
        let mut rows = self.db().conn().query(&sql, [id]).await?;
        let mut missions = Vec::new();
        while let Some(row) = rows.next().await? {
            missions.push(BodyMission::new(mission_at(&row, 0)?, researcher_at(&row, 4)?));
        }

        Ok(CelestialBodyView::new(body, missions))
    }

    pub async fn update_celestial_body(
        &self,
        id: i64,
        update: CelestialBodyUpdate,
    ) -> Result<CelestialBody, DatabaseError> {
        let mut sets = Vec::new();
        if let Some(name) = update.name {
            sets.push(("name", libsql::Value::from(name)));
        }
        if let Some(distance) = update.distance_from_earth {
            sets.push(("distance_from_earth", libsql::Value::from(distance)));
        }
        if let Some(star) = update.nearest_star {
            sets.push(("nearest_star", libsql::Value::from(star)));
        }

        self.update_columns("celestial_bodies", id, sets).await?;
        self.get_celestial_body(id).await
    }

    /// Delete a celestial body and its missions. Returns the missions removed.
    pub async fn delete_celestial_body(&self, id: i64) -> Result<u64, DatabaseError> {
        self.delete_with_missions(Parent::CelestialBody, id).await
    }

    pub async fn list_celestial_bodies(
        &self,
        limit: u32,
    ) -> Result<Vec<CelestialBody>, DatabaseError> {
        let limit = self.effective_limit(limit);
        let sql =
            format!("SELECT {CELESTIAL_BODY_COLS} FROM celestial_bodies ORDER BY id LIMIT {limit}");
        let mut rows = self.db().conn().query(&sql, ()).await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(celestial_body_at(&row, 0)?);
        }
        Ok(results)
    }
}
