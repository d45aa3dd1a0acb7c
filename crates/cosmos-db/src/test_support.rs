//! Shared test utilities for cosmos-db unit tests.

use cosmos_core::entities::{CelestialBody, Mission, Researcher};
use cosmos_core::inputs::{NewCelestialBody, NewMission, NewResearcher};

use crate::CosmosDb;
use crate::service::CosmosService;

/// Create an in-memory CosmosService with foreign keys on.
pub async fn test_service() -> CosmosService {
    let db = CosmosDb::open_local(":memory:").await.unwrap();
    CosmosService::from_db(db)
}

/// Insert Mars and Ada, the parents most tests need.
pub async fn seed_parents(svc: &CosmosService) -> (CelestialBody, Researcher) {
    let mars = svc
        .create_celestial_body(NewCelestialBody {
            name: Some("Mars".into()),
            distance_from_earth: Some(225),
            nearest_star: Some("Sun".into()),
        })
        .await
        .unwrap();
    let ada = svc
        .create_researcher(NewResearcher::new("Ada", "Astrophysics"))
        .await
        .unwrap();
    (mars, ada)
}

/// Insert a mission between two existing parents.
pub async fn seed_mission(
    svc: &CosmosService,
    name: &str,
    body_id: i64,
    researcher_id: i64,
) -> Mission {
    svc.create_mission(NewMission::new(name, body_id, researcher_id))
        .await
        .unwrap()
}

/// Count rows in a table.
pub async fn count_rows(svc: &CosmosService, table: &str) -> i64 {
    let mut rows = svc
        .db()
        .conn()
        .query(&format!("SELECT COUNT(*) FROM {table}"), ())
        .await
        .unwrap();
    rows.next().await.unwrap().unwrap().get::<i64>(0).unwrap()
}
