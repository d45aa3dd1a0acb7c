//! Service layer: the unit-of-work object every repo method hangs off.
//!
//! `CosmosService` wraps a `CosmosDb` plus the settings repo methods need. All
//! repo methods are implemented as `impl CosmosService` blocks in
//! [`crate::repos`].

use cosmos_config::{CosmosConfig, GeneralConfig};

use crate::CosmosDb;
use crate::error::DatabaseError;

/// Orchestrates validated writes and view reads over one database handle.
///
/// Every mutation method follows this protocol:
/// 1. Validate the caller's field map (nothing is written on failure)
/// 2. Execute SQL, inside a transaction when more than one table changes
/// 3. Re-read and return the persisted state
pub struct CosmosService {
    db: CosmosDb,
    default_limit: u32,
}

impl CosmosService {
    /// Create a new service wrapping a local database with default settings.
    ///
    /// # Arguments
    ///
    /// * `db_path` — Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = CosmosDb::open_local(db_path).await?;
        Ok(Self::from_db(db))
    }

    /// Create a service from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn from_config(config: &CosmosConfig) -> Result<Self, DatabaseError> {
        let db = CosmosDb::open_with(&config.database).await?;
        Ok(Self {
            db,
            default_limit: config.general.default_limit,
        })
    }

    /// Create from an existing `CosmosDb` (for testing).
    #[must_use]
    pub fn from_db(db: CosmosDb) -> Self {
        Self {
            db,
            default_limit: GeneralConfig::default().default_limit,
        }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &CosmosDb {
        &self.db
    }

    /// Resolve a caller-supplied list limit; `0` means "use the default".
    #[must_use]
    pub const fn effective_limit(&self, limit: u32) -> u32 {
        if limit == 0 { self.default_limit } else { limit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmos_config::DatabaseConfig;

    #[tokio::test]
    async fn zero_limit_falls_back_to_config() {
        let config = CosmosConfig {
            database: DatabaseConfig::in_memory(),
            general: GeneralConfig { default_limit: 3 },
        };
        let svc = CosmosService::from_config(&config).await.unwrap();
        assert_eq!(svc.effective_limit(0), 3);
        assert_eq!(svc.effective_limit(10), 10);
    }
}
