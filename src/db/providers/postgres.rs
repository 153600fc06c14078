use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{Database, DatabaseConnection};

use super::connect_options;
use super::registry::{DbProvider, DbProviderId};
use crate::config::DatabaseConfig;

pub struct PostgresDbProvider;

#[async_trait]
impl DbProvider for PostgresDbProvider {
    fn id(&self) -> DbProviderId {
        DbProviderId::Postgres
    }

    fn supports_url(&self, url: &str) -> bool {
        let normalized = url.trim().to_ascii_lowercase();
        normalized.starts_with("postgres://") || normalized.starts_with("postgresql://")
    }

    async fn connect(&self, cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
        let db = Database::connect(connect_options(cfg)).await?;
        Ok(db)
    }
}
