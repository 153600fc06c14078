use anyhow::Context;
use sea_orm::DatabaseConnection;
use tracing::info;

use super::{providers, schema};
use crate::config::DatabaseConfig;

pub const ENTITY_REGISTRY_PREFIX: &str = "pantry_vision::db::entities::*";

pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let registry = providers::default_registry()?;
    let provider = registry.provider_for_url(&cfg.url)?;
    info!(provider = provider.id().as_str(), "connecting to database");

    let db = provider.connect(cfg).await?;
    provider
        .post_connect(&db, cfg)
        .await
        .with_context(|| format!("{} post-connect setup failed", provider.id().as_str()))?;

    if cfg.sync_schema {
        sync_schema(&db).await?;
    }
    Ok(db)
}

pub async fn sync_schema(db: &DatabaseConnection) -> anyhow::Result<()> {
    info!("syncing database schema from entities");
    db.get_schema_registry(ENTITY_REGISTRY_PREFIX)
        .sync(db)
        .await
        .context("schema sync failed")?;

    for table in schema::tables() {
        info!(
            table = table.table,
            columns = table.columns.len(),
            "table ready"
        );
    }
    Ok(())
}
