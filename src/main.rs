use anyhow::Context;

use pantry_vision::{config::AppConfig, db::connection, db::schema, logging::init_tracing};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("pantry_vision failed: {err:?}");
        eprintln!("pantry_vision failed: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env().context("failed to load config")?;
    init_tracing(&cfg.logging.rust_log)?;

    let db = connection::connect(&cfg.database).await?;
    db.ping().await.context("database did not answer ping")?;
    tracing::info!(
        tables = schema::tables().len(),
        sync_schema = cfg.database.sync_schema,
        "database ready"
    );

    db.close().await?;
    Ok(())
}
