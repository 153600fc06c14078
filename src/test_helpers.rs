use chrono::{DateTime, FixedOffset, TimeZone};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};

use crate::{
    config::DatabaseConfig,
    db::connection,
    db::entities::{grocery_list, user},
    services::ServiceContext,
};

pub fn fixed_ts() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .and_then(|offset| offset.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).single())
        .expect("fixed timestamp should be valid")
}

pub fn user_model(id: i64, email: &str) -> user::Model {
    let now = fixed_ts();
    user::Model {
        id,
        email: email.to_string(),
        created_at: now,
        updated_at: now,
    }
}

pub fn grocery_list_model(
    id: i64,
    owner_id: i64,
    title: Option<&str>,
    ingredients: Option<&str>,
) -> grocery_list::Model {
    let now = fixed_ts();
    grocery_list::Model {
        id,
        title: title.map(str::to_string),
        ingredients: ingredients.map(str::to_string),
        owner_id,
        created_at: now,
        updated_at: now,
    }
}

/// Services over a Postgres mock; `setup` queues the rows each query returns.
pub fn mock_services(setup: impl FnOnce(MockDatabase) -> MockDatabase) -> ServiceContext {
    let db = setup(MockDatabase::new(DatabaseBackend::Postgres)).into_connection();
    ServiceContext::new(&db)
}

/// Fresh in-memory SQLite store with both tables created. Each SQLite memory
/// connection is its own database, so the pool holds exactly one.
pub async fn sqlite_db() -> DatabaseConnection {
    let cfg = DatabaseConfig {
        max_connections: 1,
        min_idle: 1,
        sync_schema: false,
        ..DatabaseConfig::new("sqlite::memory:")
    };
    let db = connection::connect(&cfg)
        .await
        .expect("in-memory sqlite should connect");
    db.get_schema_builder()
        .register(user::Entity)
        .register(grocery_list::Entity)
        .sync(&db)
        .await
        .expect("sqlite schema should sync");
    db
}
