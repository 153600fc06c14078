use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::{defaults, envconfig::EnvConfig, validate};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        <Self as EnvConfig>::from_env()
    }
}

impl EnvConfig for AppConfig {
    fn validate(&self) -> Result<()> {
        validate::validate(self)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub rust_log: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            rust_log: defaults::DEFAULT_RUST_LOG.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_db_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_db_min_idle")]
    pub min_idle: u32,
    #[serde(default = "default_db_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_db_sync_schema")]
    pub sync_schema: bool,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: default_db_max_connections(),
            min_idle: default_db_min_idle(),
            connect_timeout_secs: default_db_connect_timeout_secs(),
            sync_schema: default_db_sync_schema(),
        }
    }
}

fn default_db_max_connections() -> u32 {
    defaults::DEFAULT_DB_MAX_CONNECTIONS as u32
}

fn default_db_min_idle() -> u32 {
    defaults::DEFAULT_DB_MIN_IDLE as u32
}

fn default_db_connect_timeout_secs() -> u64 {
    defaults::DEFAULT_DB_CONNECT_TIMEOUT_SECS as u64
}

fn default_db_sync_schema() -> bool {
    defaults::DEFAULT_DB_SYNC_SCHEMA
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use ::config as config_rs;

    use super::AppConfig;
    use crate::config::EnvConfig;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AppConfig::from_source(config_rs::Environment::default().source(Some(source)))
    }

    #[test]
    fn reads_nested_keys_with_defaults() {
        let cfg = load(&[("APP_DATABASE__URL", "postgres://localhost/pantry")])
            .expect("config should load");

        assert_eq!(cfg.database.url, "postgres://localhost/pantry");
        assert_eq!(cfg.database.max_connections, 10);
        assert_eq!(cfg.database.min_idle, 2);
        assert_eq!(cfg.database.connect_timeout_secs, 5);
        assert!(cfg.database.sync_schema);
        assert_eq!(cfg.logging.rust_log, "info,sqlx=warn");
    }

    #[test]
    fn parses_typed_overrides() {
        let cfg = load(&[
            ("APP_DATABASE__URL", "sqlite::memory:"),
            ("APP_DATABASE__MAX_CONNECTIONS", "1"),
            ("APP_DATABASE__MIN_IDLE", "1"),
            ("APP_DATABASE__SYNC_SCHEMA", "false"),
            ("APP_LOGGING__RUST_LOG", "debug"),
        ])
        .expect("config should load");

        assert_eq!(cfg.database.max_connections, 1);
        assert!(!cfg.database.sync_schema);
        assert_eq!(cfg.logging.rust_log, "debug");
    }

    #[test]
    fn missing_database_url_fails() {
        let err = load(&[]).expect_err("database section is required");
        assert!(err.to_string().contains("deserialize"));
    }

    #[test]
    fn validation_runs_after_loading() {
        let err = load(&[
            ("APP_DATABASE__URL", "postgres://localhost/pantry"),
            ("APP_DATABASE__MAX_CONNECTIONS", "1"),
            ("APP_DATABASE__MIN_IDLE", "4"),
        ])
        .expect_err("min_idle above max_connections should fail");
        assert!(err.to_string().contains("database.min_idle (4)"));
    }
}
