use crate::config::RedisConfig;
use anyhow::{Context, Result, anyhow};

const DEFAULT_DB_MAX_CONN: u32 = 5;
const DEFAULT_SESSION_TTL_SECS: u64 = 60 * 60 * 24 * 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogueBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionBackend {
    Redis,
    Memory,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub run_migrations: bool,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub backend: SessionBackend,
    pub redis: RedisConfig,
    pub ttl_secs: u64,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub catalogue_backend: CatalogueBackend,
    /// Present only for the postgres catalogue.
    pub database: Option<DatabaseConfig>,
    pub session: SessionConfig,
    pub admin_enabled: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = get("PORT")
            .context("Missing environment variable: PORT")?
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let catalogue_backend = match get("CATALOGUE_BACKEND").as_deref() {
            None | Some("postgres") => CatalogueBackend::Postgres,
            Some("memory") => CatalogueBackend::Memory,
            Some(other) => {
                return Err(anyhow!(
                    "CATALOGUE_BACKEND must be 'postgres' or 'memory', got '{}'",
                    other
                ));
            }
        };

        let database = match catalogue_backend {
            CatalogueBackend::Postgres => {
                let url = get("DATABASE_URL")
                    .context("Missing environment variable: DATABASE_URL")?;

                let max_connections = match get("DB_MAX_CONN") {
                    Some(v) => v
                        .parse::<u32>()
                        .context("DB_MAX_CONN must be a valid u32 integer")?,
                    None => DEFAULT_DB_MAX_CONN,
                };

                let run_migrations = match get("RUN_MIGRATIONS") {
                    Some(v) => parse_bool("RUN_MIGRATIONS", &v)?,
                    None => true,
                };

                Some(DatabaseConfig {
                    url,
                    max_connections,
                    run_migrations,
                })
            }
            CatalogueBackend::Memory => None,
        };

        let session_backend = match get("SESSION_BACKEND").as_deref() {
            None | Some("memory") => SessionBackend::Memory,
            Some("redis") => SessionBackend::Redis,
            Some(other) => {
                return Err(anyhow!(
                    "SESSION_BACKEND must be 'redis' or 'memory', got '{}'",
                    other
                ));
            }
        };

        let redis_port = match get("REDIS_PORT") {
            Some(v) => v
                .parse::<u16>()
                .context("REDIS_PORT must be a valid u16 integer")?,
            None => 6379,
        };

        let redis_db = match get("REDIS_DB") {
            Some(v) => v.parse::<u8>().context("REDIS_DB must be a valid u8 integer")?,
            None => 0,
        };

        let redis = RedisConfig::new(
            get("REDIS_HOST").unwrap_or_else(|| "localhost".to_string()),
            redis_port,
            redis_db,
            get("REDIS_PASSWORD").filter(|pw| !pw.is_empty()),
        );

        let ttl_secs = match get("SESSION_TTL_SECS") {
            Some(v) => v
                .parse::<u64>()
                .context("SESSION_TTL_SECS must be a valid u64 integer")?,
            None => DEFAULT_SESSION_TTL_SECS,
        };

        let admin_enabled = match get("ADMIN_ENABLED") {
            Some(v) => parse_bool("ADMIN_ENABLED", &v)?,
            None => false,
        };

        Ok(Self {
            port,
            catalogue_backend,
            database,
            session: SessionConfig {
                backend: session_backend,
                redis,
                ttl_secs,
            },
            admin_enabled,
        })
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(anyhow!("{} must be 'true' or 'false', got '{}'", name, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_for_a_postgres_catalogue() {
        let config = load(&[("PORT", "8000"), ("DATABASE_URL", "postgres://localhost/store")])
            .unwrap();

        assert_eq!(config.port, 8000);
        assert_eq!(config.catalogue_backend, CatalogueBackend::Postgres);
        let db = config.database.unwrap();
        assert_eq!(db.max_connections, 5);
        assert!(db.run_migrations);
        assert_eq!(config.session.backend, SessionBackend::Memory);
        assert_eq!(config.session.ttl_secs, 1_209_600);
        assert_eq!(config.session.redis.url(), "redis://localhost:6379/0");
        assert!(!config.admin_enabled);
    }

    #[test]
    fn memory_catalogue_needs_no_database_url() {
        let config = load(&[("PORT", "8000"), ("CATALOGUE_BACKEND", "memory")]).unwrap();
        assert!(config.database.is_none());
    }

    #[test]
    fn postgres_catalogue_requires_database_url() {
        let err = load(&[("PORT", "8000")]).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn booleans_are_strict() {
        let err = load(&[
            ("PORT", "8000"),
            ("CATALOGUE_BACKEND", "memory"),
            ("ADMIN_ENABLED", "yes"),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("ADMIN_ENABLED"));
    }

    #[test]
    fn missing_port_is_reported() {
        let err = load(&[("CATALOGUE_BACKEND", "memory")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
