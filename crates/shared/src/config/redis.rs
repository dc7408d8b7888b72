use anyhow::{Context, Result};
use deadpool_redis::{Pool, Runtime};
use tracing::info;

pub type RedisPool = Pool;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    pub db: u8,
    pub password: Option<String>,
}

impl RedisConfig {
    pub fn new(host: String, port: u16, db: u8, password: Option<String>) -> Self {
        Self {
            host,
            port,
            db,
            password,
        }
    }

    pub fn url(&self) -> String {
        match &self.password {
            Some(pw) => format!("redis://:{}@{}:{}/{}", pw, self.host, self.port, self.db),
            None => format!("redis://{}:{}/{}", self.host, self.port, self.db),
        }
    }

    pub async fn create_pool(&self) -> Result<RedisPool> {
        info!("Creating redis pool for {}:{}", self.host, self.port);

        let pool = deadpool_redis::Config::from_url(self.url())
            .create_pool(Some(Runtime::Tokio1))
            .context("Failed to create redis pool")?;

        let mut conn = pool
            .get()
            .await
            .context("Failed to get redis connection from pool")?;

        let _: () = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .context("Failed to ping redis")?;

        info!("Pinged redis");

        Ok(pool)
    }
}
