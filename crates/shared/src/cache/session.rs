use crate::{abstract_trait::SessionStoreTrait, errors::ServiceError};
use async_trait::async_trait;
use deadpool_redis::{Connection, Pool, redis::AsyncCommands};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};

/// Session values live under `session:{id}:{key}` and expire with the session.
#[derive(Clone)]
pub struct RedisSessionStore {
    pool: Arc<Pool>,
    ttl_secs: u64,
}

impl RedisSessionStore {
    pub fn new(pool: Pool, ttl_secs: u64) -> Self {
        Self {
            pool: Arc::new(pool),
            ttl_secs,
        }
    }

    fn key(session_id: &str, key: &str) -> String {
        format!("session:{session_id}:{key}")
    }

    async fn get_conn(&self) -> Result<Connection, ServiceError> {
        self.pool.get().await.map_err(|e| {
            error!("Failed to get Redis connection from pool: {:?}", e);
            ServiceError::Session(format!("redis pool: {e}"))
        })
    }
}

#[async_trait]
impl SessionStoreTrait for RedisSessionStore {
    async fn get(&self, session_id: &str, key: &str) -> Result<Option<Value>, ServiceError> {
        let redis_key = Self::key(session_id, key);
        let mut conn = self.get_conn().await?;

        let result: Result<Option<String>, _> = conn.get(&redis_key).await;

        match result {
            Ok(Some(data)) => match serde_json::from_str::<Value>(&data) {
                Ok(value) => {
                    debug!("Session value retrieved for {}", redis_key);
                    Ok(Some(value))
                }
                Err(e) => {
                    error!("Failed to deserialize session value {}: {:?}", redis_key, e);
                    Ok(None)
                }
            },
            Ok(None) => {
                debug!("Session value not found: {}", redis_key);
                Ok(None)
            }
            Err(e) => {
                error!("Redis get error for {}: {:?}", redis_key, e);
                Err(ServiceError::Session(format!("redis get: {e}")))
            }
        }
    }

    async fn set(&self, session_id: &str, key: &str, value: Value) -> Result<(), ServiceError> {
        let redis_key = Self::key(session_id, key);
        let json_data = serde_json::to_string(&value).map_err(|e| {
            error!("Failed to serialize session value: {:?}", e);
            ServiceError::Session(format!("serialize: {e}"))
        })?;

        let mut conn = self.get_conn().await?;
        let result: Result<(), _> = conn.set_ex(&redis_key, &json_data, self.ttl_secs).await;

        match result {
            Ok(_) => {
                debug!("Session value stored for {}", redis_key);
                Ok(())
            }
            Err(e) => {
                error!("Failed to store session value {}: {:?}", redis_key, e);
                Err(ServiceError::Session(format!("redis set: {e}")))
            }
        }
    }

    async fn delete(&self, session_id: &str, key: &str) -> Result<(), ServiceError> {
        let redis_key = Self::key(session_id, key);
        let mut conn = self.get_conn().await?;

        let result: Result<(), _> = conn.del(&redis_key).await;
        match result {
            Ok(_) => {
                debug!("Session value deleted: {}", redis_key);
                Ok(())
            }
            Err(e) => {
                error!("Failed to delete session value {}: {:?}", redis_key, e);
                Err(ServiceError::Session(format!("redis del: {e}")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_scoped_by_session() {
        assert_eq!(RedisSessionStore::key("abc", "cart"), "session:abc:cart");
    }
}
