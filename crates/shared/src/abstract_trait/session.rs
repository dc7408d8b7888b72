use crate::errors::ServiceError;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

pub type DynSessionStore = Arc<dyn SessionStoreTrait + Send + Sync>;

/// Per-visitor key-value state, addressed by `(session_id, key)`.
#[async_trait]
pub trait SessionStoreTrait {
    async fn get(&self, session_id: &str, key: &str) -> Result<Option<Value>, ServiceError>;
    async fn set(&self, session_id: &str, key: &str, value: Value) -> Result<(), ServiceError>;
    async fn delete(&self, session_id: &str, key: &str) -> Result<(), ServiceError>;
}
