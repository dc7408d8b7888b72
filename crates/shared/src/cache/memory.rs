use crate::{abstract_trait::SessionStoreTrait, errors::ServiceError};
use async_trait::async_trait;
use serde_json::Value;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::Mutex;

/// Process-local session store for development and tests. Entries never
/// expire and are lost on restart.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: Arc<Mutex<HashMap<(String, String), Value>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStoreTrait for MemorySessionStore {
    async fn get(&self, session_id: &str, key: &str) -> Result<Option<Value>, ServiceError> {
        let entries = self.entries.lock().await;
        Ok(entries
            .get(&(session_id.to_string(), key.to_string()))
            .cloned())
    }

    async fn set(&self, session_id: &str, key: &str, value: Value) -> Result<(), ServiceError> {
        let mut entries = self.entries.lock().await;
        entries.insert((session_id.to_string(), key.to_string()), value);
        Ok(())
    }

    async fn delete(&self, session_id: &str, key: &str) -> Result<(), ServiceError> {
        let mut entries = self.entries.lock().await;
        entries.remove(&(session_id.to_string(), key.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn values_are_isolated_per_session() {
        let store = MemorySessionStore::new();
        store.set("a", "cart", json!([1, 2])).await.unwrap();

        assert_eq!(store.get("a", "cart").await.unwrap(), Some(json!([1, 2])));
        assert_eq!(store.get("b", "cart").await.unwrap(), None);

        store.delete("a", "cart").await.unwrap();
        assert_eq!(store.get("a", "cart").await.unwrap(), None);
    }
}
