use crate::{domain::responses::CartResponse, errors::ServiceError};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCartService = Arc<dyn CartServiceTrait + Send + Sync>;

#[async_trait]
pub trait CartServiceTrait {
    async fn add(&self, session_id: &str, product_id: i32) -> Result<(), ServiceError>;
    async fn remove_all(&self, session_id: &str) -> Result<(), ServiceError>;
    async fn product_ids(&self, session_id: &str) -> Result<Vec<i32>, ServiceError>;
    async fn view(&self, session_id: &str) -> Result<CartResponse, ServiceError>;
}
