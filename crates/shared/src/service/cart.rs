use crate::{
    abstract_trait::{CartServiceTrait, DynProductQueryRepository, DynSessionStore},
    domain::responses::{CartResponse, ProductResponse},
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

pub const CART_SESSION_KEY: &str = "cart";

/// Cart held in the visitor's session as a set of product ids.
pub struct CartService {
    pub session: DynSessionStore,
    pub query: DynProductQueryRepository,
    pub metrics: Metrics,
}

impl CartService {
    pub async fn new(
        session: DynSessionStore,
        query: DynProductQueryRepository,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register("cart_service", &mut *registry.lock().await);

        Self {
            session,
            query,
            metrics,
        }
    }

    async fn load_ids(&self, session_id: &str) -> Result<Vec<i32>, ServiceError> {
        let Some(value) = self.session.get(session_id, CART_SESSION_KEY).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_value::<Vec<i32>>(value) {
            Ok(ids) => Ok(ids),
            Err(e) => {
                warn!("⚠️ Discarding malformed cart in session {session_id}: {e}");
                Ok(Vec::new())
            }
        }
    }
}

#[async_trait]
impl CartServiceTrait for CartService {
    async fn add(&self, session_id: &str, product_id: i32) -> Result<(), ServiceError> {
        info!("🛒 Adding product {product_id} to cart");
        let ctx = TracingContext::start("cart_add");

        let result = async {
            let mut ids = self.load_ids(session_id).await?;
            if !ids.contains(&product_id) {
                ids.push(product_id);
            }
            self.session
                .set(session_id, CART_SESSION_KEY, Value::from(ids))
                .await
        }
        .await;

        match &result {
            Ok(()) => self
                .metrics
                .complete_success(&ctx, Method::Post, "Product added to cart"),
            Err(_) => self
                .metrics
                .complete_error(&ctx, Method::Post, "Failed to add product to cart"),
        }
        result
    }

    async fn remove_all(&self, session_id: &str) -> Result<(), ServiceError> {
        info!("🧹 Clearing cart");
        let ctx = TracingContext::start("cart_remove_all");

        let result = self.session.delete(session_id, CART_SESSION_KEY).await;

        match &result {
            Ok(()) => self
                .metrics
                .complete_success(&ctx, Method::Delete, "Cart cleared"),
            Err(_) => self
                .metrics
                .complete_error(&ctx, Method::Delete, "Failed to clear cart"),
        }
        result
    }

    async fn product_ids(&self, session_id: &str) -> Result<Vec<i32>, ServiceError> {
        self.load_ids(session_id).await
    }

    async fn view(&self, session_id: &str) -> Result<CartResponse, ServiceError> {
        let ctx = TracingContext::start("cart_view");

        let ids = match self.load_ids(session_id).await {
            Ok(ids) => ids,
            Err(err) => {
                self.metrics
                    .complete_error(&ctx, Method::Get, "Failed to read cart");
                return Err(err);
            }
        };

        match self.query.find_by_ids(&ids).await {
            Ok(products) => {
                self.metrics.complete_success(
                    &ctx,
                    Method::Get,
                    &format!("{} of {} cart entries in catalogue", products.len(), ids.len()),
                );
                Ok(CartResponse::new(
                    products.into_iter().map(ProductResponse::from).collect(),
                ))
            }
            Err(err) => {
                self.metrics
                    .complete_error(&ctx, Method::Get, "Failed to load cart products");
                Err(ServiceError::Repo(err))
            }
        }
    }
}
