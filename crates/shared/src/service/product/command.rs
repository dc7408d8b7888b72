use crate::{
    abstract_trait::{DynProductCommandRepository, ProductCommandServiceTrait},
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::ProductResponse,
    },
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};
use validator::Validate;

pub struct ProductCommandService {
    pub command: DynProductCommandRepository,
    pub metrics: Metrics,
}

impl ProductCommandService {
    pub async fn new(command: DynProductCommandRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::new();
        metrics.register("product_command_service", &mut *registry.lock().await);

        Self { command, metrics }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        info!("🆕 Creating product: {}", req.name);
        let ctx = TracingContext::start("create_product");

        if let Err(errors) = req.validate() {
            self.metrics
                .complete_error(&ctx, Method::Post, "Product validation failed");
            return Err(ServiceError::from(errors));
        }

        match self.command.create_product(req).await {
            Ok(product) => {
                self.metrics
                    .complete_success(&ctx, Method::Post, "Product created successfully");
                Ok(ProductResponse::from(product))
            }
            Err(err) => {
                error!("❌ Failed to create product: {err:?}");
                self.metrics
                    .complete_error(&ctx, Method::Post, "Failed to create product");
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        info!("🔄 Updating product ID={}", req.id);
        let ctx = TracingContext::start("update_product");

        if let Err(errors) = req.validate() {
            self.metrics
                .complete_error(&ctx, Method::Put, "Product validation failed");
            return Err(ServiceError::from(errors));
        }

        match self.command.update_product(req).await {
            Ok(product) => {
                self.metrics
                    .complete_success(&ctx, Method::Put, "Product updated successfully");
                Ok(ProductResponse::from(product))
            }
            Err(err) => {
                error!("❌ Failed to update product {}: {err:?}", req.id);
                self.metrics
                    .complete_error(&ctx, Method::Put, "Failed to update product");
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn delete_product(&self, id: i32) -> Result<bool, ServiceError> {
        info!("🗑️ Deleting product ID={id}");
        let ctx = TracingContext::start("delete_product");

        match self.command.delete_product(id).await {
            Ok(removed) => {
                self.metrics
                    .complete_success(&ctx, Method::Delete, "Product delete processed");
                Ok(removed)
            }
            Err(err) => {
                self.metrics
                    .complete_error(&ctx, Method::Delete, "Failed to delete product");
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn delete_all_products(&self) -> Result<u64, ServiceError> {
        info!("🧹 Deleting all products");
        let ctx = TracingContext::start("delete_all_products");

        match self.command.delete_all_products().await {
            Ok(count) => {
                self.metrics.complete_success(
                    &ctx,
                    Method::Delete,
                    &format!("Deleted {count} products"),
                );
                Ok(count)
            }
            Err(err) => {
                self.metrics
                    .complete_error(&ctx, Method::Delete, "Failed to delete all products");
                Err(ServiceError::Repo(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::requests::Category, repository::InMemoryCatalogue};

    async fn service() -> ProductCommandService {
        let registry = Arc::new(Mutex::new(Registry::default()));
        ProductCommandService::new(Arc::new(InMemoryCatalogue::new()), registry).await
    }

    #[tokio::test]
    async fn rejects_a_non_positive_price_without_persisting() {
        let service = service().await;
        let err = service
            .create_product(&CreateProductRequest {
                name: "Freebie".into(),
                price: 0,
                category: Category::Other,
                description: None,
            })
            .await
            .unwrap_err();

        match err {
            ServiceError::Validation(messages) => {
                assert_eq!(messages, ["price: Price must be greater than $0.00."]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(service.delete_all_products().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn update_of_a_missing_product_is_not_found() {
        let service = service().await;
        let err = service
            .update_product(&UpdateProductRequest {
                id: 7,
                name: "Ghost".into(),
                price: 100,
                category: Category::Books,
                description: None,
            })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
