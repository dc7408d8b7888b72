use crate::{
    abstract_trait::{DynCommentRepository, DynProductQueryRepository, ProductQueryServiceTrait},
    domain::responses::{CommentResponse, ProductDetailResponse, ProductResponse},
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
    pub comments: DynCommentRepository,
    pub metrics: Metrics,
}

impl ProductQueryService {
    pub async fn new(
        query: DynProductQueryRepository,
        comments: DynCommentRepository,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register("product_query_service", &mut *registry.lock().await);

        Self {
            query,
            comments,
            metrics,
        }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        let ctx = TracingContext::start("find_all_products");

        match self.query.find_all().await {
            Ok(products) => {
                self.metrics.complete_success(
                    &ctx,
                    Method::Get,
                    &format!("{} products", products.len()),
                );
                Ok(products.into_iter().map(ProductResponse::from).collect())
            }
            Err(err) => {
                self.metrics
                    .complete_error(&ctx, Method::Get, "Failed to fetch products");
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn search(&self, term: &str) -> Result<Vec<ProductResponse>, ServiceError> {
        info!("🔍 Searching products for {:?}", term);
        let ctx = TracingContext::start("search_products");

        match self.query.search(term).await {
            Ok(products) => {
                self.metrics.complete_success(
                    &ctx,
                    Method::Get,
                    &format!("{} products matched", products.len()),
                );
                Ok(products.into_iter().map(ProductResponse::from).collect())
            }
            Err(err) => {
                self.metrics
                    .complete_error(&ctx, Method::Get, "Failed to search products");
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductResponse>, ServiceError> {
        let ctx = TracingContext::start("find_product_by_id");

        match self.query.find_by_id(id).await {
            Ok(product) => {
                let message = if product.is_some() {
                    format!("Found product {id}")
                } else {
                    format!("Product {id} not found")
                };
                self.metrics.complete_success(&ctx, Method::Get, &message);
                Ok(product.map(ProductResponse::from))
            }
            Err(err) => {
                self.metrics
                    .complete_error(&ctx, Method::Get, "Failed to fetch product");
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn find_detail(&self, id: i32) -> Result<Option<ProductDetailResponse>, ServiceError> {
        let ctx = TracingContext::start("find_product_detail");

        let product = match self.query.find_by_id(id).await {
            Ok(Some(product)) => product,
            Ok(None) => {
                self.metrics
                    .complete_success(&ctx, Method::Get, &format!("Product {id} not found"));
                return Ok(None);
            }
            Err(err) => {
                self.metrics
                    .complete_error(&ctx, Method::Get, "Failed to fetch product");
                return Err(ServiceError::Repo(err));
            }
        };

        let comments = match self.comments.find_by_product(id).await {
            Ok(comments) => comments,
            Err(err) => {
                error!("❌ Failed to load comments for product {id}: {err:?}");
                self.metrics
                    .complete_error(&ctx, Method::Get, "Failed to fetch comments");
                return Err(ServiceError::Repo(err));
            }
        };

        self.metrics.complete_success(
            &ctx,
            Method::Get,
            &format!("Product {id} with {} comments", comments.len()),
        );

        Ok(Some(ProductDetailResponse {
            product: ProductResponse::from(product),
            comments: comments.into_iter().map(CommentResponse::from).collect(),
        }))
    }
}
