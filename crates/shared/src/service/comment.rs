use crate::{
    abstract_trait::{CommentServiceTrait, DynCommentRepository},
    domain::{requests::CreateCommentRequest, responses::CommentResponse},
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::error;
use validator::Validate;

pub struct CommentService {
    pub repo: DynCommentRepository,
    pub metrics: Metrics,
}

impl CommentService {
    pub async fn new(repo: DynCommentRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::new();
        metrics.register("comment_service", &mut *registry.lock().await);

        Self { repo, metrics }
    }
}

#[async_trait]
impl CommentServiceTrait for CommentService {
    async fn create_comment(
        &self,
        req: &CreateCommentRequest,
    ) -> Result<CommentResponse, ServiceError> {
        let ctx = TracingContext::start("create_comment");

        if let Err(errors) = req.validate() {
            self.metrics
                .complete_error(&ctx, Method::Post, "Comment validation failed");
            return Err(ServiceError::from(errors));
        }

        match self.repo.create_comment(req).await {
            Ok(comment) => {
                self.metrics
                    .complete_success(&ctx, Method::Post, "Comment created successfully");
                Ok(CommentResponse::from(comment))
            }
            Err(err) => {
                error!(
                    "❌ Failed to create comment on product {}: {err:?}",
                    req.product_id
                );
                self.metrics
                    .complete_error(&ctx, Method::Post, "Failed to create comment");
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn find_all(&self) -> Result<Vec<CommentResponse>, ServiceError> {
        let ctx = TracingContext::start("find_all_comments");

        match self.repo.find_all().await {
            Ok(comments) => {
                self.metrics.complete_success(
                    &ctx,
                    Method::Get,
                    &format!("{} comments", comments.len()),
                );
                Ok(comments.into_iter().map(CommentResponse::from).collect())
            }
            Err(err) => {
                self.metrics
                    .complete_error(&ctx, Method::Get, "Failed to fetch comments");
                Err(ServiceError::Repo(err))
            }
        }
    }
}
