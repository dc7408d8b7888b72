use crate::{
    domain::{requests::CreateCommentRequest, responses::CommentResponse},
    errors::{RepositoryError, ServiceError},
    model::Comment as CommentModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCommentRepository = Arc<dyn CommentRepositoryTrait + Send + Sync>;
pub type DynCommentService = Arc<dyn CommentServiceTrait + Send + Sync>;

#[async_trait]
pub trait CommentRepositoryTrait {
    /// Fails with `RepositoryError::ForeignKey` when the product is absent.
    async fn create_comment(
        &self,
        req: &CreateCommentRequest,
    ) -> Result<CommentModel, RepositoryError>;
    /// Oldest first.
    async fn find_by_product(&self, product_id: i32) -> Result<Vec<CommentModel>, RepositoryError>;
    /// Newest first.
    async fn find_all(&self) -> Result<Vec<CommentModel>, RepositoryError>;
}

#[async_trait]
pub trait CommentServiceTrait {
    async fn create_comment(
        &self,
        req: &CreateCommentRequest,
    ) -> Result<CommentResponse, ServiceError>;
    async fn find_all(&self) -> Result<Vec<CommentResponse>, ServiceError>;
}
