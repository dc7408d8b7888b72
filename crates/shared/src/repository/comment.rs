use crate::{
    abstract_trait::CommentRepositoryTrait, config::ConnectionPool,
    domain::requests::CreateCommentRequest, errors::RepositoryError,
    model::Comment as CommentModel,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct CommentRepository {
    db: ConnectionPool,
}

impl CommentRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepositoryTrait for CommentRepository {
    async fn create_comment(
        &self,
        req: &CreateCommentRequest,
    ) -> Result<CommentModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            INSERT INTO comments (product_id, body, created_at)
            VALUES ($1, $2, current_timestamp)
            RETURNING comment_id, product_id, body, created_at
            "#,
        )
        .bind(req.product_id)
        .bind(&req.body)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create comment for product {}: {:?}",
                req.product_id, err
            );
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created comment ID {} on product {}",
            result.comment_id, result.product_id
        );
        Ok(result)
    }

    async fn find_by_product(&self, product_id: i32) -> Result<Vec<CommentModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let comments = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT comment_id, product_id, body, created_at
            FROM comments
            WHERE product_id = $1
            ORDER BY created_at ASC, comment_id ASC
            "#,
        )
        .bind(product_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to fetch comments for product {}: {:?}",
                product_id, err
            );
            RepositoryError::from(err)
        })?;

        Ok(comments)
    }

    async fn find_all(&self) -> Result<Vec<CommentModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let comments = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT comment_id, product_id, body, created_at
            FROM comments
            ORDER BY created_at DESC, comment_id DESC
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch comments: {:?}", err);
            RepositoryError::from(err)
        })?;

        Ok(comments)
    }
}
