use crate::model::Comment as CommentModel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CommentResponse {
    pub id: i32,
    pub product_id: i32,
    pub body: String,
    pub created_at: String,
}

impl From<CommentModel> for CommentResponse {
    fn from(value: CommentModel) -> Self {
        CommentResponse {
            id: value.comment_id,
            product_id: value.product_id,
            body: value.body,
            created_at: value.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}
