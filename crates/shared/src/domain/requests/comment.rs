use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCommentRequest {
    pub product_id: i32,

    #[validate(length(min = 1, message = "Comment cannot be empty"))]
    pub body: String,
}
