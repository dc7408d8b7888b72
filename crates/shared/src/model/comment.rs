use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub comment_id: i32,
    pub product_id: i32,
    pub body: String,
    pub created_at: DateTime<Utc>,
}
