use crate::{domain::responses::CommentResponse, model::Product as ProductModel, utils::format_cents};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub price: i64,
    pub price_display: String,
    pub category: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductResponse {
            id: value.product_id,
            price_display: format_cents(value.price),
            name: value.name,
            price: value.price,
            category: value.category,
            description: value.description,
            created_at: value.created_at.format("%Y-%m-%d %H:%M").to_string(),
            updated_at: value.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProductDetailResponse {
    pub product: ProductResponse,
    pub comments: Vec<CommentResponse>,
}
