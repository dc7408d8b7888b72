use crate::{domain::responses::ProductResponse, utils::format_cents};
use serde::{Deserialize, Serialize};

/// Cart contents joined against the live catalogue.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CartResponse {
    pub items: Vec<ProductResponse>,
    pub total: i64,
    pub total_display: String,
}

impl CartResponse {
    pub fn new(items: Vec<ProductResponse>) -> Self {
        let total = items.iter().map(|p| p.price).sum();
        Self {
            items,
            total,
            total_display: format_cents(total),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
