use crate::{
    abstract_trait::{
        CommentRepositoryTrait, ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
    },
    domain::requests::{CreateCommentRequest, CreateProductRequest, UpdateProductRequest},
    errors::RepositoryError,
    model::{Comment as CommentModel, Product as ProductModel},
};
use async_trait::async_trait;
use chrono::Utc;
use std::{collections::BTreeMap, sync::Arc};
use tokio::sync::Mutex;
use tracing::{debug, info};

#[derive(Debug, Default)]
struct CatalogueState {
    products: BTreeMap<i32, ProductModel>,
    comments: BTreeMap<i32, CommentModel>,
    last_product_id: i32,
    last_comment_id: i32,
}

impl CatalogueState {
    fn newest_first(mut products: Vec<ProductModel>) -> Vec<ProductModel> {
        products.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.product_id.cmp(&a.product_id))
        });
        products
    }

    fn cascade(&mut self, product_id: i32) {
        self.comments.retain(|_, c| c.product_id != product_id);
    }
}

/// Catalogue kept in process memory. Serves the same contract as the
/// PostgreSQL repositories, including the comment cascade and the foreign
/// key check, so every repository trait is implemented on one handle.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogue {
    state: Arc<Mutex<CatalogueState>>,
}

impl InMemoryCatalogue {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryCatalogue {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        let state = self.state.lock().await;
        Ok(CatalogueState::newest_first(
            state.products.values().cloned().collect(),
        ))
    }

    async fn search(&self, term: &str) -> Result<Vec<ProductModel>, RepositoryError> {
        let needle = term.trim().to_lowercase();
        let state = self.state.lock().await;

        let matches = state
            .products
            .values()
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        Ok(CatalogueState::newest_first(matches))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        let state = self.state.lock().await;
        Ok(state.products.get(&id).cloned())
    }

    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<ProductModel>, RepositoryError> {
        let state = self.state.lock().await;

        let found = state
            .products
            .values()
            .filter(|p| ids.contains(&p.product_id))
            .cloned()
            .collect();

        Ok(CatalogueState::newest_first(found))
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for InMemoryCatalogue {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut state = self.state.lock().await;
        state.last_product_id += 1;

        let now = Utc::now();
        let product = ProductModel {
            product_id: state.last_product_id,
            name: req.name.clone(),
            price: req.price,
            category: req.category.as_str().to_string(),
            description: req.description.clone(),
            created_at: now,
            updated_at: now,
        };

        state.products.insert(product.product_id, product.clone());
        debug!("Stored product ID {} in memory", product.product_id);
        Ok(product)
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut state = self.state.lock().await;
        let product = state
            .products
            .get_mut(&req.id)
            .ok_or(RepositoryError::NotFound)?;

        product.name = req.name.clone();
        product.price = req.price;
        product.category = req.category.as_str().to_string();
        product.description = req.description.clone();
        product.updated_at = Utc::now();

        Ok(product.clone())
    }

    async fn delete_product(&self, id: i32) -> Result<bool, RepositoryError> {
        let mut state = self.state.lock().await;
        let removed = state.products.remove(&id).is_some();
        if removed {
            state.cascade(id);
        }
        Ok(removed)
    }

    async fn delete_all_products(&self) -> Result<u64, RepositoryError> {
        let mut state = self.state.lock().await;
        let count = state.products.len() as u64;
        state.products.clear();
        state.comments.clear();
        info!("🧹 Cleared {count} products from memory");
        Ok(count)
    }
}

#[async_trait]
impl CommentRepositoryTrait for InMemoryCatalogue {
    async fn create_comment(
        &self,
        req: &CreateCommentRequest,
    ) -> Result<CommentModel, RepositoryError> {
        let mut state = self.state.lock().await;

        if !state.products.contains_key(&req.product_id) {
            return Err(RepositoryError::ForeignKey(format!(
                "product {} does not exist",
                req.product_id
            )));
        }

        state.last_comment_id += 1;
        let comment = CommentModel {
            comment_id: state.last_comment_id,
            product_id: req.product_id,
            body: req.body.clone(),
            created_at: Utc::now(),
        };

        state.comments.insert(comment.comment_id, comment.clone());
        Ok(comment)
    }

    async fn find_by_product(&self, product_id: i32) -> Result<Vec<CommentModel>, RepositoryError> {
        let state = self.state.lock().await;
        let mut comments: Vec<CommentModel> = state
            .comments
            .values()
            .filter(|c| c.product_id == product_id)
            .cloned()
            .collect();

        comments.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then(a.comment_id.cmp(&b.comment_id))
        });
        Ok(comments)
    }

    async fn find_all(&self) -> Result<Vec<CommentModel>, RepositoryError> {
        let state = self.state.lock().await;
        let mut comments: Vec<CommentModel> = state.comments.values().cloned().collect();

        comments.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.comment_id.cmp(&a.comment_id))
        });
        Ok(comments)
    }
}
