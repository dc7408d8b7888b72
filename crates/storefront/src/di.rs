use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{
        DynCartService, DynCommentRepository, DynCommentService, DynProductCommandRepository,
        DynProductQueryRepository, DynSessionStore,
    },
    config::ConnectionPool,
    repository::{
        CommentRepository, InMemoryCatalogue, ProductCommandRepository, ProductQueryRepository,
    },
    service::{CartService, CommentService, ProductService},
};
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

/// Repository handles for one catalogue backend.
#[derive(Clone)]
pub struct CatalogueRepositories {
    pub query: DynProductQueryRepository,
    pub command: DynProductCommandRepository,
    pub comments: DynCommentRepository,
}

impl CatalogueRepositories {
    pub fn postgres(pool: ConnectionPool) -> Self {
        Self {
            query: Arc::new(ProductQueryRepository::new(pool.clone())),
            command: Arc::new(ProductCommandRepository::new(pool.clone())),
            comments: Arc::new(CommentRepository::new(pool)),
        }
    }

    pub fn memory(catalogue: InMemoryCatalogue) -> Self {
        Self {
            query: Arc::new(catalogue.clone()),
            command: Arc::new(catalogue.clone()),
            comments: Arc::new(catalogue),
        }
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_service: ProductService,
    pub comment_service: DynCommentService,
    pub cart_service: DynCartService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_service", &self.product_service)
            .field("comment_service", &"DynCommentService")
            .field("cart_service", &"DynCartService")
            .finish()
    }
}

impl DependenciesInject {
    pub async fn new(
        repositories: CatalogueRepositories,
        session: DynSessionStore,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        let product_service = ProductService::new(
            repositories.query.clone(),
            repositories.command.clone(),
            repositories.comments.clone(),
            registry.clone(),
        )
        .await;

        let comment_service: DynCommentService = Arc::new(
            CommentService::new(repositories.comments, registry.clone()).await,
        );

        let cart_service: DynCartService = Arc::new(
            CartService::new(session, repositories.query, registry).await,
        );

        Self {
            product_service,
            comment_service,
            cart_service,
        }
    }
}
