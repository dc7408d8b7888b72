mod admin;
mod cart;
mod pages;
mod product;

use crate::{middleware::session_middleware, routes, state::AppState};
use anyhow::Result;
use axum::{
    Router,
    body::Body,
    extract::{DefaultBodyLimit, State},
    http::{StatusCode, header::CONTENT_TYPE},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use shared::utils::{metrics_handler_body, shutdown_signal};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, services::ServeDir, trace::TraceLayer};
use tracing::{error, info};

pub use self::admin::admin_routes;
pub use self::cart::cart_routes;
pub use self::pages::page_routes;
pub use self::product::product_routes;

const BODY_LIMIT_BYTES: usize = 64 * 1024;

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    let registry = state.registry.lock().await;

    match metrics_handler_body(&registry) {
        Ok(buffer) => (
            StatusCode::OK,
            [(
                CONTENT_TYPE,
                "application/openmetrics-text; version=1.0.0; charset=utf-8",
            )],
            Body::from(buffer),
        )
            .into_response(),
        Err(e) => {
            error!("❌ Failed to encode metrics: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to encode metrics: {e}"),
            )
                .into_response()
        }
    }
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let mut router = Router::new()
            .route(routes::METRICS, get(metrics_handler))
            .with_state(shared_state.clone())
            .merge(page_routes())
            .merge(product_routes(shared_state.clone()))
            .merge(cart_routes(shared_state.clone()));

        if shared_state.admin_enabled {
            info!("🛠️ Admin interface mounted at {}", routes::ADMIN_PRODUCTS);
            router = router.merge(admin_routes(shared_state.clone()));
        }

        router
            .nest_service(
                routes::STATIC,
                ServeDir::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
            )
            .layer(middleware::from_fn(session_middleware))
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📊 Metrics: http://localhost:{port}{}", routes::METRICS);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
