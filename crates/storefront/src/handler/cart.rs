use crate::{middleware::VisitorSession, routes, state::AppState, views::CartTemplate};
use askama::Template;
use axum::{
    Router,
    extract::{Extension, Path},
    response::{Html, Redirect},
    routing::{get, post},
};
use shared::{abstract_trait::DynCartService, errors::HttpError};
use std::sync::Arc;

pub async fn index(
    Extension(cart): Extension<DynCartService>,
    Extension(session): Extension<VisitorSession>,
) -> Result<Html<String>, HttpError> {
    let view = cart.view(session.id()).await?;
    Ok(Html(CartTemplate::new(view).render()?))
}

pub async fn add(
    Extension(cart): Extension<DynCartService>,
    Extension(session): Extension<VisitorSession>,
    Path(id): Path<String>,
) -> Result<Redirect, HttpError> {
    let id = routes::parse_id(&id)
        .ok_or_else(|| HttpError::NotFound(format!("No such product: {id}")))?;

    cart.add(session.id(), id).await?;
    Ok(Redirect::to(&routes::path("cart:index")))
}

pub async fn remove_all(
    Extension(cart): Extension<DynCartService>,
    Extension(session): Extension<VisitorSession>,
) -> Result<Redirect, HttpError> {
    cart.remove_all(session.id()).await?;
    Ok(Redirect::to(&routes::path("cart:index")))
}

pub fn cart_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(routes::CART_INDEX, get(index))
        .route(routes::CART_ADD, post(add))
        .route(routes::CART_REMOVE_ALL, post(remove_all))
        .layer(Extension(app_state.di_container.cart_service.clone()))
}
