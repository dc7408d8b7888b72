use crate::{
    forms::ProductForm,
    routes,
    state::AppState,
    views::{
        NavLinks, ProductCard, ProductCreateTemplate, ProductFormView, ProductIndexTemplate,
        ProductShowTemplate, SubmittedProduct,
    },
};
use askama::Template;
use axum::{
    Form, Router,
    extract::{Extension, Path},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use shared::{errors::HttpError, service::ProductService};
use std::sync::Arc;
use tracing::{info, warn};

const CREATE_TITLE: &str = "Create Product";
const CREATE_HEADER: &str = "New Product";

async fn render_index(
    service: &ProductService,
    title: &'static str,
    header_title: &'static str,
) -> Result<Html<String>, HttpError> {
    let products = service.query.find_all().await?;

    let template = ProductIndexTemplate {
        nav: NavLinks::new(),
        title,
        header_title,
        products: products.into_iter().map(ProductCard::from).collect(),
    };
    Ok(Html(template.render()?))
}

pub async fn index(
    Extension(service): Extension<ProductService>,
) -> Result<Html<String>, HttpError> {
    render_index(&service, "Our Products", "Product Catalogue").await
}

pub async fn list(
    Extension(service): Extension<ProductService>,
) -> Result<Html<String>, HttpError> {
    render_index(&service, "Product Listing", "All Products").await
}

/// Product detail. An unknown or non-numeric id sends the visitor home.
pub async fn show(
    Extension(service): Extension<ProductService>,
    Path(id): Path<String>,
) -> Result<Response, HttpError> {
    let Some(id) = routes::parse_id(&id) else {
        warn!("⚠️ Non-numeric product id {id:?}, redirecting home");
        return Ok(Redirect::to(routes::HOME).into_response());
    };

    let Some(detail) = service.query.find_detail(id).await? else {
        info!("🔍 Product {id} not found, redirecting home");
        return Ok(Redirect::to(routes::HOME).into_response());
    };

    let template = ProductShowTemplate {
        nav: NavLinks::new(),
        title: detail.product.name.clone(),
        header_title: "Details",
        product: ProductCard::from(detail.product),
        comments: detail.comments,
    };
    Ok(Html(template.render()?).into_response())
}

fn render_create(
    form: ProductFormView,
    submitted: Option<SubmittedProduct>,
) -> Result<Html<String>, HttpError> {
    let template = ProductCreateTemplate {
        nav: NavLinks::new(),
        title: CREATE_TITLE,
        header_title: CREATE_HEADER,
        action_url: routes::path("products:create"),
        form,
        success: submitted.is_some(),
        submitted,
    };
    Ok(Html(template.render()?))
}

pub async fn create_form() -> Result<Html<String>, HttpError> {
    render_create(ProductFormView::empty(), None)
}

/// Validates and stores a new product. Invalid input is re-rendered with
/// inline errors; a successful save shows a fresh form plus a summary.
pub async fn create_submit(
    Extension(service): Extension<ProductService>,
    Form(form): Form<ProductForm>,
) -> Result<Html<String>, HttpError> {
    let request = match form.clean() {
        Ok(request) => request,
        Err(errors) => {
            info!(
                "📝 Product form rejected: {}",
                errors.fields().collect::<Vec<_>>().join(", ")
            );
            return render_create(ProductFormView::bound(&form, &errors), None);
        }
    };

    let product = service.command.create_product(&request).await?;

    render_create(
        ProductFormView::empty(),
        Some(SubmittedProduct {
            name: product.name,
            price_display: product.price_display,
        }),
    )
}

pub fn product_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(routes::PRODUCTS_INDEX, get(index))
        .route(routes::PRODUCTS_LIST, get(list))
        .route(routes::PRODUCTS_CREATE, get(create_form).post(create_submit))
        .route(routes::PRODUCTS_SHOW, get(show))
        .layer(Extension(app_state.di_container.product_service.clone()))
}
