use crate::{
    forms::ProductForm,
    routes,
    state::AppState,
    views::{
        AdminCommentRow, AdminCommentsTemplate, AdminEditTemplate, AdminProductRow,
        AdminProductsTemplate, NavLinks, ProductFormView,
    },
};
use askama::Template;
use axum::{
    Form, Router,
    extract::{Extension, Path, Query},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use shared::{
    abstract_trait::DynCommentService,
    domain::{requests::UpdateProductRequest, responses::ProductResponse},
    errors::HttpError,
    service::ProductService,
    utils::format_cents,
};
use std::{collections::HashMap, sync::Arc};
use tracing::info;

#[derive(Debug, Default, Deserialize)]
pub struct AdminSearch {
    #[serde(default)]
    pub q: String,
}

fn parse_id(raw: &str) -> Result<i32, HttpError> {
    routes::parse_id(raw).ok_or_else(|| HttpError::NotFound(format!("No such product: {raw}")))
}

async fn load_product(service: &ProductService, id: i32) -> Result<ProductResponse, HttpError> {
    service
        .query
        .find_by_id(id)
        .await?
        .ok_or_else(|| HttpError::NotFound(format!("Product {id} not found")))
}

fn render_edit(product: &ProductResponse, form: ProductFormView) -> Result<Html<String>, HttpError> {
    let template = AdminEditTemplate {
        nav: NavLinks::new(),
        title: format!("Edit {}", product.name),
        product_id: product.id,
        updated_at: product.updated_at.clone(),
        action_url: routes::path_with_id("admin:product_edit", product.id),
        delete_url: routes::path_with_id("admin:product_delete", product.id),
        back_url: routes::path("admin:products"),
        form,
    };
    Ok(Html(template.render()?))
}

pub async fn products(
    Extension(service): Extension<ProductService>,
    Query(search): Query<AdminSearch>,
) -> Result<Html<String>, HttpError> {
    let term = search.q.trim();
    let products = if term.is_empty() {
        service.query.find_all().await?
    } else {
        service.query.search(term).await?
    };

    let template = AdminProductsTemplate {
        nav: NavLinks::new(),
        title: "Administration",
        query: term.to_string(),
        search_url: routes::path("admin:products"),
        comments_url: routes::path("admin:comments"),
        products: products.into_iter().map(AdminProductRow::from).collect(),
    };
    Ok(Html(template.render()?))
}

pub async fn edit_form(
    Extension(service): Extension<ProductService>,
    Path(id): Path<String>,
) -> Result<Html<String>, HttpError> {
    let product = load_product(&service, parse_id(&id)?).await?;

    let form = ProductForm::from_values(
        &product.name,
        &format_cents(product.price),
        &product.category,
        product.description.as_deref().unwrap_or_default(),
    );
    let view = ProductFormView::bound(&form, &Default::default());
    render_edit(&product, view)
}

pub async fn edit_submit(
    Extension(service): Extension<ProductService>,
    Path(id): Path<String>,
    Form(form): Form<ProductForm>,
) -> Result<Response, HttpError> {
    let product = load_product(&service, parse_id(&id)?).await?;

    let request = match form.clean() {
        Ok(request) => request,
        Err(errors) => {
            let view = ProductFormView::bound(&form, &errors);
            return Ok(render_edit(&product, view)?.into_response());
        }
    };

    let updated = service
        .command
        .update_product(&UpdateProductRequest::from_create(product.id, request))
        .await?;
    info!("✅ Admin updated product {}", updated.id);

    Ok(Redirect::to(&routes::path("admin:products")).into_response())
}

pub async fn delete(
    Extension(service): Extension<ProductService>,
    Path(id): Path<String>,
) -> Result<Redirect, HttpError> {
    let id = parse_id(&id)?;

    if !service.command.delete_product(id).await? {
        return Err(HttpError::NotFound(format!("Product {id} not found")));
    }

    Ok(Redirect::to(&routes::path("admin:products")))
}

pub async fn comments(
    Extension(service): Extension<ProductService>,
    Extension(comment_service): Extension<DynCommentService>,
) -> Result<Html<String>, HttpError> {
    let names: HashMap<i32, String> = service
        .query
        .find_all()
        .await?
        .into_iter()
        .map(|p| (p.id, p.name))
        .collect();

    let rows = comment_service
        .find_all()
        .await?
        .into_iter()
        .map(|c| AdminCommentRow {
            product: names
                .get(&c.product_id)
                .cloned()
                .unwrap_or_else(|| format!("#{}", c.product_id)),
            product_url: routes::path_with_id("admin:product_edit", c.product_id),
            id: c.id,
            body: c.body,
            created_at: c.created_at,
        })
        .collect();

    let template = AdminCommentsTemplate {
        nav: NavLinks::new(),
        title: "Comments",
        products_url: routes::path("admin:products"),
        comments: rows,
    };
    Ok(Html(template.render()?))
}

pub fn admin_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(routes::ADMIN_PRODUCTS, get(products))
        .route(routes::ADMIN_PRODUCT_EDIT, get(edit_form).post(edit_submit))
        .route(routes::ADMIN_PRODUCT_DELETE, post(delete))
        .route(routes::ADMIN_COMMENTS, get(comments))
        .layer(Extension(app_state.di_container.product_service.clone()))
        .layer(Extension(app_state.di_container.comment_service.clone()))
}
