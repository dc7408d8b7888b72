use crate::{
    routes,
    views::{AboutTemplate, HomeTemplate, NavLinks},
};
use askama::Template;
use axum::{Router, response::Html, routing::get};
use shared::errors::HttpError;

pub async fn home() -> Result<Html<String>, HttpError> {
    let template = HomeTemplate {
        nav: NavLinks::new(),
        title: "Welcome to the Online Store",
        header_title: "Your Favourite Online Store",
        tagline: "Quality products delivered to your door.",
    };
    Ok(Html(template.render()?))
}

pub async fn about() -> Result<Html<String>, HttpError> {
    let template = AboutTemplate {
        nav: NavLinks::new(),
        title: "About Us",
        header_title: "About Our Store",
        subtitle: "Our Mission",
        description: "We are a passionate team dedicated to bringing you the best products \
                      at unbeatable prices. Founded in 2020, our store has grown from a small \
                      idea into a thriving online marketplace.",
        author: "Laura Jiménez",
    };
    Ok(Html(template.render()?))
}

pub fn page_routes() -> Router {
    Router::new()
        .route(routes::HOME, get(home))
        .route(routes::ABOUT, get(about))
}
